//! 目录选择器：只看列表里的目录，不发任何网络请求。

use crate::internal::remote_entry::structs::processed_entry::ProcessedEntry;
use crate::internal::remote_entry::structs::remote_entry::RemoteEntry;

use super::structs::{FolderBucket, SelectError, StalenessPolicy, TraversalState};

/// 把列表中的每个目录算好修改时间和过期标记后放进累加器，返回累加器中全部目录。
///
/// 任一目录的修改时间无法识别时返回错误，累加器保持不变。
pub fn select_directories(
    entries: &[RemoteEntry],
    policy: &StalenessPolicy,
    state: &mut TraversalState,
) -> Result<FolderBucket, SelectError> {
    // 全部成功后才写入累加器，失败的调用不留下任何条目
    let mut staged = Vec::new();

    for entry in entries.iter().filter(|e| e.is_directory()) {
        let (modified, rfc_date, update_required) = policy.evaluate(entry)?;

        staged.push(ProcessedEntry {
            name: entry.name.clone(),
            kind: entry.kind,
            modified,
            rfc_date,
            update_required,
            target: None,
        });
    }

    for entry in staged {
        state.insert_directory(entry);
    }

    Ok(state.directories().clone())
}
