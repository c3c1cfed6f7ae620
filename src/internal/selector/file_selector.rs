//! 文件选择器：过滤旧版本、计算过期标记和落地路径，可选地把结果拉到本地。

use std::path::Path;

use tracing::{debug, warn};

use crate::internal::entrance::local::ensure_storage_dir;
use crate::internal::fetcher::structs::fetch_error::FetchError;
use crate::internal::fetcher::traits::blob_fetcher::BlobFetcher;
use crate::internal::remote_entry::structs::processed_entry::{FileTarget, ProcessedEntry};
use crate::internal::remote_entry::structs::remote_entry::RemoteEntry;

use super::paths::{folder_key, join_remote, local_sink, strip_remote_root};
use super::structs::{FolderBucket, SelectError, StalenessPolicy, TraversalState};
use super::version_filter::is_versioned;

/// 一次文件选择的参数。
#[derive(Debug, Clone, Copy)]
pub struct FileScan<'a> {
    /// 被列出的远程目录
    pub path: &'a str,
    /// 本次最多选中的文件数，0 表示不限
    pub count: usize,
    /// 已解析（canonicalize）过的本地根目录
    pub resolved_base: &'a Path,
}

/// 选择列表中的普通文件，写入累加器中 `path` 的目录键下，返回该目录键。
///
/// 达到 `count` 后立即停止，后面的条目不再检查。
/// 出错时累加器保持调用前的样子，已处理的条目一个都不会留下。
pub fn select_files(
    entries: &[RemoteEntry],
    scan: FileScan<'_>,
    policy: &StalenessPolicy,
    state: &mut TraversalState,
) -> Result<String, SelectError> {
    let folder = folder_key(scan.path)
        .ok_or_else(|| SelectError::MissingFolderKey {
            path: scan.path.to_string(),
        })?
        .to_string();
    let storage = scan.resolved_base.join(&folder);

    let mut staged = Vec::new();

    for entry in entries
        .iter()
        .filter(|e| e.is_regular_file() && !is_versioned(&e.name))
    {
        let (modified, rfc_date, update_required) = policy.evaluate(entry)?;

        let remote_path = join_remote(scan.path, &entry.name);
        let local_relative_path = strip_remote_root(&remote_path).to_string();
        let sink = local_sink(scan.resolved_base, &local_relative_path).ok_or_else(|| {
            SelectError::UnsafeLocalPath {
                remote_path: remote_path.clone(),
            }
        })?;

        debug!(
            folder = %folder,
            file = %entry.name,
            update_required,
            "selected file"
        );

        staged.push(ProcessedEntry {
            name: entry.name.clone(),
            kind: entry.kind,
            modified,
            rfc_date,
            update_required,
            target: Some(FileTarget {
                folder: folder.clone(),
                storage: storage.clone(),
                remote_path,
                local_relative_path,
                sink,
            }),
        });

        if scan.count != 0 && staged.len() >= scan.count {
            break;
        }
    }

    // 整个列表都处理成功后才写入累加器
    for entry in staged {
        state.insert_file(&folder, entry);
    }

    Ok(folder)
}

/// 把目录键下累计的每个文件拉到本地，返回实际写入的路径。
///
/// 拉取前确保 `storage` 目录存在；创建失败只记日志，拉取本身的错误原样返回。
pub async fn download_bucket<F>(
    fetcher: &F,
    bucket: &FolderBucket,
) -> Result<Vec<std::path::PathBuf>, FetchError>
where
    F: BlobFetcher + ?Sized,
{
    let mut fetched = Vec::with_capacity(bucket.len());

    for target in bucket.iter().filter_map(|e| e.target.as_ref()) {
        if let Err(e) = ensure_storage_dir(&target.storage).await {
            warn!(
                storage = %target.storage.display(),
                error = %e,
                "failed to create storage directory"
            );
        }

        fetcher.fetch(&target.remote_path, &target.sink).await?;
        fetched.push(target.sink.clone());
    }

    Ok(fetched)
}
