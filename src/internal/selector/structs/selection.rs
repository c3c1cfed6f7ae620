use std::path::PathBuf;

use super::folder_bucket::FolderBucket;

/// 一次 `request` 的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 只看目录：累加器中全部目录的快照
    Directories(FolderBucket),
    /// 选文件：该目录键下累计的全部文件，以及本次实际写入的本地路径
    Files {
        folder: String,
        entries: FolderBucket,
        fetched: Vec<PathBuf>,
    },
}

impl Selection {
    pub fn entries(&self) -> &FolderBucket {
        match self {
            Selection::Directories(entries) => entries,
            Selection::Files { entries, .. } => entries,
        }
    }
}
