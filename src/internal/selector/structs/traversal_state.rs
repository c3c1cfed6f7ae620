use std::collections::HashMap;

use crate::internal::remote_entry::structs::processed_entry::ProcessedEntry;

use super::folder_bucket::FolderBucket;

/// 选择结果的累加器，由调用方持有并传入每次选择。
///
/// 同一个累加器跨多次调用复用时，之前发现的条目会一直保留；
/// 文件选择器开启下载时会把该目录键下累计的所有条目重新拉一遍。
/// 需要互不影响的结果时，每次传入 [`TraversalState::new`] 即可。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalState {
    directories: FolderBucket,
    folders: HashMap<String, FolderBucket>,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 目录选择器收集到的目录
    pub fn directories(&self) -> &FolderBucket {
        &self.directories
    }

    /// 某个目录键下收集到的文件
    pub fn folder(&self, key: &str) -> Option<&FolderBucket> {
        self.folders.get(key)
    }

    pub fn folder_keys(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.folders.values().all(FolderBucket::is_empty)
    }

    pub(crate) fn insert_directory(&mut self, entry: ProcessedEntry) {
        self.directories.insert(entry);
    }

    pub(crate) fn insert_file(&mut self, folder: &str, entry: ProcessedEntry) {
        self.folders
            .entry(folder.to_string())
            .or_default()
            .insert(entry);
    }
}
