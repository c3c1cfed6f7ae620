use std::path::PathBuf;

/// 一次递归镜像的结果。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// 已写入的本地文件，按拉取顺序
    pub fetched: Vec<PathBuf>,
    /// 本地目录创建失败、因此没有遍历的子目录
    pub skipped_directories: Vec<SkippedDirectory>,
    /// 被忽略的旧版本文件数
    pub versioned_ignored: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDirectory {
    pub remote_path: String,
    pub local_path: PathBuf,
    pub reason: String,
}
