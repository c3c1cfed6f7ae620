//! 本地镜像目录的准备工作。

use std::io;
use std::path::{Path, PathBuf};

/// 目录已存在（或同名路径已存在）则直接返回，否则逐级创建。
///
/// 爬虫下钻子目录前调用，失败时该子树不会被遍历。
pub async fn ensure_local_dir(path: &Path) -> io::Result<()> {
    if tokio::fs::try_exists(path).await? {
        return Ok(());
    }
    tokio::fs::create_dir_all(path).await
}

/// 存放目录不存在时创建（只建最后一级）。
pub async fn ensure_storage_dir(path: &Path) -> io::Result<()> {
    if tokio::fs::try_exists(path).await? {
        return Ok(());
    }
    tokio::fs::create_dir(path).await
}

/// 本地根目录的绝对路径，必须已存在。
pub async fn resolve_local_base(path: &Path) -> io::Result<PathBuf> {
    tokio::fs::canonicalize(path).await
}
