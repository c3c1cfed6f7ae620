//! 文件拉取 trait：把一个远程文件写到给定的本地路径。

use std::path::Path;

use async_trait::async_trait;

use crate::internal::fetcher::structs::fetch_error::FetchError;

#[async_trait]
pub trait BlobFetcher: Send + Sync {
    /// 拉取 `remote_path` 并写入 `sink`，返回写入的字节数。
    async fn fetch(&self, remote_path: &str, sink: &Path) -> Result<u64, FetchError>;
}
