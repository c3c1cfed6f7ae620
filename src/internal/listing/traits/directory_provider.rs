//! 目录提供者：给定远程路径，返回该目录的直接子项。

use async_trait::async_trait;

use crate::internal::listing::structs::listing_error::ListingError;
use crate::internal::remote_entry::structs::remote_entry::RemoteEntry;

#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// 列出 `path` 下的条目，顺序与接口返回一致。
    async fn list(&self, path: &str) -> Result<Vec<RemoteEntry>, ListingError>;
}
