//! 爬虫错误类型。

use std::path::PathBuf;

use thiserror::Error;

use crate::internal::auth::structs::auth_error::AuthError;
use crate::internal::fetcher::structs::fetch_error::FetchError;
use crate::internal::listing::structs::listing_error::ListingError;
use crate::internal::selector::structs::SelectError;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// 递归镜像时的列表失败，保留原始错误
    #[error("{0}")]
    Listing(#[from] ListingError),

    /// `request` 入口的列表失败统一归到这里，原因仍可通过 source 取到
    #[error("请求 {path} 失败: {source}")]
    Request {
        path: String,
        #[source]
        source: ListingError,
    },

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Select(#[from] SelectError),

    #[error("本地根目录 {path} 不可用: {source}")]
    LocalBase {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
