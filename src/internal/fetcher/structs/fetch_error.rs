//! 拉取相关错误类型。

use reqwest::StatusCode;
use thiserror::Error;

use crate::internal::auth::structs::auth_error::AuthError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("拉取 {url} 返回 {status}")]
    Status { url: String, status: StatusCode },

    #[error("创建目录失败: {0}")]
    CreateDir(std::io::Error),

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(tokio::io::Error),
}
