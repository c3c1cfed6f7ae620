//! 列表请求相关错误类型。

use reqwest::StatusCode;
use thiserror::Error;

use crate::internal::auth::structs::auth_error::AuthError;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// 连接失败、超时等网络层错误
    #[error("请求 {url} 失败: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("接口返回 {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// 响应体不是预期的列表结构（缺少 files、字段类型不对等）
    #[error("列表解析失败: {0}")]
    Decode(#[from] serde_json::Error),
}
