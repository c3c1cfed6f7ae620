//! 认证与地址拼接相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("基础地址为空")]
    EmptyBaseUrl,

    #[error("基础地址解析失败: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("认证头构造失败: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP 客户端构建失败: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("路径格式错误: {path}")]
    InvalidPath { path: String },

    /// 拼接后的地址跑出了基础地址（父目录、其他主机等）。
    #[error("父目录不允许: {path}")]
    OutsideBase { path: String },
}
