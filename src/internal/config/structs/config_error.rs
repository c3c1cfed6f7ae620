//! 配置相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("缺少环境变量 {0}")]
    Missing(&'static str),

    #[error("环境变量 {key} 的值无效: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("加载 env 文件失败: {0}")]
    EnvFile(#[from] dotenvy::Error),
}
