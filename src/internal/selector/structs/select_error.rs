//! 选择器错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectError {
    /// 截断后的修改时间不是 Unix 秒
    #[error("条目 {name} 的修改时间无法识别: {raw:?}")]
    InvalidModifiedTime { name: String, raw: String },

    #[error("扫描路径 {path:?} 没有第二段，无法确定目录键")]
    MissingFolderKey { path: String },

    #[error("远程路径 {remote_path} 会跳出本地根目录")]
    UnsafeLocalPath { remote_path: String },
}
