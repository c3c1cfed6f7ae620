//! 文件拉取：把远程文件流式写入本地路径。
//!
//! 对外使用入口为 [`crate::fetcher`]，HTTP 实现见 [`crate::client::IesoClient`]。

pub(crate) mod single_fetch;
pub mod structs;
pub mod traits;
