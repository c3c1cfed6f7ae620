//! 远程列表接口：原始 JSON 结构、请求函数与目录提供者 trait。

pub mod enums;
pub mod functions;
pub mod raw_json;
pub mod structs;
pub mod traits;
