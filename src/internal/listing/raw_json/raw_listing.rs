use serde::{Deserialize, Serialize};

/// 对应列表接口返回的顶层 JSON 对象
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawListing {
    /// `files` 数组，每一项是当前目录的一个直接子项
    pub files: Vec<RawEntry>,
}

/// 对应 `files` 数组中的单个条目
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    /// 不带路径的文件名或目录名
    pub file_name: String,
    #[serde(default)]
    pub is_directory: bool,
    #[serde(default)]
    pub is_regular_file: bool,
    /// 最后修改时间，服务端有时给字符串有时给数字
    pub last_modified_time: RawModifiedTime,
}

/// `lastModifiedTime` 的原始值
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawModifiedTime {
    Text(String),
    Number(serde_json::Number),
}

impl RawModifiedTime {
    /// 原始值的文本形式，数字按 JSON 的写法输出
    pub fn as_raw(&self) -> String {
        match self {
            RawModifiedTime::Text(s) => s.clone(),
            RawModifiedTime::Number(n) => n.to_string(),
        }
    }
}
