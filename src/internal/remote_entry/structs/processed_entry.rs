use std::path::PathBuf;

use crate::internal::listing::enums::EntryKind;

/// 经过选择器处理后的条目。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedEntry {
    pub name: String,
    pub kind: EntryKind,
    /// 修改时间（Unix 秒），由截断后的原始值解析而来
    pub modified: i64,
    /// `modified` 的 RFC 2822 文本（UTC）
    pub rfc_date: String,
    /// 修改时间是否落在最近的过期窗口内
    pub update_required: bool,
    /// 只有文件选择器产出的条目才有
    pub target: Option<FileTarget>,
}

/// 文件条目的远程位置和本地落地位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    /// 扫描路径的第二段，不管文件实际嵌套多深
    pub folder: String,
    /// `<本地根目录>/<folder>`
    pub storage: PathBuf,
    /// 完整远程路径
    pub remote_path: String,
    /// 去掉开头 `TIDAL/` 后的远程路径
    pub local_relative_path: String,
    /// `<本地根目录>/<local_relative_path>`，拉取时写到这里
    pub sink: PathBuf,
}
