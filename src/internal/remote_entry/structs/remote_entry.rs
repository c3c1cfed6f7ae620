use crate::internal::listing::enums::EntryKind;
use crate::internal::remote_entry::modified_time::truncate_modified_time;

/// 列表接口返回的一个条目，每次列表请求都会重新构造，不做持久化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,     // 不带路径的名字
    pub kind: EntryKind,  // 目录 / 普通文件 / 其他
    pub modified: String, // 原始修改时间截断到前 10 个字符后的值，尚未校验
}

impl RemoteEntry {
    /// 构造条目；`raw_modified` 在这里就被截断。
    pub fn new(name: impl Into<String>, kind: EntryKind, raw_modified: &str) -> Self {
        Self {
            name: name.into(),
            kind,
            modified: truncate_modified_time(raw_modified),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_regular_file(&self) -> bool {
        self.kind == EntryKind::RegularFile
    }
}
