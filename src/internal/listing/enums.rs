/// 列表条目的类型，由接口返回的两个布尔标记映射而来。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// `isDirectory` 为真
    Directory,
    /// `isRegularFile` 为真
    RegularFile,
    /// 两个标记都不成立（链接、设备等），一律忽略
    Other,
}

impl EntryKind {
    /// 由原始标记计算条目类型；两个都为真时按目录处理。
    pub fn from_flags(is_directory: bool, is_regular_file: bool) -> Self {
        match (is_directory, is_regular_file) {
            (true, _) => EntryKind::Directory,
            (false, true) => EntryKind::RegularFile,
            (false, false) => EntryKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::RegularFile => "file",
            EntryKind::Other => "other",
        }
    }
}
