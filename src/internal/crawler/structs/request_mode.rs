/// `request` 的工作方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// 只收集目录，不递归、不拉取
    Directories,
    /// 选文件；`count` 为 0 表示不限，`download` 为真时把选中结果拉到本地
    Files { count: usize, download: bool },
}

impl RequestMode {
    pub fn files(count: usize, download: bool) -> Self {
        RequestMode::Files { count, download }
    }
}
