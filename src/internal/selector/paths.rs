//! 远程路径与本地镜像路径的推导。

use std::path::{Component, Path, PathBuf};

/// 远程路径固定的首段，本地镜像里不保留
pub const REMOTE_ROOT_PREFIX: &str = "TIDAL/";

/// 只去掉开头的一个 `TIDAL/`，其余不动。
pub fn strip_remote_root(remote_path: &str) -> &str {
    remote_path
        .strip_prefix(REMOTE_ROOT_PREFIX)
        .unwrap_or(remote_path)
}

/// 扫描路径的第二段，作为文件归档的目录键；该段不存在或为空时返回 `None`。
///
/// `TIDAL/Acme/2024/` 的目录键是 `Acme`。
pub fn folder_key(scan_path: &str) -> Option<&str> {
    scan_path.split('/').nth(1).filter(|s| !s.is_empty())
}

/// 目录路径拼上名字。
///
/// 只在 `dir` 不以 `/` 结尾时补一个分隔符：`TIDAL/X/` + `a.csv` 得到 `TIDAL/X/a.csv`，
/// 而不是直接拼 `dir + "/" + name` 得到的 `TIDAL/X//a.csv`。
pub fn join_remote(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// 子目录的远程路径，以 `/` 结尾。
pub fn child_directory(dir: &str, name: &str) -> String {
    let mut child = join_remote(dir, name);
    child.push('/');
    child
}

/// 本地根目录下的落地路径；含 `..` 等会跳出根目录的成分时返回 `None`。
pub fn local_sink(local_base: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative.trim_start_matches('/'));
    let mut sink = local_base.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => sink.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(sink)
}
