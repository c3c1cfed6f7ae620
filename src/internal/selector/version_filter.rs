//! 历史版本过滤：`<base>_v<1~2 位数字>.<小写扩展名>` 形式的文件是旧版本，永远不镜像。

use once_cell::sync::Lazy;
use regex::Regex;

/// 旧版本文件名，如 `report_v3.csv`、`data_v12.txt`
static VERSIONED_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)_v[0-9]{1,2}\.[a-z]*$").unwrap());

/// 文件名是否带版本后缀。
pub fn is_versioned(file_name: &str) -> bool {
    VERSIONED_SUFFIX_RE.is_match(file_name)
}
