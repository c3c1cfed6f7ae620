//! 条目选择器：版本过滤、过期判断、本地路径推导。
//!
//! 选择器只关心单个列表的条目，不知道目录树的形状；递归由 [`crate::crawler`] 负责。

pub mod directory_selector;
pub mod file_selector;
pub mod paths;
pub mod structs;
pub mod version_filter;
