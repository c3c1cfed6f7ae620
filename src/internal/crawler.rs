//! 目录树爬虫：列出目录、递归子目录、把文件交给选择器和拉取器。

pub mod structs;
