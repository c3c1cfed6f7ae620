//! 文件日志：写到 `<本地根目录>/<name>_<YYYY-MM-DD>.log`。

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::internal::config::structs::mirror_config::MirrorConfig;

use super::line_format::LineFormat;
use super::line_template::LineTemplate;

/// 默认日志名
pub const DEFAULT_LOG_NAME: &str = "ieso";

/// 未设置 RUST_LOG 时的级别
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("打开日志文件 {path} 失败: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("全局日志已被设置: {0}")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// 某一天的日志文件路径。
pub fn log_file_path(local_base: &Path, name: &str, day: NaiveDate) -> PathBuf {
    local_base.join(format!("{}_{}.log", name, day.format("%Y-%m-%d")))
}

/// 构建写入当天日志文件的 subscriber，不安装；返回 subscriber 和文件路径。
pub fn build_file_subscriber(
    config: &MirrorConfig,
    name: &str,
) -> Result<(impl Subscriber + Send + Sync + 'static, PathBuf), LoggerError> {
    let path = log_file_path(&config.local_base, name, Local::now().date_naive());

    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggerError::OpenFile {
            path: path.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .event_format(LineFormat::new(
            config.log_datetime_format.clone(),
            LineTemplate::parse(&config.log_output),
        ))
        .finish();

    Ok((subscriber, path))
}

/// 安装全局文件日志，返回日志文件路径。进程内只能成功一次。
pub fn init_file_logger(config: &MirrorConfig, name: &str) -> Result<PathBuf, LoggerError> {
    let (subscriber, path) = build_file_subscriber(config, name)?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(path)
}
