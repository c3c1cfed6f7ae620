//! 镜像配置：一组固定的、有类型的字段，由 env（或 .env 文件）填充。

use core::fmt;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;

use crate::internal::logging::date_format::normalize_datetime_format;
use crate::internal::logging::line_template::DEFAULT_LINE_TEMPLATE;

use super::config_error::ConfigError;

/// 配置所需的环境变量名。
pub mod env_var_names {
    /// 列表接口的基础地址
    pub const BASE_URI: &str = "IESO_BASE_URI";
    /// Basic Auth 用户名
    pub const AUTH_USER: &str = "IESO_AUTH_USER";
    /// Basic Auth 密码
    pub const AUTH_PASSWORD: &str = "IESO_AUTH_PASSWORD";
    /// 本地镜像根目录
    pub const LOCAL_BASE: &str = "IESO_ENBRIDGE_PATH";
    /// 日志时间格式（strftime，或旧配置的 PHP `date()` 写法）
    pub const LOG_FORMAT: &str = "IESO_LOG_FORMAT";
    /// 日志行模板，如 `[%datetime%] %level_name% : %message%`
    pub const LOG_OUTPUT: &str = "IESO_LOG_OUTPUT";
    /// 过期窗口（小时）
    pub const RETENTION_HOURS: &str = "IESO_RETENTION_HOURS";
}

/// 默认日志时间格式
pub const DEFAULT_LOG_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 默认过期窗口：一天
pub const DEFAULT_RETENTION_HOURS: i64 = 24;

#[derive(Clone, PartialEq)]
pub struct MirrorConfig {
    pub base_uri: String,
    pub username: String,
    pub password: String,
    /// 本地镜像根目录，所有目录和文件都建在它下面
    pub local_base: PathBuf,
    /// 已统一成 strftime 的日志时间格式
    pub log_datetime_format: String,
    /// 日志行模板
    pub log_output: String,
    /// 修改时间落在 `now - retention` 之后的文件视为需要更新
    pub retention: TimeDelta,
}

impl MirrorConfig {
    /// 从键值对中解析配置，不读取进程环境。
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut take_required = |key: &'static str| {
            vars.remove(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let base_uri = take_required(env_var_names::BASE_URI)?;
        let username = take_required(env_var_names::AUTH_USER)?;
        let password = take_required(env_var_names::AUTH_PASSWORD)?;
        let local_base = PathBuf::from(take_required(env_var_names::LOCAL_BASE)?);

        let log_datetime_format = match vars
            .remove(env_var_names::LOG_FORMAT)
            .filter(|v| !v.is_empty())
        {
            Some(value) => normalize_datetime_format(&value).ok_or(ConfigError::Invalid {
                key: env_var_names::LOG_FORMAT,
                value,
            })?,
            None => DEFAULT_LOG_DATETIME_FORMAT.to_string(),
        };

        let log_output = vars
            .remove(env_var_names::LOG_OUTPUT)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LINE_TEMPLATE.to_string());

        let retention = match vars.remove(env_var_names::RETENTION_HOURS) {
            Some(value) => parse_retention_hours(&value)?,
            None => TimeDelta::hours(DEFAULT_RETENTION_HOURS),
        };

        Ok(Self {
            base_uri,
            username,
            password,
            local_base,
            log_datetime_format,
            log_output,
            retention,
        })
    }

    /// 读取进程环境；当前目录存在 .env 时先加载它（不覆盖已有变量）。
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::EnvFile(e)),
        }
        Self::from_vars(std::env::vars())
    }

    /// 只读取指定的 env 文件，不修改进程环境。
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let vars = dotenvy::from_filename_iter(path.as_ref())?
            .collect::<Result<Vec<(String, String)>, _>>()?;
        Self::from_vars(vars)
    }
}

fn parse_retention_hours(value: &str) -> Result<TimeDelta, ConfigError> {
    let invalid = || ConfigError::Invalid {
        key: env_var_names::RETENTION_HOURS,
        value: value.to_string(),
    };

    let hours: i64 = value.trim().parse().map_err(|_| invalid())?;
    if hours <= 0 {
        return Err(invalid());
    }
    TimeDelta::try_hours(hours).ok_or_else(invalid)
}

/// 防止debug泄漏密码
impl fmt::Debug for MirrorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MirrorConfig")
            .field("base_uri", &self.base_uri)
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .field("local_base", &self.local_base)
            .field("log_datetime_format", &self.log_datetime_format)
            .field("log_output", &self.log_output)
            .field("retention", &self.retention)
            .finish()
    }
}
