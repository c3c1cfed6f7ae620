//! 文件日志测试：日志文件按名字和日期生成，内容为 `[时间] 级别 : 消息`。

use chrono::{Local, NaiveDate};

use crate::config::MirrorConfig;
use crate::logging::{
    DEFAULT_LOG_NAME, LoggerError, build_file_subscriber, init_file_logger, log_file_path,
};

fn config_in(dir: &std::path::Path) -> MirrorConfig {
    MirrorConfig::from_vars([
        ("IESO_BASE_URI", "http://localhost/".to_string()),
        ("IESO_AUTH_USER", "user".to_string()),
        ("IESO_AUTH_PASSWORD", "pass".to_string()),
        ("IESO_ENBRIDGE_PATH", dir.display().to_string()),
    ])
    .unwrap()
}

#[test]
fn log_file_name_contains_date() {
    let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let path = log_file_path(std::path::Path::new("/srv/mirror"), "ieso", day);

    assert_eq!(path, std::path::PathBuf::from("/srv/mirror/ieso_2024-06-10.log"));
}

#[test]
fn local_log_file_is_created() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let (_subscriber, path) = build_file_subscriber(&config, "ieso_test").unwrap();

    let expected = tmp.path().join(format!(
        "ieso_test_{}.log",
        Local::now().date_naive().format("%Y-%m-%d")
    ));
    assert_eq!(path, expected);
    assert!(path.exists());
}

#[test]
fn local_file_content() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let (subscriber, path) = build_file_subscriber(&config, "ieso_test").unwrap();
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("missing you today!");
    });

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("INFO : missing you today!"), "{content}");
    assert!(content.starts_with('['));
}

#[test]
fn custom_template_and_php_date_format() {
    let tmp = tempfile::tempdir().unwrap();
    let config = MirrorConfig::from_vars([
        ("IESO_BASE_URI", "http://localhost/".to_string()),
        ("IESO_AUTH_USER", "user".to_string()),
        ("IESO_AUTH_PASSWORD", "pass".to_string()),
        ("IESO_ENBRIDGE_PATH", tmp.path().display().to_string()),
        ("IESO_LOG_FORMAT", "Y".to_string()),
        ("IESO_LOG_OUTPUT", "<%datetime%> %channel%.%level_name%: %message%".to_string()),
    ])
    .unwrap();

    let (subscriber, path) = build_file_subscriber(&config, "ieso_template").unwrap();
    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("custom line");
    });

    let content = std::fs::read_to_string(&path).unwrap();
    let year = Local::now().format("%Y").to_string();
    assert_eq!(content, format!("<{year}> IESO.WARN: custom line\n"));
}

/// 进程内唯一安装全局日志的测试
#[test]
fn global_logger_installs_once() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let path = init_file_logger(&config, DEFAULT_LOG_NAME).unwrap();
    assert_eq!(
        path,
        log_file_path(tmp.path(), "ieso", Local::now().date_naive())
    );

    let err = init_file_logger(&config, DEFAULT_LOG_NAME).unwrap_err();
    assert!(matches!(err, LoggerError::AlreadyInstalled(_)));
}
