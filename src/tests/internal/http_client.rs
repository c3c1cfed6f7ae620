//! HTTP 客户端测试：用 wiremock 模拟列表接口与文件下载，校验 Basic Auth、解析、落盘。

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::IesoClient;
use crate::config::MirrorConfig;
use crate::fetcher::{BlobFetcher, FetchError};
use crate::listing::enums::EntryKind;
use crate::listing::structs::ListingError;
use crate::listing::traits::DirectoryProvider;
use crate::{build_crawler, mirror_remote_tree};
use crate::tests::fresh;

/// base64("user:pass")
const BASIC_AUTH: &str = "Basic dXNlcjpwYXNz";

fn config_for(server: &MockServer, local_base: &std::path::Path) -> MirrorConfig {
    MirrorConfig::from_vars([
        ("IESO_BASE_URI", server.uri()),
        ("IESO_AUTH_USER", "user".to_string()),
        ("IESO_AUTH_PASSWORD", "pass".to_string()),
        ("IESO_ENBRIDGE_PATH", local_base.display().to_string()),
    ])
    .unwrap()
}

fn client_for(server: &MockServer) -> IesoClient {
    let tmp = std::env::temp_dir();
    IesoClient::from_config(&config_for(server, &tmp)).unwrap()
}

#[tokio::test]
async fn listing_is_decoded_with_basic_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TIDAL/X/"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [
                { "fileName": "Y", "isDirectory": true, "isRegularFile": false, "lastModifiedTime": "1718000000123" },
                { "fileName": "report.csv", "isDirectory": false, "isRegularFile": true, "lastModifiedTime": 1718000000456u64 },
                { "fileName": "pipe", "isDirectory": false, "isRegularFile": false, "lastModifiedTime": "1718000000" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client_for(&server).list("TIDAL/X/").await.unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].name, "Y");
    assert_eq!(entries[0].kind, EntryKind::Directory);
    assert_eq!(entries[0].modified, "1718000000");
    assert_eq!(entries[1].kind, EntryKind::RegularFile);
    assert_eq!(entries[1].modified, "1718000000");
    assert_eq!(entries[2].kind, EntryKind::Other);
}

#[tokio::test]
async fn listing_without_files_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TIDAL/X/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).list("TIDAL/X/").await.unwrap_err();

    assert!(matches!(err, ListingError::Decode(_)));
}

#[tokio::test]
async fn listing_http_error_keeps_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TIDAL/X/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("denied"))
        .mount(&server)
        .await;

    let err = client_for(&server).list("TIDAL/X/").await.unwrap_err();

    match err {
        ListingError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "denied");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_streams_body_to_sink() {
    let server = MockServer::start().await;
    let tmp = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/TIDAL/X/report.csv"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_string("a,b\n1,2\n"))
        .mount(&server)
        .await;

    let sink = tmp.path().join("X/report.csv");
    let written = client_for(&server)
        .fetch("TIDAL/X/report.csv", &sink)
        .await
        .unwrap();

    assert_eq!(written, 8);
    assert_eq!(std::fs::read_to_string(&sink).unwrap(), "a,b\n1,2\n");
}

#[tokio::test]
async fn fetch_rejects_error_status_without_creating_file() {
    let server = MockServer::start().await;
    let tmp = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/TIDAL/X/gone.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let sink = tmp.path().join("gone.csv");
    let err = client_for(&server)
        .fetch("TIDAL/X/gone.csv", &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { .. }));
    assert!(!sink.exists());
}

#[tokio::test]
async fn paths_outside_base_are_refused() {
    let server = MockServer::start().await;

    let err = client_for(&server)
        .list("http://evil.example/TIDAL/")
        .await
        .unwrap_err();

    assert!(matches!(err, ListingError::Auth(_)));
}

#[tokio::test]
async fn mirror_remote_tree_end_to_end() {
    let server = MockServer::start().await;
    let tmp = tempfile::tempdir().unwrap();
    let now = fresh();

    Mock::given(method("GET"))
        .and(path("/TIDAL/X/"))
        .and(header("authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [
                { "fileName": "Y", "isDirectory": true, "isRegularFile": false, "lastModifiedTime": now },
                { "fileName": "report.csv", "isDirectory": false, "isRegularFile": true, "lastModifiedTime": now },
                { "fileName": "report_v2.csv", "isDirectory": false, "isRegularFile": true, "lastModifiedTime": now }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/TIDAL/X/Y/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "files": [] })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/TIDAL/X/report.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("current"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/TIDAL/X/report_v2.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("old"))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server, tmp.path());
    let report = mirror_remote_tree(&config, "TIDAL/X/").await.unwrap();

    assert!(tmp.path().join("Y").is_dir());
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("X/report.csv")).unwrap(),
        "current"
    );
    assert!(!tmp.path().join("X/report_v2.csv").exists());
    assert_eq!(report.fetched, vec![tmp.path().join("X/report.csv")]);
    assert_eq!(report.versioned_ignored, 1);
}

#[tokio::test]
async fn build_crawler_uses_config() {
    let server = MockServer::start().await;
    let tmp = tempfile::tempdir().unwrap();
    let config = config_for(&server, tmp.path());

    let crawler = build_crawler(&config).unwrap();

    assert_eq!(crawler.local_base(), tmp.path());
    assert_eq!(crawler.provider(), crawler.fetcher());
    assert_eq!(crawler.provider().auth.base_url.as_str(), format!("{}/", server.uri()));
}
