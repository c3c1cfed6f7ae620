//! 单线程整文件拉取。

use std::path::Path;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use super::structs::fetch_error::FetchError;

/// 整文件 GET，响应体按块流式写入 `sink`；`sink` 的上级目录不存在时先创建。
pub(crate) async fn run_single_fetch(
    client: &Client,
    url: Url,
    sink: &Path,
) -> Result<u64, FetchError> {
    let resp = client.get(url.clone()).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    if let Some(parent) = sink.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(FetchError::CreateDir)?;
    }

    let mut file = File::create(sink).await.map_err(FetchError::CreateFile)?;
    let mut stream = resp.bytes_stream();
    let mut bytes_done: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        bytes_done += chunk.len() as u64;
        file.write_all(&chunk).await.map_err(FetchError::WriteFile)?;
    }

    file.flush().await.map_err(FetchError::WriteFile)?;

    Ok(bytes_done)
}
