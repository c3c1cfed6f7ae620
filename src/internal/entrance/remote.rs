use crate::internal::auth::structs::auth_error::AuthError;
use crate::internal::client::ieso_client::IesoClient;
use crate::internal::config::structs::mirror_config::MirrorConfig;
use crate::internal::crawler::structs::{CrawlError, Crawler, MirrorReport};

/// 用配置构建一个 HTTP 爬虫，列表和拉取共用同一个客户端。
pub fn build_crawler(
    config: &MirrorConfig,
) -> Result<Crawler<IesoClient, IesoClient>, AuthError> {
    let client = IesoClient::from_config(config)?;
    let crawler = Crawler::new(client.clone(), client, config.local_base.clone())
        .with_retention(config.retention);
    Ok(crawler)
}

/// 把 `path` 下的整棵远程目录树镜像到本地根目录。
///
/// - 注意：path 是基于 base_uri 的相对路径，以 `/` 结尾，如 `TIDAL/Acme/`
///
/// example:
/// ```
/// use ieso_mirror::config::MirrorConfig;
/// use ieso_mirror::mirror_remote_tree;
///
/// let config = MirrorConfig::from_env()?;
/// let report = mirror_remote_tree(&config, "TIDAL/Acme/").await?;
/// println!("fetched {} files", report.fetched.len());
/// ```
pub async fn mirror_remote_tree(
    config: &MirrorConfig,
    path: &str,
) -> Result<MirrorReport, CrawlError> {
    let crawler = build_crawler(config)?;
    crawler.recurse(path).await
}
