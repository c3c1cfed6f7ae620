use std::path::Path;

use async_trait::async_trait;

use crate::internal::auth::structs::auth_error::AuthError;
use crate::internal::auth::structs::ieso_auth::IesoAuth;
use crate::internal::config::structs::mirror_config::MirrorConfig;
use crate::internal::fetcher::single_fetch::run_single_fetch;
use crate::internal::fetcher::structs::fetch_error::FetchError;
use crate::internal::fetcher::traits::blob_fetcher::BlobFetcher;
use crate::internal::listing::functions::get_listing_raw_data::get_listing_raw_data;
use crate::internal::listing::raw_json::impl_raw_listing::ToRemoteEntries;
use crate::internal::listing::structs::listing_error::ListingError;
use crate::internal::listing::traits::directory_provider::DirectoryProvider;
use crate::internal::remote_entry::structs::remote_entry::RemoteEntry;

/// 基于 HTTP 的目录提供者和文件拉取器，每个请求都带 Basic Auth。
#[derive(Debug, Clone, PartialEq)]
pub struct IesoClient {
    pub auth: IesoAuth,
}

impl IesoClient {
    pub fn new(auth: IesoAuth) -> Self {
        Self { auth }
    }

    pub fn from_config(config: &MirrorConfig) -> Result<Self, AuthError> {
        let auth = IesoAuth::new(&config.username, &config.password, &config.base_uri)?;
        Ok(Self::new(auth))
    }
}

#[async_trait]
impl DirectoryProvider for IesoClient {
    async fn list(&self, path: &str) -> Result<Vec<RemoteEntry>, ListingError> {
        let url = self.auth.resolve(path)?;
        let raw_listing = get_listing_raw_data(&self.auth, &url).await?;
        Ok(raw_listing.to_remote_entries())
    }
}

#[async_trait]
impl BlobFetcher for IesoClient {
    async fn fetch(&self, remote_path: &str, sink: &Path) -> Result<u64, FetchError> {
        let url = self.auth.resolve(remote_path)?;
        run_single_fetch(&self.auth.client, url, sink).await
    }
}
