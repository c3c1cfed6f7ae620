use reqwest::header::{ACCEPT, HeaderValue};
use url::Url;

use crate::internal::auth::structs::ieso_auth::IesoAuth;
use crate::internal::listing::raw_json::raw_listing::RawListing;
use crate::internal::listing::structs::listing_error::ListingError;

/// 获取原始列表数据
pub async fn get_listing_raw_data(
    ieso_auth: &IesoAuth,
    absolute_url: &Url,
) -> Result<RawListing, ListingError> {
    let transport = |source: reqwest::Error| ListingError::Transport {
        url: absolute_url.to_string(),
        source,
    };

    let res = ieso_auth
        .client
        .get(absolute_url.clone())
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .send()
        .await
        .map_err(transport)?;

    let status = res.status();

    let body = res.text().await.map_err(transport)?;

    if !status.is_success() {
        return Err(ListingError::Status { status, body });
    }

    let listing: RawListing = serde_json::from_str(&body)?;

    Ok(listing)
}
