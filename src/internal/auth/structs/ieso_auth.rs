use core::fmt;
use std::sync::Arc;

use base64::Engine;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use sha2::{Digest, Sha256};
use url::Url;

use super::auth_error::AuthError;

/// 认证结构体
///
/// 该结构体定位
/// - 用于存储基础 Basic Auth 认证信息
/// - 列表请求和文件拉取共用同一个已带认证头的 http 客户端
///
/// 默认Eq时会匹配base_url和token，如果需要单独比较token，需使用eq_only_token方法
#[derive(Clone)]
pub struct IesoAuth {
    pub client: Client,     // 内部是Arc，不需要特殊处理
    pub base_url: Arc<Url>, // 爬虫的 future 需要跨 await 持有，所以用 Arc
    pub(crate) encrypted_token: Arc<String>, // 对外导出时，不允许直接访问，哪怕它是被加密的
}

impl IesoAuth {
    /// 创建新的认证结构体
    pub fn new(
        username: &str,
        password: &str,
        base_url: &str,
    ) -> Result<Self, AuthError> {
        let http_client = _InternalHttpClient::_create(username, password)?;

        let base_url = _format_base_url(base_url)?;

        Ok(Self {
            client: http_client.client,
            base_url: Arc::new(base_url),
            encrypted_token: Arc::new(http_client.encrypted_token),
        })
    }

    /// 仅比较token是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
    }

    /// 把远程路径拼到基础地址上，拼接结果不允许跑出基础地址。
    ///
    /// - 注意：path 是基于 base_url 的相对路径，所以不要以"/"开头
    pub fn resolve(&self, path: &str) -> Result<Url, AuthError> {
        let base_url = self.base_url.as_ref();
        let joined_url = base_url.join(path).map_err(|_| AuthError::InvalidPath {
            path: path.to_string(),
        })?;

        if joined_url.scheme() != base_url.scheme()
            || joined_url.host_str() != base_url.host_str()
            || joined_url.port_or_known_default() != base_url.port_or_known_default()
            || !joined_url.path().starts_with(base_url.path())
        {
            return Err(AuthError::OutsideBase {
                path: path.to_string(),
            });
        }

        Ok(joined_url)
    }
}

/// 用于比较认证结构体是否相等
impl PartialEq for IesoAuth {
    fn eq(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token && self.base_url == other.base_url
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for IesoAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IesoAuth")
            .field("client", &"<Client with hidden authorization>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

fn _format_base_url(url: &str) -> Result<Url, AuthError> {
    if url.is_empty() {
        return Err(AuthError::EmptyBaseUrl);
    }

    let mut base_url = Url::parse(url)?;

    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 内部临时使用的http客户端结构体，在初始化IesoAuth时使用
struct _InternalHttpClient {
    client: Client,
    encrypted_token: String,
}

impl _InternalHttpClient {
    fn _encrypt_str(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 创建http客户端，内部使用
    fn _create(username: &str, password: &str) -> Result<Self, AuthError> {
        let mut headers = HeaderMap::new();

        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"));

        let mut auth_value = HeaderValue::from_str(&format!("Basic {}", token))?;
        auth_value.set_sensitive(true);

        headers.insert(AUTHORIZATION, auth_value);

        let http_client = Client::builder().default_headers(headers).build()?;

        let encrypted_token = Self::_encrypt_str(&token);

        Ok(Self {
            client: http_client,
            encrypted_token,
        })
    }
}
