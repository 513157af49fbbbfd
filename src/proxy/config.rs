use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Proxy service configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Listen host
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Front-end asset directory served under `/`
    pub static_dir: PathBuf,

    /// Outbound request timeout (seconds); no timeout when unset
    pub request_timeout: Option<u64>,

    /// Outbound proxy for downstream calls
    pub upstream_proxy: UpstreamProxyConfig,

    /// Portainer credentials
    pub credentials: Credentials,
}

/// Upstream proxy configuration
#[derive(Debug, Clone, Default)]
pub struct UpstreamProxyConfig {
    /// Whether enabled
    pub enabled: bool,
    /// Proxy address (http://, https://, socks5://)
    pub url: String,
}

/// Portainer login and target endpoint
#[derive(Clone)]
pub struct Credentials {
    pub base_url: Url,
    pub username: String,
    pub password: String,
    pub endpoint_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"***")
            .field("endpoint_id", &self.endpoint_id)
            .finish()
    }
}

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

impl ProxyConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            base_url: Url::parse("https://portainer.local:9443").unwrap(),
            username: "admin".into(),
            password: "hunter2".into(),
            endpoint_id: "2".into(),
        };

        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
