use std::path::PathBuf;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::AppConfig;
use crate::proxy::config::{
    Credentials, ProxyConfig, UpstreamProxyConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR,
};

/// Load application config from `.env` and the process environment
pub fn load_app_config() -> AppResult<AppConfig> {
    // A missing .env file is fine, the variables may come from the environment
    dotenv::dotenv().ok();
    AppConfig::from_lookup(|key| std::env::var(key).ok())
}

impl AppConfig {
    /// Build the config from a variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &str| {
            get(key).ok_or_else(|| AppError::Config(format!("{} must be set", key)))
        };

        let raw_url = require("PORTAINER_URL")?;
        let base_url = Url::parse(&raw_url)
            .map_err(|e| AppError::Config(format!("PORTAINER_URL is invalid: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "PORTAINER_URL cannot be used as a base URL: {}",
                raw_url
            )));
        }

        let credentials = Credentials {
            base_url,
            username: require("PORTAINER_USERNAME")?,
            password: require("PORTAINER_PASSWORD")?,
            endpoint_id: require("ENDPOINT_ID")?,
        };

        let port = match get("PORT") {
            Some(p) => p
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT is not a valid port: {}", p)))?,
            None => DEFAULT_PORT,
        };

        let request_timeout = match get("REQUEST_TIMEOUT") {
            Some(t) => Some(t.parse::<u64>().map_err(|_| {
                AppError::Config(format!("REQUEST_TIMEOUT must be whole seconds: {}", t))
            })?),
            None => None,
        };

        let upstream_proxy = match get("UPSTREAM_PROXY_URL") {
            Some(url) => UpstreamProxyConfig { enabled: true, url },
            None => UpstreamProxyConfig::default(),
        };

        let proxy = ProxyConfig {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: PathBuf::from(
                get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            request_timeout,
            upstream_proxy,
            credentials,
        };

        Ok(AppConfig {
            proxy,
            log_dir: get("LOG_DIR").map(PathBuf::from),
        })
    }
}
