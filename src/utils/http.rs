use crate::error::{AppError, AppResult};
use crate::proxy::config::UpstreamProxyConfig;
use reqwest::{Client, Proxy};
use std::time::Duration;

const USER_AGENT: &str = concat!("portainer-control/", env!("CARGO_PKG_VERSION"));

/// Create an HTTP client with the given timeout and outbound proxy.
/// `timeout_secs = None` leaves reqwest's default (no overall timeout).
pub fn create_client_with_proxy(
    timeout_secs: Option<u64>,
    proxy_config: Option<&UpstreamProxyConfig>,
) -> AppResult<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);

    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(config) = proxy_config {
        if config.enabled && !config.url.is_empty() {
            // Never fall back to a direct connection when a proxy was asked for
            let proxy = Proxy::all(&config.url).map_err(|e| {
                AppError::Config(format!("UPSTREAM_PROXY_URL is invalid: {}", e))
            })?;
            builder = builder.proxy(proxy);
            tracing::info!("HTTP client upstream proxy enabled: {}", config.url);
        }
    }

    Ok(builder.build()?)
}
