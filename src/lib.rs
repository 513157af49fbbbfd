pub mod error;
pub mod models;
pub mod modules;
pub mod proxy; // Proxy service module
pub mod utils;

use std::sync::Arc;
use tracing::{info, warn};

use error::AppResult;
use models::AppConfig;
use proxy::upstream::UpstreamClient;
use proxy::{AuthenticatedProxy, AxumServer};

/// Build the Portainer proxy from configuration
pub fn build_proxy(config: &AppConfig) -> AppResult<AuthenticatedProxy> {
    let proxy_config = &config.proxy;
    let http_client = utils::http::create_client_with_proxy(
        proxy_config.request_timeout,
        Some(&proxy_config.upstream_proxy),
    )?;
    let upstream = UpstreamClient::new(http_client, proxy_config.credentials.base_url.clone());
    Ok(AuthenticatedProxy::new(
        upstream,
        proxy_config.credentials.clone(),
    ))
}

/// Load config, start the server and run until Ctrl-C
pub async fn run() -> AppResult<()> {
    let config = modules::load_app_config()?;

    // Keep the guard alive for the whole run so file logs get flushed
    let _log_guard = modules::init_logger(config.log_dir.as_deref());

    let credentials = &config.proxy.credentials;
    info!("Portainer URL: {}", credentials.base_url);
    info!("Portainer Username: {}", credentials.username);
    info!("Endpoint ID: {}", credentials.endpoint_id);

    if !config.proxy.static_dir.is_dir() {
        warn!(
            "Static directory {:?} does not exist, front-end requests will 404",
            config.proxy.static_dir
        );
    }

    let proxy = Arc::new(build_proxy(&config)?);
    let (server, handle) = AxumServer::start(&config.proxy, proxy).await?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    server.stop();
    if let Err(e) = handle.await {
        warn!("Server task ended abnormally: {}", e);
    }
    Ok(())
}
