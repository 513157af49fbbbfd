use crate::proxy::ProxyConfig;
use std::path::PathBuf;

/// Application configuration, built once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub proxy: ProxyConfig,
    /// Directory for rolling log files; console only when unset
    pub log_dir: Option<PathBuf>,
}
