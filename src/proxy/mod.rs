// proxy module - Portainer container control facade

pub mod authenticated;
pub mod config;
pub mod server;

pub mod handlers; // API endpoint handlers
pub mod middleware; // Axum middleware
pub mod upstream; // Upstream client

pub use authenticated::AuthenticatedProxy;
pub use config::ProxyConfig;
pub use server::AxumServer;
