pub mod config;
pub mod container;

pub use config::AppConfig;
pub use container::{ActionAck, ContainerAction, ContainerSummary};
