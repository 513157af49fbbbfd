pub mod client;

pub use client::UpstreamClient;
