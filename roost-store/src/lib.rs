pub mod app_config;
pub mod memory;
pub mod rest;

pub use app_config::Config;
pub use memory::{InMemoryStore, Seed};
pub use rest::RestClient;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status { status: u16, url: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Failed to read seed data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed seed data: {0}")]
    Seed(#[from] serde_json::Error),
}
