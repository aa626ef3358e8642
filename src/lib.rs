pub mod api;
pub mod config;
pub mod datahub;
pub mod error;
pub mod market;
pub mod models;
pub mod staking;

// Re-export common modules
pub use api::router;
pub use config::Config;
pub use datahub::DataHubClient;
pub use error::{AppError, UpstreamError};
