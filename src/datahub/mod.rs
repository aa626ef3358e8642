pub mod client;

pub use client::{DataHubClient, UpstreamOutcome};
