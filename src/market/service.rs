use chrono::Utc;
use tracing::error;

use crate::{
    datahub::{DataHubClient, UpstreamOutcome},
    market::model::{fallback_market_prices, AssetSnapshot},
    models::ProxyBody,
};

pub const MARKET_PRICES_PATH: &str = "/api/data/market-prices";

#[derive(Clone)]
pub struct MarketService {
    client: DataHubClient,
}

impl MarketService {
    pub fn new(client: DataHubClient) -> Self {
        Self { client }
    }

    /// Data hub body on success, the static fallback on any failure.
    pub async fn get_market_prices(&self, query: &[(String, String)]) -> ProxyBody<AssetSnapshot> {
        match self.client.fetch(MARKET_PRICES_PATH, query).await {
            UpstreamOutcome::Success(data) => ProxyBody::Upstream(data),
            UpstreamOutcome::Failure(err) => {
                error!(
                    error = %err,
                    url = %self.client.endpoint(MARKET_PRICES_PATH),
                    "Error fetching market prices"
                );
                ProxyBody::Fallback(fallback_market_prices(Utc::now()))
            }
        }
    }
}
