use chrono::Utc;
use tracing::error;

use crate::{
    datahub::{DataHubClient, UpstreamOutcome},
    models::ProxyBody,
    staking::model::{fallback_staking_data, StakingSnapshot},
};

pub const STAKING_DATA_PATH: &str = "/api/data/staking-data";

#[derive(Clone)]
pub struct StakingService {
    client: DataHubClient,
}

impl StakingService {
    pub fn new(client: DataHubClient) -> Self {
        Self { client }
    }

    pub async fn get_staking_data(&self, query: &[(String, String)]) -> ProxyBody<StakingSnapshot> {
        match self.client.fetch(STAKING_DATA_PATH, query).await {
            UpstreamOutcome::Success(data) => ProxyBody::Upstream(data),
            UpstreamOutcome::Failure(err) => {
                error!(
                    error = %err,
                    url = %self.client.endpoint(STAKING_DATA_PATH),
                    "Error fetching staking data"
                );
                ProxyBody::Fallback(fallback_staking_data(Utc::now()))
            }
        }
    }
}
