use axum::{
  extract::{Query, State},
  Json,
};

use crate::{
  models::ProxyBody,
  staking::{model::StakingSnapshot, service::StakingService},
};

pub async fn get_staking_data(
  State(service): State<StakingService>,
  Query(query): Query<Vec<(String, String)>>,
) -> Json<ProxyBody<StakingSnapshot>> {
  Json(service.get_staking_data(&query).await)
}
