use axum::{
  extract::{Query, State},
  Json,
};

use crate::{
  market::{model::AssetSnapshot, service::MarketService},
  models::ProxyBody,
};

/// Always answers 200; failures surface only as `"source": "fallback"`.
pub async fn get_market_prices(
  State(service): State<MarketService>,
  Query(query): Query<Vec<(String, String)>>,
) -> Json<ProxyBody<AssetSnapshot>> {
  Json(service.get_market_prices(&query).await)
}
