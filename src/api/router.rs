use axum::{
  routing::get,
  http::StatusCode,
  Json, Router,
};
use http::{header, HeaderValue};
use serde_json::json;
use tower_http::{
  set_header::SetResponseHeaderLayer,
  trace::TraceLayer,
};

use crate::{
  config::Config,
  datahub::DataHubClient,
  error::AppError,
  market::{routes::market_routes, service::MarketService},
  staking::{routes::staking_routes, service::StakingService},
};

pub async fn create_router(config: Config) -> Result<Router, AppError> {
  // Setup data hub client
  let client = DataHubClient::new(&config.data_hub_url)?;

  // Setup services
  let market_service = MarketService::new(client.clone());
  let staking_service = StakingService::new(client);

  // Static CORS headers, stamped on success and fallback alike
  let data_routes = market_routes(market_service)
      .merge(staking_routes(staking_service))
      .layer(SetResponseHeaderLayer::overriding(
          header::ACCESS_CONTROL_ALLOW_ORIGIN,
          HeaderValue::from_static("*"),
      ))
      .layer(SetResponseHeaderLayer::overriding(
          header::ACCESS_CONTROL_ALLOW_METHODS,
          HeaderValue::from_static("GET"),
      ))
      .layer(SetResponseHeaderLayer::overriding(
          header::ACCESS_CONTROL_ALLOW_HEADERS,
          HeaderValue::from_static("Content-Type"),
      ));

  // Build the router
  let app = Router::new()
      .route("/health", get(health_check))
      .nest("/api/data", data_routes)
      .layer(TraceLayer::new_for_http());

  Ok(app)
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
  (
      StatusCode::OK,
      Json(json!({
          "status": "success",
          "message": "Server is running"
      })),
  )
}
