use axum::{routing::any, Router};

use crate::market::{handler, service::MarketService};

pub fn market_routes(service: MarketService) -> Router {
  Router::new()
      .route("/market-prices", any(handler::get_market_prices))
      .with_state(service)
}
