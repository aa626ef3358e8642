use axum::{routing::any, Router};

use crate::staking::{handler, service::StakingService};

pub fn staking_routes(service: StakingService) -> Router {
  Router::new()
      .route("/staking-data", any(handler::get_staking_data))
      .with_state(service)
}
