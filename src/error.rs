use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("Config error: {0}")]
  ConfigError(String),

  #[error("Internal server error: {0}")]
  InternalError(String),
}

/// Ways a single data hub call can fail. All of them end in a fallback payload.
#[derive(Error, Debug)]
pub enum UpstreamError {
  #[error("Data hub unreachable: {0}")]
  Transport(#[source] reqwest::Error),

  #[error("Data hub responded with status: {0}")]
  Status(u16),

  #[error("Data hub returned invalid JSON: {0}")]
  Parse(#[source] serde_json::Error),
}

impl From<reqwest::Error> for UpstreamError {
  fn from(err: reqwest::Error) -> Self {
      Self::Transport(err)
  }
}

impl From<serde_json::Error> for UpstreamError {
  fn from(err: serde_json::Error) -> Self {
      Self::Parse(err)
  }
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
      Self::InternalError(format!("HTTP client error: {}", err))
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
      let (status, error_message) = match self {
          AppError::ConfigError(_) => (
              StatusCode::INTERNAL_SERVER_ERROR,
              "A configuration error occurred".to_string(),
          ),
          AppError::InternalError(err) => (
              StatusCode::INTERNAL_SERVER_ERROR,
              format!("An internal server error occurred: {}", err),
          ),
      };

      let body = Json(json!({
          "status": "error",
          "message": error_message,
      }));

      (status, body).into_response()
  }
}
