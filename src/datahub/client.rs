use serde_json::Value;

use crate::error::{AppError, UpstreamError};

/// Result of one data hub call.
#[derive(Debug)]
pub enum UpstreamOutcome {
  Success(Value),
  Failure(UpstreamError),
}

#[derive(Clone, Debug)]
pub struct DataHubClient {
  http: reqwest::Client,
  base_url: String,
}

impl DataHubClient {
  pub fn new(base_url: &str) -> Result<Self, AppError> {
      // No explicit timeout; the client's defaults apply
      let http = reqwest::Client::builder().build()?;

      Ok(Self {
          http,
          base_url: base_url.trim_end_matches('/').to_string(),
      })
  }

  pub fn base_url(&self) -> &str {
      &self.base_url
  }

  pub fn endpoint(&self, path: &str) -> String {
      format!("{}{}", self.base_url, path)
  }

  /// Single GET against the data hub, forwarding `query` in the order received.
  pub async fn fetch(&self, path: &str, query: &[(String, String)]) -> UpstreamOutcome {
      match self.try_fetch(path, query).await {
          Ok(value) => UpstreamOutcome::Success(value),
          Err(err) => UpstreamOutcome::Failure(err),
      }
  }

  async fn try_fetch(&self, path: &str, query: &[(String, String)]) -> Result<Value, UpstreamError> {
      let response = self
          .http
          .get(self.endpoint(path))
          .query(query)
          .send()
          .await?;

      let status = response.status();
      if !status.is_success() {
          return Err(UpstreamError::Status(status.as_u16()));
      }

      let body = response.bytes().await?;
      let value = serde_json::from_slice(&body)?;
      Ok(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn endpoint_joins_base_and_path() {
      let client = DataHubClient::new("http://localhost:5000/").expect("client");
      assert_eq!(client.base_url(), "http://localhost:5000");
      assert_eq!(
          client.endpoint("/api/data/market-prices"),
          "http://localhost:5000/api/data/market-prices"
      );
  }

  #[tokio::test]
  async fn unreachable_hub_is_a_transport_failure() {
      let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
      let addr = listener.local_addr().expect("local addr");
      drop(listener);

      let client = DataHubClient::new(&format!("http://{addr}")).expect("client");
      match client.fetch("/api/data/market-prices", &[]).await {
          UpstreamOutcome::Failure(UpstreamError::Transport(_)) => {}
          other => panic!("expected transport failure, got {other:?}"),
      }
  }
}
