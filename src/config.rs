use std::env;

use crate::error::AppError;

pub const DEFAULT_DATA_HUB_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub app_env: AppEnv,
    pub data_hub_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Server config
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let app_env = parse_app_env(&env::var("APP_ENV").unwrap_or_else(|_| "development".into()));

        // Data hub config
        let data_hub_url = resolve_data_hub_url(env::var("DATA_HUB_URL").ok());

        Ok(Self {
            port,
            host,
            app_env,
            data_hub_url,
        })
    }

    /// Config pointing at the given data hub, with server defaults.
    pub fn new(data_hub_url: impl Into<String>) -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".into(),
            app_env: AppEnv::Test,
            data_hub_url: resolve_data_hub_url(Some(data_hub_url.into())),
        }
    }
}

fn parse_app_env(value: &str) -> AppEnv {
    match value.to_lowercase().as_str() {
        "production" => AppEnv::Production,
        "test" => AppEnv::Test,
        _ => AppEnv::Development,
    }
}

/// Unset or blank values fall back to the local data hub.
fn resolve_data_hub_url(value: Option<String>) -> String {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_DATA_HUB_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_hub_url_defaults_when_unset() {
        assert_eq!(resolve_data_hub_url(None), "http://localhost:5000");
        assert_eq!(resolve_data_hub_url(Some("   ".into())), "http://localhost:5000");
    }

    #[test]
    fn data_hub_url_strips_trailing_slash() {
        assert_eq!(
            resolve_data_hub_url(Some("https://hub.internal:8443/".into())),
            "https://hub.internal:8443"
        );
        assert_eq!(
            Config::new("http://10.0.0.7:5000").data_hub_url,
            "http://10.0.0.7:5000"
        );
    }

    #[test]
    fn app_env_is_case_insensitive() {
        assert_eq!(parse_app_env("PRODUCTION"), AppEnv::Production);
        assert_eq!(parse_app_env("test"), AppEnv::Test);
        assert_eq!(parse_app_env("staging"), AppEnv::Development);
    }
}
