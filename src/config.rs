//! Startup configuration read from the environment (and `.env`, when present).
//!
//! | Variable                   | Default                 | Description                          |
//! |----------------------------|-------------------------|--------------------------------------|
//! | `DIRECTORY_API_BASE`       | `http://localhost:5000` | Backend base URL                     |
//! | `DIRECTORY_SESSION_COOKIE` | --                      | `Cookie` header of an admin session  |

use crate::error::ConfigError;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub session_cookie: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_base =
            std::env::var("DIRECTORY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let session_cookie = std::env::var("DIRECTORY_SESSION_COOKIE")
            .ok()
            .filter(|cookie| !cookie.trim().is_empty());

        Self::new(&api_base, session_cookie)
    }

    pub fn new(api_base: &str, session_cookie: Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: normalize_base_url(api_base)?,
            session_cookie,
        })
    }

    pub fn default_headers(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &self.session_cookie {
            let value = HeaderValue::from_str(cookie).map_err(|e| ConfigError::InvalidHeader {
                name: COOKIE.to_string(),
                reason: e.to_string(),
            })?;
            headers.insert(COOKIE, value);
        }
        Ok(headers)
    }
}

/// Validates an http(s) base URL and strips trailing slashes so endpoint paths can be appended.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|_| ConfigError::InvalidBaseUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
