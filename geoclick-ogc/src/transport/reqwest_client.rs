use std::time::Duration;

use super::{Credentials, HttpClient};
use crate::OgcError;

/// per-request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// [`HttpClient`] backed by a blocking reqwest client.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, OgcError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, OgcError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| OgcError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, credentials: &Credentials) -> Result<Vec<u8>, OgcError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .map_err(|e| OgcError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OgcError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| OgcError::Transport {
                url: url.to_string(),
                message: format!("failed to read response body: {e}"),
            })
    }
}
