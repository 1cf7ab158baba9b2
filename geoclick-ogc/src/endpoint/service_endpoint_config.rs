use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ServiceEndpoint;
use crate::transport::{Credentials, ReqwestClient, DEFAULT_TIMEOUT_SECS};
use crate::OgcError;

/// Serializable configuration for a WMS or WFS endpoint.
/// Builds to a [`ServiceEndpoint`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpointConfig {
    /// service url without OGC query parameters, e.g. `https://example.com/wfs`
    pub base_url: String,
    /// Basic-Auth username. the placeholder pair is used when neither half is set
    pub username: Option<String>,
    /// Basic-Auth password. must be set together with `username`
    pub password: Option<String>,
    /// Per-request timeout in seconds. Defaults to 10
    pub timeout_secs: Option<u64>,
}

impl ServiceEndpointConfig {
    pub fn new(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        let (username, password) = match credentials {
            Some(c) => (Some(c.username), Some(c.password)),
            None => (None, None),
        };
        Self {
            base_url: base_url.into(),
            username,
            password,
            timeout_secs: None,
        }
    }

    /// Errors when only one of `username`/`password` is configured
    pub fn credentials(&self) -> Result<Credentials, OgcError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Credentials::new(username, password)),
            (None, None) => {
                log::warn!(
                    "no credentials configured for '{}', using placeholder credentials",
                    self.base_url
                );
                Ok(Credentials::placeholder())
            }
            (Some(_), None) => Err(OgcError::InvalidConfig(format!(
                "'{}' has a username but no password",
                self.base_url
            ))),
            (None, Some(_)) => Err(OgcError::InvalidConfig(format!(
                "'{}' has a password but no username",
                self.base_url
            ))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn build(&self) -> Result<ServiceEndpoint, OgcError> {
        ServiceEndpoint::new(&self.base_url, self.credentials()?)
    }

    /// HTTP client honoring this endpoint's timeout
    pub fn build_client(&self) -> Result<ReqwestClient, OgcError> {
        ReqwestClient::with_timeout(self.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_use_placeholder() {
        let conf = ServiceEndpointConfig::new("https://example.com/wfs", None);
        assert!(conf.credentials().unwrap().is_placeholder());
        assert!(conf.build().unwrap().credentials().is_placeholder());
    }

    #[test]
    fn test_half_configured_credentials_are_rejected() {
        let username_only = ServiceEndpointConfig {
            base_url: "https://example.com/wfs".to_string(),
            username: Some("alice".to_string()),
            password: None,
            timeout_secs: None,
        };
        assert!(matches!(
            username_only.build(),
            Err(OgcError::InvalidConfig(_))
        ));

        let password_only = ServiceEndpointConfig {
            username: None,
            password: Some("secret".to_string()),
            ..username_only
        };
        assert!(matches!(
            password_only.build(),
            Err(OgcError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_explicit_credentials() {
        let creds = Credentials::new("alice", "secret");
        let conf = ServiceEndpointConfig::new("https://example.com/wfs", Some(creds.clone()));
        let endpoint = conf.build().unwrap();
        assert_eq!(endpoint.credentials(), &creds);
    }

    #[test]
    fn test_default_timeout() {
        let conf = ServiceEndpointConfig::new("https://example.com/wfs", None);
        assert_eq!(conf.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_deserialize_from_json() {
        let conf: ServiceEndpointConfig = serde_json::from_str(
            r#"{"base_url": "https://example.com/wms", "timeout_secs": 3}"#,
        )
        .unwrap();
        assert_eq!(conf.timeout(), Duration::from_secs(3));
        assert!(conf.username.is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let conf = ServiceEndpointConfig::new("not a url", None);
        assert!(matches!(conf.build(), Err(OgcError::InvalidUrl { .. })));
    }
}
