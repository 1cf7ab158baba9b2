use reqwest::Url;

use crate::transport::Credentials;
use crate::OgcError;

/// immutable adapter configuration: the parsed base url and the credential
/// pair shared by every request issued through the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceEndpoint {
    base_url: Url,
    credentials: Credentials,
}

impl ServiceEndpoint {
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, OgcError> {
        let base_url = Url::parse(base_url).map_err(|e| OgcError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(OgcError::InvalidUrl {
                url: base_url.to_string(),
                message: "url cannot carry query parameters".to_string(),
            });
        }
        Ok(Self {
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// base url with the given parameters appended, form-urlencoded, in order.
    /// any query already present on the base url is kept in front.
    pub fn request_url(&self, params: &[(&str, &str)]) -> String {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().extend_pairs(params);
        url.into()
    }
}
