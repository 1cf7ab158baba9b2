use super::Credentials;
use crate::OgcError;

/// blocking HTTP GET seam used by the WMS and WFS adapters.
///
/// implementations send Basic-Auth credentials, enforce their own request
/// timeout and report any non-2xx status as [`OgcError::HttpStatus`].
/// tests substitute in-memory implementations that replay canned responses.
pub trait HttpClient: Send + Sync {
    /// GET `url` and return the response body
    fn get(&self, url: &str, credentials: &Credentials) -> Result<Vec<u8>, OgcError>;
}
