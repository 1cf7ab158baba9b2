/// failures raised inside the WMS/WFS adapters. the adapters contain these at
/// their boundary (logging them and returning `None`); the `try_` variants of
/// each adapter operation expose them to callers that want the detail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OgcError {
    #[error("invalid service url '{url}': {message}")]
    InvalidUrl { url: String, message: String },
    #[error("invalid endpoint configuration: {0}")]
    InvalidConfig(String),
    #[error("failure building HTTP client: {0}")]
    ClientBuild(String),
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },
    #[error("failed to parse {document} response: {message}")]
    Parse {
        document: &'static str,
        message: String,
    },
}

impl OgcError {
    /// true for the network/timeout/status family, false for body parse failures
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            OgcError::Transport { .. } | OgcError::HttpStatus { .. }
        )
    }
}
