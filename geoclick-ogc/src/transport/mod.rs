mod credentials;
mod http_client;
mod reqwest_client;

pub use credentials::Credentials;
pub use http_client::HttpClient;
pub use reqwest_client::{ReqwestClient, DEFAULT_TIMEOUT_SECS};
