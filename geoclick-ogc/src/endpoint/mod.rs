mod service_endpoint;
mod service_endpoint_config;

pub use service_endpoint::ServiceEndpoint;
pub use service_endpoint_config::ServiceEndpointConfig;
