mod app_config;
mod error;
mod geoclick_app;
mod stdout_sink;

pub use app_config::AppConfig;
pub use error::AppError;
pub use geoclick_app::{GeoclickApp, GeoclickOperation};
pub use stdout_sink::StdoutSink;
