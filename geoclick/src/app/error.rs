use geoclick_core::model::ModelError;
use geoclick_ogc::OgcError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure reading configuration '{path}': {message}")]
    Config { path: String, message: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no [{0}] endpoint is configured")]
    MissingEndpoint(&'static str),
    #[error("{0} is unavailable, see log for details")]
    Unavailable(&'static str),
    #[error("failure writing output: {0}")]
    Output(String),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Ogc(#[from] OgcError),
}
