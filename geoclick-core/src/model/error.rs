#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("coordinate (lat {lat}, lng {lng}) is outside of EPSG:4326 bounds")]
    InvalidCoordinate { lat: f64, lng: f64 },
    #[error("invalid bounding box: {0}")]
    InvalidBoundingBox(String),
    #[error("failed to parse bounding box '{input}': {message}")]
    BoundingBoxParse { input: String, message: String },
}
