mod bbox;
mod coordinate;
mod error;

pub mod feature;

pub use bbox::BoundingBox;
pub use coordinate::Coordinate;
pub use error::ModelError;
