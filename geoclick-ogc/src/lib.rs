pub mod endpoint;
pub mod protocol;
pub mod transport;
pub mod wfs;
pub mod wms;

mod error;

pub use error::OgcError;
