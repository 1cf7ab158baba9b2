mod capabilities_parser;
mod layer_descriptor;
mod wms_client;

pub use capabilities_parser::{decode_capabilities, parse_capabilities};
pub use layer_descriptor::LayerDescriptor;
pub use wms_client::WmsClient;
