use geoclick_core::model::BoundingBox;
use serde::{Deserialize, Serialize};

use crate::protocol::CRS_EPSG_4326;

/// a named layer advertised by a WMS capabilities document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    pub name: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub crs: Vec<String>,
    pub bbox: BoundingBox,
}

impl LayerDescriptor {
    /// builds a descriptor with the fixed CRS set and the whole-world extent.
    /// per-layer authored extents are not read, since capability documents
    /// in the wild are too inconsistent about them.
    pub fn new(name: String, title: String, abstract_text: Option<String>) -> Self {
        Self {
            name,
            title,
            abstract_text,
            crs: vec![CRS_EPSG_4326.to_string()],
            bbox: BoundingBox::WORLD,
        }
    }
}
