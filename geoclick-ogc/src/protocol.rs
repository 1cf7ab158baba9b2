//! fixed OGC request parameter values used by the adapters

pub const CRS_EPSG_4326: &str = "EPSG:4326";

pub mod wms {
    pub const SERVICE: &str = "WMS";
    pub const VERSION: &str = "1.3.0";
    pub const GET_MAP: &str = "GetMap";
    pub const GET_CAPABILITIES: &str = "GetCapabilities";
    pub const IMAGE_FORMAT: &str = "image/png";
    pub const DEFAULT_TILE_SIZE: u32 = 256;
}

pub mod wfs {
    pub const SERVICE: &str = "WFS";
    pub const VERSION: &str = "1.1.0";
    pub const GET_FEATURE: &str = "GetFeature";
    pub const GET_CAPABILITIES: &str = "GetCapabilities";
    pub const OUTPUT_FORMAT_JSON: &str = "application/json";
    /// ~100m at the equator
    pub const DEFAULT_POINT_BUFFER: f64 = 0.001;
}
