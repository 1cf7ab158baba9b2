//! the feature model shared by the WFS adapter, the click flow and the map overlay.
//! features are plain GeoJSON; this module adds the operations the click flow needs.
mod fallback;
mod feature_ops;
mod marker;

pub use fallback::{fallback_feature, FALLBACK_COORDINATE_DECIMALS};
pub use feature_ops::{first_feature, popup_lines, property_display};
pub use geojson::{Feature, FeatureCollection, Geometry, Value as GeometryValue};
pub use marker::MarkerOverlay;
