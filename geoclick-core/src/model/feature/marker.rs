use geojson::{Feature, Value};
use serde::Serialize;

use super::popup_lines;
use crate::model::Coordinate;

/// a marker with a popup for the map widget to draw over the clicked feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerOverlay {
    /// marker position, lat-first as map widgets expect
    pub position: Coordinate,
    pub popup_title: String,
    pub popup_lines: Vec<String>,
}

impl MarkerOverlay {
    pub const POPUP_TITLE: &'static str = "Feature information";

    /// projects a resolved feature into an overlay. only Point geometries are
    /// highlighted; any other geometry, or no feature at all, draws nothing.
    pub fn from_feature(feature: Option<&Feature>) -> Option<MarkerOverlay> {
        let feature = feature?;
        let geometry = feature.geometry.as_ref()?;
        let position = match &geometry.value {
            Value::Point(pos) => match pos[..] {
                [lng, lat, ..] => match Coordinate::try_new(lat, lng) {
                    Ok(coord) => coord,
                    Err(e) => {
                        log::warn!("feature point cannot be drawn as a marker: {e}");
                        return None;
                    }
                },
                _ => {
                    log::warn!("feature point has {} ordinates, expected at least 2", pos.len());
                    return None;
                }
            },
            _ => return None,
        };
        Some(MarkerOverlay {
            position,
            popup_title: Self::POPUP_TITLE.to_string(),
            popup_lines: popup_lines(feature),
        })
    }

    /// popup body with one `key: value` line per property
    pub fn popup_text(&self) -> String {
        self.popup_lines.join("\n")
    }
}
