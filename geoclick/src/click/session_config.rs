use serde::{Deserialize, Serialize};

/// the layer toggles of the current session, captured as a value and handed
/// to the click flow on every click instead of being read from shared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// show the WMS overlay
    pub wms_enabled: bool,
    /// resolve clicks against the WFS source. when off, clicks produce test-mode features
    pub wfs_enabled: bool,
    /// layer shared by the WMS overlay and WFS queries
    pub layer_name: Option<String>,
}

impl SessionConfig {
    pub const DEFAULT_LAYER: &'static str = "test_layer";

    /// the layer to query on click, if live WFS queries are on for this session
    pub fn active_wfs_layer(&self) -> Option<&str> {
        if !self.wfs_enabled {
            return None;
        }
        self.layer_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            wms_enabled: true,
            wfs_enabled: false,
            layer_name: Some(Self::DEFAULT_LAYER.to_string()),
        }
    }
}
