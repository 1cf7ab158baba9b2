use geoclick_core::model::feature::{Feature, MarkerOverlay};
use serde_json::json;

use crate::click::FeatureSink;

/// writes each published feature and its marker to stdout as one JSON document
pub struct StdoutSink;

impl FeatureSink for StdoutSink {
    fn publish(&self, feature: &Feature, marker: Option<&MarkerOverlay>) {
        let doc = json!({
            "feature": feature,
            "marker": marker,
        });
        match serde_json::to_string_pretty(&doc) {
            Ok(s) => println!("{s}"),
            Err(e) => log::error!("failure serializing published feature: {e}"),
        }
    }
}
