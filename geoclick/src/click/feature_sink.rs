use geoclick_core::model::feature::{Feature, MarkerOverlay};

/// the UI shell side of the click flow: receives the info-panel feature and
/// the marker (if the feature can be drawn as one). called at most once per click.
pub trait FeatureSink {
    fn publish(&self, feature: &Feature, marker: Option<&MarkerOverlay>);
}
