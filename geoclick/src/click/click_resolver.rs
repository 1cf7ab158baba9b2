use std::sync::{Mutex, MutexGuard};

use geoclick_core::model::feature::{fallback_feature, first_feature, MarkerOverlay};
use geoclick_core::model::Coordinate;
use geoclick_ogc::protocol::wfs::DEFAULT_POINT_BUFFER;
use geoclick_ogc::wfs::WfsClient;

use super::{ClickResolution, ClickState, ClickTicket, FeatureSink, SessionConfig};

#[derive(Debug)]
struct LatestClick {
    id: u64,
    state: ClickState,
}

/// resolves map clicks into features, one click at a time or overlapping.
///
/// overlapping clicks are allowed: each click is resolved independently, and
/// only the result of the most recently started click is published.
pub struct ClickResolver {
    wfs: Option<WfsClient>,
    buffer: f64,
    latest: Mutex<LatestClick>,
    publish: Mutex<()>,
}

impl ClickResolver {
    /// `None` puts every click in test mode regardless of the session toggles
    pub fn new(wfs: Option<WfsClient>) -> Self {
        Self {
            wfs,
            buffer: DEFAULT_POINT_BUFFER,
            latest: Mutex::new(LatestClick {
                id: 0,
                state: ClickState::Idle,
            }),
            publish: Mutex::new(()),
        }
    }

    /// point-query tolerance in degrees
    pub fn with_buffer(mut self, buffer: f64) -> Self {
        self.buffer = buffer;
        self
    }

    /// state of the most recently started click
    pub fn state(&self) -> ClickState {
        self.lock_latest().state
    }

    /// registers a new click, superseding any click still in flight
    pub fn begin_click(&self, coordinate: Coordinate) -> ClickTicket {
        let mut latest = self.lock_latest();
        latest.id += 1;
        latest.state = ClickState::Resolving;
        ClickTicket {
            id: latest.id,
            coordinate,
        }
    }

    /// picks the data source for the session and runs the query. blocks for
    /// at most the WFS client's request timeout. publishes nothing.
    pub fn resolve(&self, ticket: &ClickTicket, session: &SessionConfig) -> ClickResolution {
        let coordinate = &ticket.coordinate;
        let (wfs, layer_name) = match (&self.wfs, session.active_wfs_layer()) {
            (Some(wfs), Some(layer_name)) => (wfs, layer_name),
            _ => {
                log::info!("WFS source or layer not configured, using test mode for click {coordinate}");
                let feature = fallback_feature(coordinate, &chrono::Local::now());
                return ClickResolution::FallbackResolved(feature);
            }
        };

        match wfs.query_by_point(coordinate, layer_name, self.buffer) {
            None => {
                log::warn!("no answer from WFS for click {coordinate} on layer '{layer_name}'");
                ClickResolution::Empty
            }
            Some(collection) => match first_feature(&collection) {
                Some(feature) => {
                    if collection.features.len() > 1 {
                        log::debug!(
                            "{} features at {coordinate}, using the first",
                            collection.features.len()
                        );
                    }
                    ClickResolution::Resolved(feature.clone())
                }
                None => {
                    log::info!("no features found at {coordinate} on layer '{layer_name}'");
                    ClickResolution::Empty
                }
            },
        }
    }

    /// publishes a resolution to the sink unless a newer click has started
    /// since `ticket` was issued. publishes are serialized, so a result that
    /// passed the newest-click check is delivered before any later one. the
    /// click lock is released before the sink runs, so the sink may read
    /// [`ClickResolver::state`] or begin a click, but must not finish one.
    pub fn finish(
        &self,
        ticket: &ClickTicket,
        resolution: ClickResolution,
        sink: &dyn FeatureSink,
    ) -> ClickResolution {
        let _publishing = self.publish.lock().unwrap_or_else(|e| e.into_inner());
        {
            let mut latest = self.lock_latest();
            if latest.id != ticket.id {
                log::debug!(
                    "dropping result of click {} ({resolution}), click {} is newer",
                    ticket.id,
                    latest.id
                );
                return ClickResolution::Superseded;
            }
            if let Some(state) = resolution.final_state() {
                latest.state = state;
            }
        }
        if let Some(feature) = resolution.feature() {
            let marker = MarkerOverlay::from_feature(Some(feature));
            sink.publish(feature, marker.as_ref());
        }
        resolution
    }

    /// begin, resolve and publish a single click
    pub fn handle_click(
        &self,
        coordinate: Coordinate,
        session: &SessionConfig,
        sink: &dyn FeatureSink,
    ) -> ClickResolution {
        let ticket = self.begin_click(coordinate);
        let resolution = self.resolve(&ticket, session);
        self.finish(&ticket, resolution, sink)
    }

    fn lock_latest(&self) -> MutexGuard<'_, LatestClick> {
        self.latest.lock().unwrap_or_else(|e| e.into_inner())
    }
}
