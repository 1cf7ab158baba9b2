//! turns a map click into at most one published feature.
//!
//! each click takes a [`ClickTicket`]. when a slower query finishes after a
//! newer click has started, its result is dropped (last click wins), so the
//! info panel never flips back to an older location.
mod click_resolution;
mod click_resolver;
mod click_ticket;
mod feature_sink;
mod session_config;

pub use click_resolution::{ClickResolution, ClickState};
pub use click_resolver::ClickResolver;
pub use click_ticket::ClickTicket;
pub use feature_sink::FeatureSink;
pub use session_config::SessionConfig;
