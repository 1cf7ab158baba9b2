use geoclick_core::model::feature::Feature;
use serde::{Deserialize, Serialize};

/// where the most recent click is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickState {
    Idle,
    Resolving,
    Resolved,
    FallbackResolved,
    Empty,
}

/// the outcome of one click
#[derive(Debug, Clone, PartialEq)]
pub enum ClickResolution {
    /// the first feature returned by the WFS query
    Resolved(Feature),
    /// synthesized at the clicked point because no WFS source is active
    FallbackResolved(Feature),
    /// the query failed or found nothing; nothing is published
    Empty,
    /// a newer click started before this one finished; nothing is published
    Superseded,
}

impl ClickResolution {
    pub fn feature(&self) -> Option<&Feature> {
        match self {
            ClickResolution::Resolved(f) | ClickResolution::FallbackResolved(f) => Some(f),
            ClickResolution::Empty | ClickResolution::Superseded => None,
        }
    }

    /// the state the click ends in, `None` for superseded clicks
    pub fn final_state(&self) -> Option<ClickState> {
        match self {
            ClickResolution::Resolved(_) => Some(ClickState::Resolved),
            ClickResolution::FallbackResolved(_) => Some(ClickState::FallbackResolved),
            ClickResolution::Empty => Some(ClickState::Empty),
            ClickResolution::Superseded => None,
        }
    }
}

impl std::fmt::Display for ClickResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ClickResolution::Resolved(_) => "resolved",
            ClickResolution::FallbackResolved(_) => "fallback_resolved",
            ClickResolution::Empty => "empty",
            ClickResolution::Superseded => "superseded",
        };
        write!(f, "{s}")
    }
}
