//! Side-effect intents produced by the controller.
//!
//! Commands are reduced to state changes plus a list of these intents; the
//! rendering collaborator (map, panels, toasts) executes them. The core
//! never touches the presentation layer directly, which keeps every
//! transition testable without a browser.

use crate::app::command::InputMode;
use crate::app::controller::LookupError;
use crate::app::selection::SelectionState;
use crate::coord::{CanonicalPoint, DmsAngle};
use crate::region::DatasetSource;

/// An instruction to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Re-center the map view on a point. Only the point-lookup path emits
    /// this; no other component may trigger view navigation.
    CenterView(CanonicalPoint),
    /// Replace the single locate marker with one at this point.
    PlaceLocateMarker(CanonicalPoint),
    /// Remove the locate marker.
    ClearLocateMarker,

    /// A point lookup completed. `region` is `None` when no commune
    /// contains the point, which is a normal negative result.
    LookupResult {
        point: CanonicalPoint,
        region: Option<String>,
    },
    /// A name lookup completed. `region` is `None` on no match.
    NameLookupResult {
        query: String,
        region: Option<String>,
    },
    /// A lookup was rejected before resolution; user-correctable.
    LookupFailed(LookupError),

    /// Apply the highlight style to a region.
    HighlightRegion(usize),
    /// Restore a region to the dataset's default style. The renderer must
    /// delegate to the dataset's own style reset so live changes to the
    /// default style are honored exactly.
    ResetRegionStyle(usize),
    /// Apply the highlight style to a user point.
    HighlightPoint(u64),
    /// Restore a user point to its own configured style.
    ResetPointStyle(u64),
    /// The selection changed; panels update from this snapshot alone.
    SelectionChanged(SelectionState),

    /// A user point was added, changed or removed.
    PointAdded(u64),
    PointUpdated(u64),
    PointRemoved(u64),

    /// The active input encoding changed.
    InputModeChanged(InputMode),
    /// Selection mode was toggled.
    SelectionModeChanged(bool),
    /// Populate the decimal entry fields (decimal↔DMS toggle).
    SetDecimalFields { lat: f64, lon: f64 },
    /// Populate the DMS entry fields (decimal↔DMS toggle).
    SetDmsFields { lat: DmsAngle, lon: DmsAngle },

    /// The dataset finished loading.
    DatasetReady {
        count: usize,
        source: DatasetSource,
    },
    /// The dataset failed to load entirely; lookups are degraded until a
    /// reload succeeds, coordinate parsing stays available.
    DatasetUnavailable { reason: String },
}
