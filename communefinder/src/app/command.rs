//! Commands dispatched to the controller.

use crate::parse::DmsFieldSet;
use crate::points::{PointEdit, PointShape};
use crate::region::LoadedDataset;

/// The active input encoding of the entry form.
///
/// Switching modes does not convert values between encodings; only the
/// explicit decimal↔DMS toggle carries the current coordinate across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single free-text box: decimal pair or commune name.
    FreeText,
    /// Separate decimal latitude/longitude fields.
    DecimalFields,
    /// Six degree/minute/second fields.
    DmsFields,
    /// Single free-text DMS string.
    DmsText,
}

/// A user or system event, reduced by the controller into state changes
/// plus effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Free-text lookup from the search box; resolves as a coordinate pair
    /// or falls through to a commune-name query.
    Lookup(String),
    /// Lookup from the split decimal fields.
    FieldLookup { lat: String, lon: String },
    /// Lookup from the six DMS fields.
    DmsFieldLookup(DmsFieldSet),
    /// Lookup from a free-text DMS string.
    DmsTextLookup(String),
    /// A map click. Performs a direct coordinate lookup, or dispatches to
    /// region selection while selection mode is on.
    MapClick { lat: f64, lon: f64 },

    /// Place a user point at a position.
    PlacePoint {
        lat: f64,
        lon: f64,
        shape: PointShape,
        label: String,
        color: String,
        opacity: f64,
    },
    /// Apply a partial edit to a point.
    EditPoint { id: u64, edit: PointEdit },
    /// Delete a point.
    RemovePoint { id: u64 },

    /// Select a user point.
    SelectPoint { id: u64 },
    /// Select a commune by dataset insertion index.
    SelectRegion { index: usize },
    /// Clear the selection.
    ClearSelection,
    /// Toggle selection mode: when on, map clicks select instead of
    /// looking up coordinates.
    SetSelectionMode(bool),

    /// Switch the entry form's input mode. `carry` is the current
    /// coordinate in decimal degrees when the decimal↔DMS toggle should
    /// convert the field values across the switch.
    SetInputMode {
        mode: InputMode,
        carry: Option<(f64, f64)>,
    },
    /// Remove the locate marker.
    ClearLocateMarker,

    /// The dataset load completed.
    DatasetLoaded(LoadedDataset),
    /// The dataset load failed with no usable fallback.
    DatasetFailed { reason: String },
}
