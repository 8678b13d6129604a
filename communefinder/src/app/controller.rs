//! The application controller.
//!
//! Owns every piece of mutable application state (dataset, selection,
//! points, input mode, locate marker) and reduces [`Command`]s into state
//! changes plus [`Effect`] lists. All mutation happens synchronously inside
//! [`AppController::handle`]; the dataset load is the only asynchronous
//! operation and re-enters through [`Command::DatasetLoaded`].

use thiserror::Error;
use tracing::{debug, info, warn};

use super::command::{Command, InputMode};
use super::effect::Effect;
use super::selection::{SelectionMachine, SelectionState};
use crate::coord::{decimal_to_dms, validate, CanonicalPoint, RangeError};
use crate::parse::{normalize, InputEncoding, NormalizeError, Normalized, ParseError};
use crate::points::{PointCollection, PointEdit, PointProperties, PointShape};
use crate::region::{LoadedDataset, RegionSet};
use crate::resolve::{resolve_by_name, resolve_containing, resolve_containing_index};

/// Why a lookup did not produce a result.
///
/// Every variant is recoverable where it happens: parse and range problems
/// are user-correctable, and a missing dataset recovers by itself when the
/// load completes. A point with no containing commune is not an error at
/// all; it is reported as an empty result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("commune data is not loaded")]
    DataUnavailable,
}

impl From<NormalizeError> for LookupError {
    fn from(e: NormalizeError) -> Self {
        match e {
            NormalizeError::Parse(e) => Self::Parse(e),
            NormalizeError::Range(e) => Self::Range(e),
        }
    }
}

/// Lifecycle of the commune dataset.
///
/// Loading is all-or-nothing: lookups issued while `Loading` fail
/// gracefully with [`LookupError::DataUnavailable`] and never observe a
/// partial dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetState {
    /// The initial state, before the load completes.
    Loading,
    /// The dataset is fully loaded.
    Ready(LoadedDataset),
    /// The load failed with no usable fallback. Coordinate parsing and
    /// validation stay functional; containment and name lookups degrade.
    Failed { reason: String },
}

/// The application controller. See the module docs.
#[derive(Debug)]
pub struct AppController {
    dataset: DatasetState,
    selection: SelectionMachine,
    points: PointCollection,
    input_mode: InputMode,
    selection_mode: bool,
    locate_marker: Option<CanonicalPoint>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    pub fn new() -> Self {
        Self {
            dataset: DatasetState::Loading,
            selection: SelectionMachine::new(),
            points: PointCollection::new(),
            input_mode: InputMode::FreeText,
            selection_mode: false,
            locate_marker: None,
        }
    }

    /// Reduce one command into effects.
    pub fn handle(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Lookup(text) => {
                self.lookup_encoded(&InputEncoding::SingleDecimalPair(text))
            }
            Command::FieldLookup { lat, lon } => {
                self.lookup_encoded(&InputEncoding::DualDecimalFields { lat, lon })
            }
            Command::DmsFieldLookup(fields) => {
                self.lookup_encoded(&InputEncoding::DmsFields(fields))
            }
            Command::DmsTextLookup(text) => {
                self.lookup_encoded(&InputEncoding::SingleDmsString(text))
            }
            Command::MapClick { lat, lon } => self.map_click(lat, lon),
            Command::PlacePoint {
                lat,
                lon,
                shape,
                label,
                color,
                opacity,
            } => self.place_point(lat, lon, shape, label, color, opacity),
            Command::EditPoint { id, edit } => self.edit_point(id, edit),
            Command::RemovePoint { id } => self.remove_point(id),
            Command::SelectPoint { id } => self.select_point(id),
            Command::SelectRegion { index } => self.select_region(index),
            Command::ClearSelection => self.selection.clear(),
            Command::SetSelectionMode(enabled) => {
                self.selection_mode = enabled;
                vec![Effect::SelectionModeChanged(enabled)]
            }
            Command::SetInputMode { mode, carry } => self.set_input_mode(mode, carry),
            Command::ClearLocateMarker => {
                if self.locate_marker.take().is_some() {
                    vec![Effect::ClearLocateMarker]
                } else {
                    Vec::new()
                }
            }
            Command::DatasetLoaded(loaded) => self.dataset_loaded(loaded),
            Command::DatasetFailed { reason } => self.dataset_failed(reason),
        }
    }

    /// Loaded regions, when the dataset is ready.
    pub fn regions(&self) -> Option<&RegionSet> {
        match &self.dataset {
            DatasetState::Ready(loaded) => Some(&loaded.regions),
            _ => None,
        }
    }

    pub fn dataset_state(&self) -> &DatasetState {
        &self.dataset
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn points(&self) -> &PointCollection {
        &self.points
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    pub fn locate_marker(&self) -> Option<CanonicalPoint> {
        self.locate_marker
    }

    fn lookup_encoded(&mut self, encoding: &InputEncoding) -> Vec<Effect> {
        match normalize(encoding) {
            Ok(Normalized::Point(point)) => self.lookup_point(point),
            Ok(Normalized::NameQuery(query)) => self.lookup_name(query),
            Err(e) => {
                debug!(error = %e, "Lookup input rejected");
                vec![Effect::LookupFailed(e.into())]
            }
        }
    }

    /// Resolve a validated point and present the outcome. This is the only
    /// path that navigates the view.
    fn lookup_point(&mut self, point: CanonicalPoint) -> Vec<Effect> {
        let Some(regions) = self.regions() else {
            debug!(%point, "Point lookup before dataset is available");
            return vec![Effect::LookupFailed(LookupError::DataUnavailable)];
        };

        let region = resolve_containing(&point, regions).map(|r| r.name().to_string());
        debug!(%point, region = region.as_deref().unwrap_or("none"), "Resolved point");

        // The locate marker slot is replaced wholesale on every lookup
        self.locate_marker = Some(point);
        vec![
            Effect::PlaceLocateMarker(point),
            Effect::CenterView(point),
            Effect::LookupResult { point, region },
        ]
    }

    fn lookup_name(&mut self, query: String) -> Vec<Effect> {
        let Some(regions) = self.regions() else {
            debug!(%query, "Name lookup before dataset is available");
            return vec![Effect::LookupFailed(LookupError::DataUnavailable)];
        };

        let region = resolve_by_name(&query, regions).map(|r| r.name().to_string());
        debug!(%query, region = region.as_deref().unwrap_or("none"), "Resolved name");
        vec![Effect::NameLookupResult { query, region }]
    }

    fn map_click(&mut self, lat: f64, lon: f64) -> Vec<Effect> {
        if self.selection_mode {
            // Clicks select while selection mode is on
            let Some(regions) = self.regions() else {
                debug!("Selection click before dataset is available");
                return Vec::new();
            };
            let point = match validate(lat, lon) {
                Ok(point) => point,
                Err(e) => return vec![Effect::LookupFailed(LookupError::Range(e))],
            };
            return match resolve_containing_index(&point, regions) {
                Some(index) => self.selection.select_region(index),
                None => {
                    debug!(%point, "Selection click outside every commune");
                    Vec::new()
                }
            };
        }

        // Otherwise a click is a direct coordinate lookup, bypassing text
        // parsing entirely
        match validate(lat, lon) {
            Ok(point) => self.lookup_point(point),
            Err(e) => vec![Effect::LookupFailed(LookupError::Range(e))],
        }
    }

    fn place_point(
        &mut self,
        lat: f64,
        lon: f64,
        shape: PointShape,
        label: String,
        color: String,
        opacity: f64,
    ) -> Vec<Effect> {
        let position = match validate(lat, lon) {
            Ok(position) => position,
            Err(e) => return vec![Effect::LookupFailed(LookupError::Range(e))],
        };

        let resolved = self
            .regions()
            .and_then(|regions| resolve_containing(&position, regions))
            .map(|r| r.name().to_string());

        let id = self.points.place(
            position,
            shape,
            PointProperties::new(label, color, opacity, resolved),
        );
        info!(id, %position, "Placed user point");
        vec![Effect::PointAdded(id)]
    }

    fn edit_point(&mut self, id: u64, edit: PointEdit) -> Vec<Effect> {
        let Some(position_changed) = self.points.edit(id, edit) else {
            warn!(id, "Edit for unknown point");
            return Vec::new();
        };

        if position_changed {
            // Moving a point can move it into a different commune
            let resolved = self
                .points
                .get(id)
                .map(|p| p.position)
                .and_then(|position| {
                    self.regions()
                        .and_then(|regions| resolve_containing(&position, regions))
                })
                .map(|r| r.name().to_string());
            self.points.set_resolved_region(id, resolved);
        }

        vec![Effect::PointUpdated(id)]
    }

    fn remove_point(&mut self, id: u64) -> Vec<Effect> {
        if self.points.get(id).is_none() {
            warn!(id, "Remove for unknown point");
            return Vec::new();
        }

        // Deselect before the point disappears so the highlight reverts
        let mut effects = if self.selection.state() == SelectionState::Point(id) {
            self.selection.clear()
        } else {
            Vec::new()
        };

        self.points.remove(id);
        effects.push(Effect::PointRemoved(id));
        effects
    }

    fn select_point(&mut self, id: u64) -> Vec<Effect> {
        if self.points.get(id).is_none() {
            warn!(id, "Select for unknown point");
            return Vec::new();
        }
        self.selection.select_point(id)
    }

    fn select_region(&mut self, index: usize) -> Vec<Effect> {
        let known = self.regions().is_some_and(|r| index < r.len());
        if !known {
            warn!(index, "Select for unknown region");
            return Vec::new();
        }
        self.selection.select_region(index)
    }

    fn set_input_mode(&mut self, mode: InputMode, carry: Option<(f64, f64)>) -> Vec<Effect> {
        self.input_mode = mode;
        let mut effects = vec![Effect::InputModeChanged(mode)];

        // Only the decimal↔DMS toggle converts values across the switch
        if let Some((lat, lon)) = carry {
            match mode {
                InputMode::DmsFields => effects.push(Effect::SetDmsFields {
                    lat: decimal_to_dms(lat),
                    lon: decimal_to_dms(lon),
                }),
                InputMode::DecimalFields => effects.push(Effect::SetDecimalFields { lat, lon }),
                _ => {}
            }
        }
        effects
    }

    fn dataset_loaded(&mut self, loaded: LoadedDataset) -> Vec<Effect> {
        // Region selection indices do not survive a reload
        let mut effects = self.selection.clear();

        info!(count = loaded.regions.len(), source = %loaded.source, "Dataset ready");
        effects.push(Effect::DatasetReady {
            count: loaded.regions.len(),
            source: loaded.source,
        });
        self.dataset = DatasetState::Ready(loaded);
        effects
    }

    fn dataset_failed(&mut self, reason: String) -> Vec<Effect> {
        warn!(%reason, "Dataset unavailable, lookups degraded");
        let mut effects = self.selection.clear();
        effects.push(Effect::DatasetUnavailable {
            reason: reason.clone(),
        });
        self.dataset = DatasetState::Failed { reason };
        effects
    }
}
