//! Integration tests for selection, highlighting and the locate marker.
//!
//! Run with: `cargo test --test selection_integration`

use communefinder::app::{AppController, Command, Effect, SelectionState};
use communefinder::coord::validate;
use communefinder::points::{PointEdit, PointShape};
use communefinder::region::{DatasetSource, LoadedDataset, Region, RegionSet};

fn dataset() -> LoadedDataset {
    LoadedDataset {
        regions: RegionSet::from_regions(vec![
            Region::new(
                "Koné",
                vec![vec![(164.7, -21.2), (165.0, -21.2), (165.0, -20.9), (164.7, -20.9)]],
            ),
            Region::new(
                "Bourail",
                vec![vec![(165.3, -21.75), (165.65, -21.75), (165.65, -21.4), (165.3, -21.4)]],
            ),
        ]),
        source: DatasetSource::Network,
    }
}

fn ready_controller() -> AppController {
    let mut controller = AppController::new();
    controller.handle(Command::DatasetLoaded(dataset()));
    controller
}

fn place_point(controller: &mut AppController, lat: f64, lon: f64, label: &str) -> u64 {
    let effects = controller.handle(Command::PlacePoint {
        lat,
        lon,
        shape: PointShape::Circle,
        label: label.to_string(),
        color: "#e5534b".to_string(),
        opacity: 0.9,
    });
    match effects.as_slice() {
        [Effect::PointAdded(id)] => *id,
        other => panic!("expected PointAdded, got {:?}", other),
    }
}

// ============================================================================
// Region selection
// ============================================================================

#[test]
fn test_selecting_b_reverts_a_before_highlighting_b() {
    let mut controller = ready_controller();
    controller.handle(Command::SelectRegion { index: 0 });

    let effects = controller.handle(Command::SelectRegion { index: 1 });
    let reset_pos = effects
        .iter()
        .position(|e| *e == Effect::ResetRegionStyle(0))
        .expect("previous highlight must be reverted");
    let highlight_pos = effects
        .iter()
        .position(|e| *e == Effect::HighlightRegion(1))
        .expect("new highlight must be applied");
    assert!(reset_pos < highlight_pos, "revert must come first");
}

#[test]
fn test_select_then_clear_returns_to_default_style() {
    let mut controller = ready_controller();
    controller.handle(Command::SelectRegion { index: 1 });

    let effects = controller.handle(Command::ClearSelection);
    assert_eq!(
        effects,
        vec![
            Effect::ResetRegionStyle(1),
            Effect::SelectionChanged(SelectionState::Idle),
        ]
    );
    assert_eq!(controller.selection_state(), SelectionState::Idle);
}

#[test]
fn test_at_most_one_highlight_across_mixed_selections() {
    let mut controller = ready_controller();
    let id = place_point(&mut controller, -21.0, 164.8, "camp");

    controller.handle(Command::SelectRegion { index: 0 });
    let effects = controller.handle(Command::SelectPoint { id });

    // The region highlight is reverted in the same reduction that applies
    // the point highlight
    assert!(effects.contains(&Effect::ResetRegionStyle(0)));
    assert!(effects.contains(&Effect::HighlightPoint(id)));
    assert_eq!(controller.selection_state(), SelectionState::Point(id));
}

// ============================================================================
// Locate marker independence
// ============================================================================

#[test]
fn test_locate_marker_coexists_with_selection() {
    let mut controller = ready_controller();

    controller.handle(Command::Lookup("-21.5,165.5".to_string()));
    controller.handle(Command::SelectRegion { index: 0 });

    // Selecting did not clear the locate marker
    assert_eq!(
        controller.locate_marker(),
        Some(validate(-21.5, 165.5).unwrap())
    );
    assert_eq!(controller.selection_state(), SelectionState::Region(0));

    // And clearing the selection leaves the marker alone too
    controller.handle(Command::ClearSelection);
    assert!(controller.locate_marker().is_some());
}

#[test]
fn test_each_lookup_replaces_the_marker_slot() {
    let mut controller = ready_controller();

    controller.handle(Command::Lookup("-21.0, 164.8".to_string()));
    let effects = controller.handle(Command::Lookup("-21.5, 165.5".to_string()));

    // A single place effect per lookup: the slot is replaced, not stacked
    let places = effects
        .iter()
        .filter(|e| matches!(e, Effect::PlaceLocateMarker(_)))
        .count();
    assert_eq!(places, 1);
    assert_eq!(
        controller.locate_marker(),
        Some(validate(-21.5, 165.5).unwrap())
    );
}

// ============================================================================
// Selection mode
// ============================================================================

#[test]
fn test_selection_mode_routes_clicks_to_selection() {
    let mut controller = ready_controller();

    controller.handle(Command::SetSelectionMode(true));
    let effects = controller.handle(Command::MapClick {
        lat: -21.5,
        lon: 165.5,
    });
    assert!(effects.contains(&Effect::HighlightRegion(1)));

    // Turning the mode off routes clicks back to coordinate lookup
    controller.handle(Command::SetSelectionMode(false));
    let effects = controller.handle(Command::MapClick {
        lat: -21.5,
        lon: 165.5,
    });
    assert!(effects
        .iter()
        .any(|e| matches!(e, Effect::LookupResult { .. })));
}

// ============================================================================
// Point lifecycle within selection
// ============================================================================

#[test]
fn test_removing_selected_point_leaves_no_dangling_highlight() {
    let mut controller = ready_controller();
    let id = place_point(&mut controller, -21.0, 164.8, "camp");
    controller.handle(Command::SelectPoint { id });

    let effects = controller.handle(Command::RemovePoint { id });
    assert_eq!(effects[0], Effect::ResetPointStyle(id));
    assert_eq!(controller.selection_state(), SelectionState::Idle);
    assert!(controller.points().is_empty());
}

#[test]
fn test_editing_a_point_does_not_disturb_selection() {
    let mut controller = ready_controller();
    let id = place_point(&mut controller, -21.0, 164.8, "camp");
    controller.handle(Command::SelectRegion { index: 1 });

    controller.handle(Command::EditPoint {
        id,
        edit: PointEdit {
            label: Some("renamed".to_string()),
            ..PointEdit::default()
        },
    });
    assert_eq!(controller.selection_state(), SelectionState::Region(1));
}

#[test]
fn test_dataset_reload_clears_region_selection() {
    let mut controller = ready_controller();
    controller.handle(Command::SelectRegion { index: 0 });

    controller.handle(Command::DatasetLoaded(dataset()));
    assert_eq!(controller.selection_state(), SelectionState::Idle);
}
