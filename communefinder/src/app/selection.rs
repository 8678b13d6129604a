//! Selection and highlight state machine.
//!
//! At most one entity is selected and highlighted at any time: a user
//! point or a commune polygon. Every transition reverts the previous
//! highlight before applying the next one, so a dangling highlight cannot
//! survive a selection change.
//!
//! The locate marker dropped by coordinate lookups is not part of this
//! state; it has its own single slot in the controller.

use std::fmt;

use super::effect::Effect;

/// The current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing selected.
    #[default]
    Idle,
    /// A user point is selected, by id.
    Point(u64),
    /// A commune is selected, by dataset insertion index.
    Region(usize),
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Point(id) => write!(f, "point #{}", id),
            Self::Region(index) => write!(f, "region [{}]", index),
        }
    }
}

/// Owns the selection state and produces highlight/revert effects.
#[derive(Debug, Default)]
pub struct SelectionMachine {
    state: SelectionState,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Select a user point. The previous highlight, if any, is reverted
    /// unconditionally first.
    pub fn select_point(&mut self, id: u64) -> Vec<Effect> {
        let mut effects = self.revert_effects();
        self.state = SelectionState::Point(id);
        effects.push(Effect::HighlightPoint(id));
        effects.push(Effect::SelectionChanged(self.state));
        effects
    }

    /// Select a commune by insertion index, with the same revert-first rule.
    pub fn select_region(&mut self, index: usize) -> Vec<Effect> {
        let mut effects = self.revert_effects();
        self.state = SelectionState::Region(index);
        effects.push(Effect::HighlightRegion(index));
        effects.push(Effect::SelectionChanged(self.state));
        effects
    }

    /// Clear the selection, reverting whichever highlight was active.
    /// Clearing an idle machine is a no-op.
    pub fn clear(&mut self) -> Vec<Effect> {
        if self.state == SelectionState::Idle {
            return Vec::new();
        }
        let mut effects = self.revert_effects();
        self.state = SelectionState::Idle;
        effects.push(Effect::SelectionChanged(self.state));
        effects
    }

    /// The revert intent for the active highlight. Region reverts delegate
    /// to the dataset's default style rather than rebuilding it here, so a
    /// runtime restyle of the defaults is restored exactly.
    fn revert_effects(&self) -> Vec<Effect> {
        match self.state {
            SelectionState::Idle => Vec::new(),
            SelectionState::Point(id) => vec![Effect::ResetPointStyle(id)],
            SelectionState::Region(index) => vec![Effect::ResetRegionStyle(index)],
        }
    }
}
