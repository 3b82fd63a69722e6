//! Application state for the TUI.
//!
//! This module defines the core state types that drive the TUI:
//! - `AppState`: the single root state object (track, ledger, guide, views)
//! - `View`: which screen is currently active
//! - `InteractionMode`: navigation, text editing or help overlay
//! - `LabSlot`: one focusable field of the Lab form

use std::collections::BTreeSet;

use super::input::TextInput;
use crate::domain::Track;
use crate::guide::Guide;
use crate::ledger::{AiLogField, InventoryField, Ledger, RatingAxis, SipocField};

/// The primary application state.
///
/// Owned by `App`; the runner is its only writer. Views get `&AppState`.
#[derive(Debug)]
pub struct AppState {
    /// Currently active view
    pub current_view: View,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,

    /// Selected track, shared by every view
    pub track: Track,

    // Feed state
    /// Highlighted lesson card
    pub feed_selected: usize,
    /// Cards the learner marked this session
    pub feed_marks: BTreeSet<usize>,

    // Guide state
    pub guide: Guide,

    // Lab state
    pub ledger: Ledger,
    /// Index into `lab_slots(&ledger)`
    pub lab_cursor: usize,

    /// Buffer for the field being edited
    pub editor: TextInput,

    /// One-line feedback shown in the footer
    pub status_message: Option<String>,

    // Pending actions (processed by runner)
    pub pending_action: Option<PendingAction>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    /// Fresh state around a restored guide. The guide decides the track.
    pub fn new(guide: Guide) -> Self {
        Self {
            current_view: View::default(),
            interaction_mode: InteractionMode::default(),
            track: guide.track(),
            feed_selected: 0,
            feed_marks: BTreeSet::new(),
            guide,
            ledger: Ledger::new(),
            lab_cursor: 0,
            editor: TextInput::new(),
            status_message: None,
            pending_action: None,
            should_quit: false,
        }
    }

    /// The Lab form flattened into focus order.
    pub fn lab_slots(&self) -> Vec<LabSlot> {
        lab_slots(&self.ledger)
    }

    /// The slot under the Lab cursor.
    pub fn focused_slot(&self) -> Option<LabSlot> {
        self.lab_slots().into_iter().nth(self.lab_cursor)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.interaction_mode, InteractionMode::Editing(_))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Guide::new(Track::default()))
    }
}

/// Which view is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    /// Lesson cards
    Feed,
    /// Guided questions ("pistas")
    Guide,
    /// Deliverable workshop
    Lab,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Feed, View::Guide, View::Lab];

    pub fn next(self) -> Self {
        match self {
            View::Home => View::Feed,
            View::Feed => View::Guide,
            View::Guide => View::Lab,
            View::Lab => View::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            View::Home => View::Lab,
            View::Feed => View::Home,
            View::Guide => View::Feed,
            View::Lab => View::Guide,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Home => "Inicio",
            View::Feed => "Feed",
            View::Guide => "Pistas",
            View::Lab => "Lab",
        }
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation
    #[default]
    Normal,
    /// Typing into a field
    Editing(EditTarget),
    /// Help overlay visible
    Help,
}

/// What the editor buffer will be written to on commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// Current guide step's answer
    GuideAnswer,
    /// A text slot of the Lab form
    Lab(LabSlot),
}

/// Text fields of a prioritization row; ratings are adjusted, not typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrioritizationField {
    Name,
    Rating(RatingAxis),
    Note,
}

/// One focusable field of the Lab form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabSlot {
    Inventory { id: String, field: InventoryField },
    Prioritization { id: String, field: PrioritizationField },
    Sipoc(SipocField),
    AiLog(AiLogField),
}

impl LabSlot {
    /// Ratings take left/right; everything else is typed.
    pub fn is_text(&self) -> bool {
        !matches!(
            self,
            LabSlot::Prioritization {
                field: PrioritizationField::Rating(_),
                ..
            }
        )
    }

    pub fn section(&self) -> LabSection {
        match self {
            LabSlot::Inventory { .. } => LabSection::Inventory,
            LabSlot::Prioritization { .. } => LabSection::Prioritization,
            LabSlot::Sipoc(_) => LabSection::Sipoc,
            LabSlot::AiLog(_) => LabSection::AiLog,
        }
    }

    /// Row id for list sections
    pub fn row_id(&self) -> Option<&str> {
        match self {
            LabSlot::Inventory { id, .. } | LabSlot::Prioritization { id, .. } => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabSection {
    Inventory,
    Prioritization,
    Sipoc,
    AiLog,
}

/// Flatten the Lab form into focus order.
pub fn lab_slots(ledger: &Ledger) -> Vec<LabSlot> {
    let mut slots = Vec::new();
    for item in ledger.inventory() {
        for field in InventoryField::ALL {
            slots.push(LabSlot::Inventory {
                id: item.id.clone(),
                field,
            });
        }
    }
    for item in ledger.prioritization() {
        let fields = std::iter::once(PrioritizationField::Name)
            .chain(RatingAxis::ALL.into_iter().map(PrioritizationField::Rating))
            .chain(std::iter::once(PrioritizationField::Note));
        for field in fields {
            slots.push(LabSlot::Prioritization {
                id: item.id.clone(),
                field,
            });
        }
    }
    slots.extend(SipocField::ALL.into_iter().map(LabSlot::Sipoc));
    slots.extend(AiLogField::ALL.into_iter().map(LabSlot::AiLog));
    slots
}

/// Work the runner does outside the pure state update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Write the deliverable file
    Export,
    /// Persist track and guide answers
    SaveGuide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cycle() {
        for view in View::ALL {
            assert_eq!(view.next().prev(), view);
        }
        assert_eq!(View::Lab.next(), View::Home);
    }

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Home);
        assert_eq!(state.interaction_mode, InteractionMode::Normal);
        assert_eq!(state.track, Track::Itsm);
        assert!(state.feed_marks.is_empty());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_state_takes_track_from_guide() {
        let state = AppState::new(Guide::new(Track::Proc));
        assert_eq!(state.track, Track::Proc);
    }

    #[test]
    fn test_lab_slots_fresh_ledger() {
        let ledger = Ledger::new();
        let slots = lab_slots(&ledger);
        // 2 inventory + 5 prioritization + 5 sipoc + 6 ai log
        assert_eq!(slots.len(), 18);
        assert_eq!(slots[0].section(), LabSection::Inventory);
        assert_eq!(slots[2].section(), LabSection::Prioritization);
        assert!(!slots[3].is_text());
        assert_eq!(slots[7], LabSlot::Sipoc(SipocField::Suppliers));
        assert_eq!(slots[17], LabSlot::AiLog(AiLogField::Verification));
    }

    #[test]
    fn test_lab_slots_follow_rows() {
        let mut ledger = Ledger::new();
        let id = ledger.add_inventory_item();
        let slots = lab_slots(&ledger);
        assert_eq!(slots.len(), 20);
        assert_eq!(slots[2].row_id(), Some(id.as_str()));
        assert_eq!(slots[10].row_id(), None);
    }
}
