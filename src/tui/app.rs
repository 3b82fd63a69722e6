//! TUI Application
//!
//! Owns the `AppState` and turns key presses into state changes. Everything
//! here is synchronous and terminal-free; side effects are queued as a
//! `PendingAction` for the runner.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use std::path::PathBuf;

use super::input::{TextInput, is_quit};
use super::state::{AppState, EditTarget, InteractionMode, LabSection, LabSlot, PendingAction, PrioritizationField, View};
use crate::content::LESSONS;
use crate::domain::Track;
use crate::guide::{Advance, Guide};
use crate::ledger::{Ledger, PrioritizationUpdate, ReportOptions};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
    /// Directory exported deliverables are written to
    pub export_dir: PathBuf,
    /// Report layout options
    pub report: ReportOptions,
    /// Track used when nothing was cached
    pub default_track: Track,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            export_dir: PathBuf::from("."),
            report: ReportOptions::default(),
            default_track: Track::default(),
        }
    }
}

/// Main TUI application
pub struct App {
    state: AppState,
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig, guide: Guide) -> Self {
        Self {
            state: AppState::new(guide),
            config,
        }
    }

    /// Create with default config and a blank guide
    pub fn with_defaults() -> Self {
        let config = AppConfig::default();
        let guide = Guide::new(config.default_track);
        Self::new(config, guide)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Request to quit
    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.state.status_message = Some(message.into());
    }

    /// Render the current ledger as the deliverable.
    pub fn export(&self) -> String {
        self.state.ledger.export(self.state.track, &self.config.report)
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match self.state.interaction_mode.clone() {
            InteractionMode::Editing(target) => self.handle_editing_key(key, target),
            InteractionMode::Help => {
                self.state.interaction_mode = InteractionMode::Normal;
            }
            InteractionMode::Normal => {
                if is_quit(&key) {
                    self.quit();
                } else if !self.handle_global_key(key) {
                    match self.state.current_view {
                        View::Home => self.handle_home_key(key),
                        View::Feed => self.handle_feed_key(key),
                        View::Guide => self.handle_guide_key(key),
                        View::Lab => self.handle_lab_key(key),
                    }
                }
            }
        }

        self.state.should_quit
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => self.set_view(self.state.current_view.next()),
            KeyCode::BackTab => self.set_view(self.state.current_view.prev()),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.set_view(View::ALL[index]);
            }
            KeyCode::Char('t') => self.set_track(self.state.track.next()),
            KeyCode::Char('T') => self.set_track(self.state.track.prev()),
            KeyCode::Char('?') => self.state.interaction_mode = InteractionMode::Help,
            _ => return false,
        }
        true
    }

    pub fn set_view(&mut self, view: View) {
        self.state.current_view = view;
        self.state.status_message = None;
    }

    /// Switch track everywhere. Guide answers are persisted.
    pub fn set_track(&mut self, track: Track) {
        if track == self.state.track {
            return;
        }
        debug!("Track changed: {} -> {}", self.state.track, track);
        self.state.track = track;
        self.state.guide.set_track(track);
        self.state.pending_action = Some(PendingAction::SaveGuide);
        self.set_status(format!("Track: {}", track.label()));
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.set_view(View::Feed);
        }
    }

    fn handle_feed_key(&mut self, key: KeyEvent) {
        let count = LESSONS.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.feed_selected = (self.state.feed_selected + 1) % count;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.feed_selected = (self.state.feed_selected + count - 1) % count;
            }
            KeyCode::Char(' ') | KeyCode::Char('m') => self.toggle_feed_mark(self.state.feed_selected),
            KeyCode::Enter => self.set_view(View::Guide),
            _ => {}
        }
    }

    /// Mark or unmark a lesson card. Marks last for the session only.
    pub fn toggle_feed_mark(&mut self, index: usize) {
        if index >= LESSONS.len() {
            return;
        }
        if !self.state.feed_marks.remove(&index) {
            self.state.feed_marks.insert(index);
        }
    }

    fn handle_guide_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => self.guide_next(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => self.state.guide.prev(),
            KeyCode::Enter | KeyCode::Char('i') => {
                self.begin_edit(EditTarget::GuideAnswer, self.state.guide.answer().to_string());
            }
            _ => {}
        }
    }

    /// Advance the guide; past the last step the flow continues in the Lab.
    pub fn guide_next(&mut self) {
        if self.state.guide.next() == Advance::Finished {
            self.set_view(View::Lab);
            self.set_status("Pistas completas: construye tu entregable");
        }
    }

    fn handle_lab_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_lab_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_lab_cursor(-1),
            KeyCode::Left | KeyCode::Char('-') => self.adjust_rating(false),
            KeyCode::Right | KeyCode::Char('+') => self.adjust_rating(true),
            KeyCode::Enter | KeyCode::Char('i') => {
                if let Some(slot) = self.state.focused_slot().filter(LabSlot::is_text) {
                    let value = slot_value(&self.state.ledger, &slot);
                    self.begin_edit(EditTarget::Lab(slot), value);
                }
            }
            KeyCode::Char('a') => self.add_row(),
            KeyCode::Char('d') => self.remove_row(),
            KeyCode::Char('e') => self.state.pending_action = Some(PendingAction::Export),
            _ => {}
        }
    }

    fn move_lab_cursor(&mut self, delta: isize) {
        let count = self.state.lab_slots().len();
        if count == 0 {
            return;
        }
        let next = self.state.lab_cursor as isize + delta;
        self.state.lab_cursor = next.clamp(0, count as isize - 1) as usize;
    }

    fn adjust_rating(&mut self, up: bool) {
        let Some(LabSlot::Prioritization {
            id,
            field: PrioritizationField::Rating(axis),
        }) = self.state.focused_slot()
        else {
            return;
        };
        let Some(current) = self
            .state
            .ledger
            .prioritization()
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.rating(axis))
        else {
            return;
        };
        let rating = if up { current.increment() } else { current.decrement() };
        self.state.ledger.update_prioritization(&id, axis.update(rating));
    }

    /// Append a row to the focused list and move the cursor onto it.
    fn add_row(&mut self) {
        let section = self.state.focused_slot().map(|slot| slot.section());
        let id = match section {
            Some(LabSection::Inventory) => self.state.ledger.add_inventory_item(),
            Some(LabSection::Prioritization) => self.state.ledger.add_prioritization_item(),
            _ => return,
        };
        if let Some(pos) = self.state.lab_slots().iter().position(|s| s.row_id() == Some(id.as_str())) {
            self.state.lab_cursor = pos;
        }
    }

    /// Remove the focused row. The last row of a list stays.
    fn remove_row(&mut self) {
        let Some(slot) = self.state.focused_slot() else {
            return;
        };
        let removed = match &slot {
            LabSlot::Inventory { id, .. } => self.state.ledger.remove_inventory_item(id),
            LabSlot::Prioritization { id, .. } => self.state.ledger.remove_prioritization_item(id),
            _ => return,
        };
        if !removed {
            return;
        }
        // Land on the first slot of the same section.
        let section = slot.section();
        let slots = self.state.lab_slots();
        self.state.lab_cursor = slots
            .iter()
            .position(|s| s.section() == section)
            .unwrap_or(0)
            .min(slots.len().saturating_sub(1));
    }

    fn begin_edit(&mut self, target: EditTarget, value: String) {
        self.state.editor = TextInput::with_content(&value);
        self.state.interaction_mode = InteractionMode::Editing(target);
    }

    fn handle_editing_key(&mut self, key: KeyEvent, target: EditTarget) {
        match key.code {
            KeyCode::Esc => {
                self.state.editor.take();
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Enter => {
                let value = self.state.editor.take();
                self.state.interaction_mode = InteractionMode::Normal;
                self.commit(target, value);
            }
            _ => {
                self.state.editor.handle_key(&key);
            }
        }
    }

    fn commit(&mut self, target: EditTarget, value: String) {
        match target {
            EditTarget::GuideAnswer => {
                self.state.guide.set_answer(value);
                self.state.pending_action = Some(PendingAction::SaveGuide);
            }
            EditTarget::Lab(slot) => write_slot(&mut self.state.ledger, &slot, value),
        }
    }
}

/// Current text of a Lab slot; ratings render as their number.
pub fn slot_value(ledger: &Ledger, slot: &LabSlot) -> String {
    match slot {
        LabSlot::Inventory { id, field } => ledger
            .inventory()
            .iter()
            .find(|item| &item.id == id)
            .map(|item| item.field(*field).to_string())
            .unwrap_or_default(),
        LabSlot::Prioritization { id, field } => ledger
            .prioritization()
            .iter()
            .find(|item| &item.id == id)
            .map(|item| match field {
                PrioritizationField::Name => item.name.clone(),
                PrioritizationField::Rating(axis) => item.rating(*axis).to_string(),
                PrioritizationField::Note => item.note.clone(),
            })
            .unwrap_or_default(),
        LabSlot::Sipoc(field) => ledger.sipoc().field(*field).to_string(),
        LabSlot::AiLog(field) => ledger.ai_log().field(*field).to_string(),
    }
}

fn write_slot(ledger: &mut Ledger, slot: &LabSlot, value: String) {
    match slot {
        LabSlot::Inventory { id, field } => {
            ledger.update_inventory_field(id, *field, value);
        }
        LabSlot::Prioritization { id, field } => {
            let update = match field {
                PrioritizationField::Name => PrioritizationUpdate::Name(value),
                PrioritizationField::Note => PrioritizationUpdate::Note(value),
                PrioritizationField::Rating(_) => return,
            };
            ledger.update_prioritization(id, update);
        }
        LabSlot::Sipoc(field) => ledger.set_sipoc_field(*field, value),
        LabSlot::AiLog(field) => ledger.set_ai_log_field(*field, value),
    }
}
