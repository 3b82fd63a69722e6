//! Lab Ledger
//!
//! The in-session collection a learner fills in the Lab: a process inventory,
//! prioritization scores, a SIPOC for the winning process and an AI usage log.
//!
//! Every operation is total. Edits addressed to an unknown id are ignored, and
//! removing the last row of a list is refused silently: both lists always hold
//! at least one row. Row order is insertion order and is never re-sorted.

pub mod ai_log;
pub mod document;
pub mod export;
pub mod inventory;
pub mod prioritization;
pub mod sipoc;

pub use ai_log::{AiLogField, AiUsageLog};
pub use document::LabDocument;
pub use export::{ReportOptions, export_report, render_report, write_deliverable};
pub use inventory::{InventoryField, InventoryItem};
pub use prioritization::{PrioritizationItem, PrioritizationUpdate, Rating, RatingAxis};
pub use sipoc::{SipocField, SipocRecord};

use crate::domain::Track;
use log::debug;

/// Records addressed by an opaque id.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for PrioritizationItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Remove the row with `id` unless it is the only row left.
fn remove_keeping_one<T: HasId>(items: &mut Vec<T>, id: &str) -> bool {
    if items.len() <= 1 {
        return false;
    }
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

fn find_mut<'a, T: HasId>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// The Lab's editable state.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    inventory: Vec<InventoryItem>,
    prioritization: Vec<PrioritizationItem>,
    sipoc: SipocRecord,
    ai_log: AiUsageLog,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// A fresh ledger: one empty row in each list, empty singletons.
    pub fn new() -> Self {
        Self {
            inventory: vec![InventoryItem::new()],
            prioritization: vec![PrioritizationItem::new()],
            sipoc: SipocRecord::default(),
            ai_log: AiUsageLog::default(),
        }
    }

    /// Assemble a ledger from loaded parts. Empty lists get one default row.
    pub fn from_parts(
        mut inventory: Vec<InventoryItem>,
        mut prioritization: Vec<PrioritizationItem>,
        sipoc: SipocRecord,
        ai_log: AiUsageLog,
    ) -> Self {
        if inventory.is_empty() {
            inventory.push(InventoryItem::new());
        }
        if prioritization.is_empty() {
            prioritization.push(PrioritizationItem::new());
        }
        Self {
            inventory,
            prioritization,
            sipoc,
            ai_log,
        }
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn prioritization(&self) -> &[PrioritizationItem] {
        &self.prioritization
    }

    pub fn sipoc(&self) -> &SipocRecord {
        &self.sipoc
    }

    pub fn ai_log(&self) -> &AiUsageLog {
        &self.ai_log
    }

    // --- inventory ---

    /// Append an empty row and return its id.
    pub fn add_inventory_item(&mut self) -> String {
        let item = InventoryItem::new();
        let id = item.id.clone();
        debug!("Adding inventory item {}", id);
        self.inventory.push(item);
        id
    }

    /// Overwrite one field of the row with `id`. Returns false if no such row.
    pub fn update_inventory_field(&mut self, id: &str, field: InventoryField, value: impl Into<String>) -> bool {
        match find_mut(&mut self.inventory, id) {
            Some(item) => {
                item.set(field, value.into());
                true
            }
            None => false,
        }
    }

    /// Remove the row with `id`. Refused when it is the last row.
    pub fn remove_inventory_item(&mut self, id: &str) -> bool {
        let removed = remove_keeping_one(&mut self.inventory, id);
        debug!("Remove inventory item {}: {}", id, removed);
        removed
    }

    // --- prioritization ---

    /// Append a row with the 3/3/3 defaults and return its id.
    pub fn add_prioritization_item(&mut self) -> String {
        let item = PrioritizationItem::new();
        let id = item.id.clone();
        debug!("Adding prioritization item {}", id);
        self.prioritization.push(item);
        id
    }

    /// Apply a single-field edit to the row with `id`.
    ///
    /// Ratings arrive already clamped by [`Rating`]'s constructors.
    pub fn update_prioritization(&mut self, id: &str, update: PrioritizationUpdate) -> bool {
        match find_mut(&mut self.prioritization, id) {
            Some(item) => {
                item.apply(update);
                true
            }
            None => false,
        }
    }

    /// Remove the row with `id`. Refused when it is the last row.
    pub fn remove_prioritization_item(&mut self, id: &str) -> bool {
        let removed = remove_keeping_one(&mut self.prioritization, id);
        debug!("Remove prioritization item {}: {}", id, removed);
        removed
    }

    // --- singletons ---

    pub fn set_sipoc_field(&mut self, field: SipocField, value: impl Into<String>) {
        self.sipoc.set(field, value.into());
    }

    pub fn set_ai_log_field(&mut self, field: AiLogField, value: impl Into<String>) {
        self.ai_log.set(field, value.into());
    }

    /// Render the current state as the deliverable text. Does not mutate.
    pub fn export(&self, track: Track, options: &ReportOptions) -> String {
        render_report(
            options,
            track,
            &self.inventory,
            &self.prioritization,
            &self.sipoc,
            &self.ai_log,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_has_one_row_each() {
        let ledger = Ledger::new();
        assert_eq!(ledger.inventory().len(), 1);
        assert_eq!(ledger.prioritization().len(), 1);
        assert_eq!(ledger.ai_log().model, ai_log::DEFAULT_MODEL);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut ledger = Ledger::new();
        let first = ledger.inventory()[0].id.clone();
        let second = ledger.add_inventory_item();
        let third = ledger.add_inventory_item();
        let ids: Vec<&str> = ledger.inventory().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec![first.as_str(), second.as_str(), third.as_str()]);
    }

    #[test]
    fn test_remove_last_inventory_item_refused() {
        let mut ledger = Ledger::new();
        let only = ledger.inventory()[0].id.clone();
        assert!(!ledger.remove_inventory_item(&only));
        assert_eq!(ledger.inventory().len(), 1);
        assert_eq!(ledger.inventory()[0].id, only);
    }

    #[test]
    fn test_remove_inventory_item() {
        let mut ledger = Ledger::new();
        let first = ledger.inventory()[0].id.clone();
        let second = ledger.add_inventory_item();
        assert!(ledger.remove_inventory_item(&first));
        assert_eq!(ledger.inventory().len(), 1);
        assert_eq!(ledger.inventory()[0].id, second);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = Ledger::new();
        ledger.add_inventory_item();
        ledger.add_prioritization_item();
        let before = ledger.clone();
        assert!(!ledger.remove_inventory_item("missing"));
        assert!(!ledger.remove_prioritization_item("missing"));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_floor_of_one_under_any_sequence() {
        let mut ledger = Ledger::new();
        for round in 0..20 {
            if round % 3 == 0 {
                ledger.add_inventory_item();
            }
            let ids: Vec<String> = ledger.inventory().iter().map(|i| i.id.clone()).collect();
            for id in ids {
                ledger.remove_inventory_item(&id);
                assert!(!ledger.inventory().is_empty());
            }
        }
        assert_eq!(ledger.inventory().len(), 1);
    }

    #[test]
    fn test_update_inventory_field_is_targeted() {
        let mut ledger = Ledger::new();
        let first = ledger.inventory()[0].id.clone();
        let second = ledger.add_inventory_item();
        assert!(ledger.update_inventory_field(&second, InventoryField::Verb, "Aprobar"));
        assert_eq!(ledger.inventory()[1].verb, "Aprobar");
        assert!(ledger.inventory()[1].object.is_empty());
        assert!(ledger.inventory()[0].verb.is_empty());
        assert_eq!(ledger.inventory()[0].id, first);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut ledger = Ledger::new();
        let before = ledger.clone();
        assert!(!ledger.update_inventory_field("missing", InventoryField::Object, "Factura"));
        assert!(!ledger.update_prioritization("missing", PrioritizationUpdate::Name("X".into())));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_remove_last_prioritization_item_refused() {
        let mut ledger = Ledger::new();
        let only = ledger.prioritization()[0].id.clone();
        ledger.update_prioritization(&only, PrioritizationUpdate::Name("Triage".into()));
        assert!(!ledger.remove_prioritization_item(&only));
        assert_eq!(ledger.prioritization().len(), 1);
        assert_eq!(ledger.prioritization()[0].name, "Triage");
    }

    #[test]
    fn test_update_prioritization_rating() {
        let mut ledger = Ledger::new();
        let id = ledger.add_prioritization_item();
        ledger.update_prioritization(&id, PrioritizationUpdate::Impact(Rating::clamped(5)));
        ledger.update_prioritization(&id, PrioritizationUpdate::Effort(Rating::clamped(2)));
        ledger.update_prioritization(&id, PrioritizationUpdate::Risk(Rating::clamped(1)));
        assert_eq!(ledger.prioritization()[1].score(), 2);
        assert_eq!(ledger.prioritization()[0].score(), -3);
    }

    #[test]
    fn test_singleton_setters() {
        let mut ledger = Ledger::new();
        ledger.set_sipoc_field(SipocField::Suppliers, "Usuarios");
        ledger.set_ai_log_field(AiLogField::Objective, "Clasificar tickets");
        assert_eq!(ledger.sipoc().suppliers, "Usuarios");
        assert_eq!(ledger.ai_log().objective, "Clasificar tickets");
    }

    #[test]
    fn test_from_parts_restores_floor() {
        let ledger = Ledger::from_parts(vec![], vec![], SipocRecord::default(), AiUsageLog::default());
        assert_eq!(ledger.inventory().len(), 1);
        assert_eq!(ledger.prioritization().len(), 1);
    }

    #[test]
    fn test_export_does_not_mutate() {
        let mut ledger = Ledger::new();
        let id = ledger.inventory()[0].id.clone();
        ledger.update_inventory_field(&id, InventoryField::Verb, "Validar");
        let before = ledger.clone();
        let a = ledger.export(Track::Hr, &ReportOptions::default());
        let b = ledger.export(Track::Hr, &ReportOptions::default());
        assert_eq!(a, b);
        assert_eq!(ledger, before);
    }
}
