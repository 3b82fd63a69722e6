//! Process inventory rows (L1: verb + object).

use crate::id::generate_item_id;
use serde::{Deserialize, Serialize};

/// One candidate process definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Stable for the row's lifetime
    pub id: String,
    /// Action verb, e.g. "Validar"
    #[serde(default)]
    pub verb: String,
    /// Object acted upon, e.g. "Factura"
    #[serde(default)]
    pub object: String,
}

impl InventoryItem {
    /// Create an empty row with a fresh id.
    pub fn new() -> Self {
        Self {
            id: generate_item_id(),
            verb: String::new(),
            object: String::new(),
        }
    }

    /// Create a filled row with a fresh id.
    pub fn with_text(verb: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            id: generate_item_id(),
            verb: verb.into(),
            object: object.into(),
        }
    }

    /// Both halves present; only complete rows are exported.
    pub fn is_complete(&self) -> bool {
        !self.verb.is_empty() && !self.object.is_empty()
    }

    /// Read a field by name.
    pub fn field(&self, field: InventoryField) -> &str {
        match field {
            InventoryField::Verb => &self.verb,
            InventoryField::Object => &self.object,
        }
    }

    pub(crate) fn set(&mut self, field: InventoryField, value: String) {
        match field {
            InventoryField::Verb => self.verb = value,
            InventoryField::Object => self.object = value,
        }
    }
}

impl Default for InventoryItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Editable fields of an [`InventoryItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryField {
    Verb,
    Object,
}

impl InventoryField {
    pub const ALL: [InventoryField; 2] = [InventoryField::Verb, InventoryField::Object];

    pub fn label(self) -> &'static str {
        match self {
            InventoryField::Verb => "Verbo",
            InventoryField::Object => "Objeto",
        }
    }

    /// Input placeholder shown when the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            InventoryField::Verb => "Verbo (ej. Validar)",
            InventoryField::Object => "Objeto (ej. Factura)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_empty() {
        let item = InventoryItem::new();
        assert!(item.verb.is_empty());
        assert!(item.object.is_empty());
        assert!(!item.is_complete());
    }

    #[test]
    fn test_completeness_needs_both_halves() {
        let mut item = InventoryItem::with_text("Validar", "");
        assert!(!item.is_complete());
        item.set(InventoryField::Object, "Factura".to_string());
        assert!(item.is_complete());
        assert_eq!(item.field(InventoryField::Object), "Factura");
    }

    #[test]
    fn test_new_items_get_distinct_ids() {
        let a = InventoryItem::new();
        let b = InventoryItem::new();
        assert_ne!(a.id, b.id);
    }
}
