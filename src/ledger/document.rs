//! YAML description of a filled-in Lab, for headless export.
//!
//! ```yaml
//! inventory:
//!   - { verb: Validar, object: Factura }
//! prioritization:
//!   - { name: Triage, impact: 5, effort: 2, risk: 1, note: urgente }
//! sipoc:
//!   suppliers: Usuarios
//! ai_log:
//!   objective: Clasificar tickets
//! ```

use super::Ledger;
use super::ai_log::AiUsageLog;
use super::inventory::InventoryItem;
use super::prioritization::{PrioritizationItem, PrioritizationUpdate, Rating};
use super::sipoc::SipocRecord;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabDocument {
    pub inventory: Vec<InventoryRow>,
    pub prioritization: Vec<PrioritizationRow>,
    pub sipoc: SipocRecord,
    pub ai_log: AiUsageLog,
}

/// Inventory row without an id; ids are assigned on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryRow {
    pub verb: String,
    pub object: String,
}

/// Prioritization row without an id. Ratings are clamped into 1..=5.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrioritizationRow {
    pub name: String,
    pub impact: Rating,
    pub effort: Rating,
    pub risk: Rating,
    pub note: String,
}

impl LabDocument {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Build a ledger, assigning fresh ids in document order.
    pub fn into_ledger(self) -> Ledger {
        let inventory = self
            .inventory
            .into_iter()
            .map(|row| InventoryItem::with_text(row.verb, row.object))
            .collect();
        let prioritization = self
            .prioritization
            .into_iter()
            .map(|row| {
                let mut item = PrioritizationItem::new();
                item.apply(PrioritizationUpdate::Name(row.name));
                item.apply(PrioritizationUpdate::Impact(row.impact));
                item.apply(PrioritizationUpdate::Effort(row.effort));
                item.apply(PrioritizationUpdate::Risk(row.risk));
                item.apply(PrioritizationUpdate::Note(row.note));
                item
            })
            .collect();
        Ledger::from_parts(inventory, prioritization, self.sipoc, self.ai_log)
    }
}
