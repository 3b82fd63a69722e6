//! Deliverable export
//!
//! Renders the Lab into the markdown deliverable. Incomplete rows stay in the
//! ledger but are left out here; inventory rows are numbered densely among the
//! rows that are printed.

use super::ai_log::{AiLogField, AiUsageLog};
use super::inventory::InventoryItem;
use super::prioritization::PrioritizationItem;
use super::sipoc::{SipocField, SipocRecord};
use crate::domain::Track;
use crate::error::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional report sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Append a "Decisión Final" section naming the top-scoring process.
    pub decision_section: bool,
}

/// Render the deliverable with the default sections.
pub fn export_report(
    track: Track,
    inventory: &[InventoryItem],
    prioritization: &[PrioritizationItem],
    sipoc: &SipocRecord,
    ai_log: &AiUsageLog,
) -> String {
    render_report(&ReportOptions::default(), track, inventory, prioritization, sipoc, ai_log)
}

/// Render the deliverable.
pub fn render_report(
    options: &ReportOptions,
    track: Track,
    inventory: &[InventoryItem],
    prioritization: &[PrioritizationItem],
    sipoc: &SipocRecord,
    ai_log: &AiUsageLog,
) -> String {
    let mut md = format!("# Entregable MicroDSI · M2-S10 · Track: {}\n\n", track.label());

    md.push_str("## 1) Inventario (L1)\n");
    for (n, item) in inventory.iter().filter(|i| i.is_complete()).enumerate() {
        md.push_str(&format!("{}. {} {}\n", n + 1, item.verb, item.object));
    }

    md.push_str("\n## 2) Priorización (Top 5)\n");
    md.push_str("| Proceso | Impacto | Esfuerzo | Riesgo | Score | Nota |\n");
    md.push_str("| --- | --- | --- | --- | --- | --- |\n");
    for item in prioritization.iter().filter(|p| p.is_complete()) {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            item.name,
            item.impact,
            item.effort,
            item.risk,
            item.score(),
            item.note
        ));
    }

    md.push_str("\n## 3) SIPOC (Proceso Ganador)\n");
    for field in SipocField::ALL {
        md.push_str(&format!("### {}\n{}\n\n", field.heading(), sipoc.field(field)));
    }

    if options.decision_section {
        let winner = top_scoring(prioritization).map_or("N/A", |p| p.name.as_str());
        md.push_str("## Decisión Final\n");
        md.push_str(&format!("- Proceso ganador: {}\n", winner));
        md.push_str("- Criterio 1: Prioridad por impacto\n");
        md.push_str("- Criterio 2: Viabilidad técnica\n");
        md.push_str("- Restricción dominante: PII / Compliance\n");
        md.push_str("- Trade-off: Velocidad vs Calidad de datos\n\n");
    }

    md.push_str("## AI Log\n");
    for field in AiLogField::ALL {
        if let Some(label) = field.report_label() {
            md.push_str(&format!("- {}: {}\n", label, ai_log.field(field)));
        }
    }

    md
}

/// Highest-scoring complete row; the earliest row wins a tie.
pub fn top_scoring(prioritization: &[PrioritizationItem]) -> Option<&PrioritizationItem> {
    prioritization
        .iter()
        .filter(|p| p.is_complete())
        .fold(None, |best: Option<&PrioritizationItem>, item| match best {
            Some(b) if b.score() >= item.score() => Some(b),
            _ => Some(item),
        })
}

/// Write a rendered deliverable as `entregable-microdsi-<track>.md` under `dir`.
pub fn write_deliverable(dir: &Path, track: Track, markdown: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(track.export_filename());
    fs::write(&path, markdown)?;
    info!("Wrote {} ({} bytes)", path.display(), markdown.len());
    Ok(path)
}
