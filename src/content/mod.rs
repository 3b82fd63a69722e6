//! Static course content: lesson cards and guided questions.
//!
//! Read-only tables compiled into the binary.

mod lessons;
mod questions;

pub use lessons::{LESSONS, Lesson};
pub use questions::{GuideStep, guide_steps};

/// Course badge shown on the home screen
pub const COURSE_BADGE: &str = "MicroDSI · M2-S10 · Febrero 2026";

/// Home screen pitch
pub const COURSE_PITCH: &str = "Desbloquea un proceso candidato: inventario → priorización → SIPOC. \
Avanza por tarjetas, resuelve el caso y genera tu entregable.";
