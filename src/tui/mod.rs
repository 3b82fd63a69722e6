//! Terminal User Interface for MicroDSI.
//!
//! Four views share one track selection:
//! - **Inicio**: course pitch and track choice
//! - **Feed**: lesson cards with per-track examples
//! - **Pistas**: guided questions, answers persisted in the cache
//! - **Lab**: the ledger form and deliverable export

mod app;
mod events;
mod input;
mod runner;
mod state;
mod views;

pub use app::{App, AppConfig};
pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
pub use state::{AppState, InteractionMode, LabSlot, PendingAction, View};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enable raw mode and switch to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

/// Undo `init_terminal`.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

pub mod colors {
    use ratatui::style::Color;

    pub const ACCENT: Color = Color::Rgb(255, 215, 0); // Gold
    pub const SELECTED: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const MARKED: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const SCORE_POS: Color = Color::Rgb(50, 205, 50);
    pub const SCORE_NEG: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255);
    pub const HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 60);
    pub const DIM: Color = Color::DarkGray;
}
