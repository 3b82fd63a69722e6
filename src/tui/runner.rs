//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, event handler and cache. It runs
//! the main loop: render → handle events → process actions → repeat.

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::PendingAction;
use super::views::render;
use crate::ledger::write_deliverable;
use crate::storage::KvStore;
use eyre::Result;
use log::{error, info};

pub struct TuiRunner {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
    store: Box<dyn KvStore>,
}

impl TuiRunner {
    pub fn new(terminal: Tui, app: App, store: Box<dyn KvStore>) -> Self {
        let event_handler = EventHandler::new(app.config().tick_rate_ms);
        Self {
            terminal,
            app,
            event_handler,
            store,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            self.terminal.draw(|f| render(self.app.state(), f))?;

            match self.event_handler.next().await? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                // Ratatui redraws at the new size on the next pass
                Event::Tick | Event::Resize(_, _) => {}
            }

            if let Some(action) = self.app.state_mut().pending_action.take() {
                process_action(&mut self.app, self.store.as_ref(), action);
            }

            if self.app.state().should_quit {
                break;
            }
        }

        // Answers typed just before quitting are not lost
        process_action(&mut self.app, self.store.as_ref(), PendingAction::SaveGuide);
        info!("TUI main loop ended");
        Ok(())
    }
}

/// Carry out a queued side effect and report it in the footer.
///
/// Failures are logged and shown; they never end the session.
pub fn process_action(app: &mut App, store: &dyn KvStore, action: PendingAction) {
    match action {
        PendingAction::Export => {
            let markdown = app.export();
            let dir = app.config().export_dir.clone();
            match write_deliverable(&dir, app.state().track, &markdown) {
                Ok(path) => app.set_status(format!("Entregable exportado: {}", path.display())),
                Err(e) => {
                    error!("Export failed: {}", e);
                    app.set_status(format!("No se pudo exportar: {}", e));
                }
            }
        }
        PendingAction::SaveGuide => {
            if let Err(e) = app.state().guide.save(store) {
                error!("Could not persist guide answers: {}", e);
                app.set_status(format!("No se pudieron guardar las respuestas: {}", e));
            }
        }
    }
}
