//! Terminal events.
//!
//! Crossterm input is polled on the blocking pool so the tokio runtime stays
//! free; an empty poll window becomes a `Tick`.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press (releases and repeats are dropped)
    Key(KeyEvent),
    /// Poll window elapsed
    Tick,
    Resize(u16, u16),
}

impl Event {
    /// Map a raw crossterm event onto what the app consumes.
    pub fn from_crossterm(raw: CrosstermEvent) -> Self {
        match raw {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        }
    }
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Wait up to one tick for the next event.
    pub async fn next(&self) -> Result<Event> {
        let tick_rate = self.tick_rate;
        let event = tokio::task::spawn_blocking(move || -> Result<Event> {
            if event::poll(tick_rate)? {
                Ok(Event::from_crossterm(event::read()?))
            } else {
                Ok(Event::Tick)
            }
        })
        .await??;
        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key_with_kind(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_event_handler_tick_rate() {
        assert_eq!(EventHandler::new(100).tick_rate(), Duration::from_millis(100));
        assert_eq!(EventHandler::default().tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_press_becomes_key() {
        let key = key_with_kind(KeyEventKind::Press);
        assert_eq!(Event::from_crossterm(CrosstermEvent::Key(key)), Event::Key(key));
    }

    #[test]
    fn test_release_becomes_tick() {
        let key = key_with_kind(KeyEventKind::Release);
        assert_eq!(Event::from_crossterm(CrosstermEvent::Key(key)), Event::Tick);
    }

    #[test]
    fn test_resize_passes_through() {
        assert_eq!(
            Event::from_crossterm(CrosstermEvent::Resize(80, 24)),
            Event::Resize(80, 24)
        );
        assert_eq!(Event::from_crossterm(CrosstermEvent::FocusGained), Event::Tick);
    }
}
