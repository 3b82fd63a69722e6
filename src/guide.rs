//! Guided question flow ("pistas").
//!
//! A step cursor over the selected track's questions plus one answer per
//! step. The track and answers survive restarts through a [`KvStore`].

use crate::content::{GuideStep, guide_steps};
use crate::domain::Track;
use crate::error::Result;
use crate::storage::{KvStore, get_json, set_json};
use log::{debug, warn};

/// Cache key for the selected track (raw track name)
pub const TRACK_KEY: &str = "microdsi_track";
/// Cache key for the answers (JSON array of strings)
pub const ANSWERS_KEY: &str = "microdsi_answers";

/// Result of advancing past a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next step
    Moved,
    /// Already on the last step; the flow continues in the Lab
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guide {
    track: Track,
    step: usize,
    answers: Vec<String>,
}

impl Guide {
    pub fn new(track: Track) -> Self {
        Self {
            track,
            step: 0,
            answers: vec![String::new(); guide_steps(track).len()],
        }
    }

    /// Restore track and answers from the cache, falling back to defaults.
    pub fn restore<S: KvStore + ?Sized>(store: &S, default_track: Track) -> Self {
        let track = match store.get(TRACK_KEY) {
            Ok(Some(raw)) => raw.parse::<Track>().unwrap_or_else(|e| {
                warn!("Ignoring cached track: {}", e);
                default_track
            }),
            Ok(None) => default_track,
            Err(e) => {
                warn!("Could not read cached track: {}", e);
                default_track
            }
        };
        let mut guide = Self::new(track);
        if let Some(answers) = get_json::<Vec<String>, _>(store, ANSWERS_KEY) {
            // A shorter list than the step count is stale; keep the blank answers.
            if answers.len() >= guide.answers.len() {
                guide.answers = answers;
                guide.answers.truncate(guide_steps(track).len());
            }
        }
        debug!("Restored guide for track {}", track);
        guide
    }

    /// Persist track and answers.
    pub fn save<S: KvStore + ?Sized>(&self, store: &S) -> Result<()> {
        store.set(TRACK_KEY, self.track.as_str())?;
        set_json(store, ANSWERS_KEY, &self.answers)
    }

    pub fn track(&self) -> Track {
        self.track
    }

    /// Switch track. The cursor restarts and answers are resized to the new
    /// track's step count.
    pub fn set_track(&mut self, track: Track) {
        if track == self.track {
            return;
        }
        self.track = track;
        self.step = 0;
        self.answers.resize(guide_steps(track).len(), String::new());
    }

    pub fn steps(&self) -> &'static [GuideStep] {
        guide_steps(self.track)
    }

    /// Zero-based index of the current step
    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> &'static GuideStep {
        &self.steps()[self.step]
    }

    pub fn answer(&self) -> &str {
        self.answers.get(self.step).map_or("", String::as_str)
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn set_answer(&mut self, text: impl Into<String>) {
        if let Some(slot) = self.answers.get_mut(self.step) {
            *slot = text.into();
        }
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 >= self.steps().len()
    }

    pub fn next(&mut self) -> Advance {
        if self.is_last() {
            Advance::Finished
        } else {
            self.step += 1;
            Advance::Moved
        }
    }

    /// Step back; stays put on the first step.
    pub fn prev(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Fraction of the flow reached, counting the current step.
    pub fn progress(&self) -> f64 {
        (self.step + 1) as f64 / self.steps().len() as f64
    }

    pub fn progress_label(&self) -> String {
        format!("Paso {} de {}", self.step + 1, self.steps().len())
    }
}
