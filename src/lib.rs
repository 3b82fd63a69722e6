//! MicroDSI - micro-learning for process identification
//!
//! Learners read lesson cards, answer guided questions for their track and
//! fill in the Lab: a process inventory, prioritization scores, a SIPOC and
//! an AI usage log, exported as a markdown deliverable.

pub mod content;
pub mod domain;
pub mod error;
pub mod guide;
pub mod id;
pub mod ledger;
pub mod server;
pub mod storage;
pub mod tui;

pub use error::{MicroDsiError, Result};
