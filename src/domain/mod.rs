//! Domain types for MicroDSI
//!
//! Session-wide selectors shared by every view. The Lab's records live in
//! [`crate::ledger`].

pub mod track;

pub use track::Track;
