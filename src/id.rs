//! ID generation utilities for MicroDSI
//!
//! Ledger records need ids that never collide within a session. A millisecond
//! timestamp alone repeats when two rows are added in the same tick, so the
//! timestamp is paired with a process-wide counter.

use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Generate a unique record ID
///
/// Format: `{timestamp_ms}-{sequence:04}`
/// Example: `1738300800123-0007`
pub fn generate_item_id() -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{:04}", now_ms(), seq)
}
