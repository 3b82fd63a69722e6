//! Local key/value persistence.
//!
//! The guided-question flow keeps the selected track and its answers in a
//! small string-keyed cache. Values are JSON encoded at the boundary, and a
//! value that fails to decode is treated as never written.

mod json_file;
mod memory;
mod traits;

pub use json_file::{CACHE_FILE, JsonFileStore};
pub use memory::MemoryStore;
pub use traits::{KvStore, get_json, set_json};
