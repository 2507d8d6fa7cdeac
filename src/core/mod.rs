//! Core utilities shared across the application
//!
//! - `storage`: flat JSON snapshot layout and read/write helpers

pub mod storage;

// Re-export commonly used items for convenience
pub use storage::{load_json, save_json, write_string, Platform};
