//! # Storage Module
//!
//! Storage backends for the finance insights app. The domain layer only sees
//! the small key-value port in [`traits`]; the concrete backends are a
//! file-per-key JSON store for the desktop app and an in-memory map used by
//! tests and alternate wiring.

pub mod json;
pub mod memory;
pub mod traits;

pub use json::JsonConnection;
pub use memory::MemoryConnection;
pub use traits::{Connection, KeyValueStore};
