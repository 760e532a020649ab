//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

/// Trait defining the interface for string key-value storage operations
///
/// This is the single small port the domain layer persists through. It
/// abstracts away the specific storage implementation details, allowing the
/// domain layer to work with different backends (JSON files on disk, an
/// in-memory map in tests) without modification.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Trait for creating repository instances against a concrete storage backend
pub trait Connection: Send + Sync + Clone {
    /// The type of KeyValueStore this connection creates
    type KeyValueRepository: KeyValueStore + Clone;

    /// Create a new key-value repository for this connection
    fn create_key_value_repository(&self) -> Self::KeyValueRepository;
}
