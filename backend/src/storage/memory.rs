//! # In-Memory Storage
//!
//! A map-backed implementation of the key-value port. It keeps the domain
//! layer testable without a filesystem and backs the end-to-end tests in the
//! frontend crate.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::traits::{Connection, KeyValueStore};

/// In-memory connection backed by a shared map. Clones share the same data,
/// mirroring how file-backed connections share a directory.
#[derive(Clone, Default)]
pub struct MemoryConnection {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Connection for MemoryConnection {
    type KeyValueRepository = MemoryKvRepository;

    fn create_key_value_repository(&self) -> MemoryKvRepository {
        MemoryKvRepository {
            entries: self.entries.clone(),
        }
    }
}

/// Repository view over a [`MemoryConnection`]'s map
#[derive(Clone)]
pub struct MemoryKvRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryKvRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repositories_from_one_connection_share_data() -> Result<()> {
        let connection = MemoryConnection::new();
        let writer = connection.create_key_value_repository();
        let reader = connection.create_key_value_repository();

        writer.set("currency", "GBP")?;
        assert_eq!(reader.get("currency")?, Some("GBP".to_string()));
        Ok(())
    }

    #[test]
    fn separate_connections_are_isolated() -> Result<()> {
        let first = MemoryConnection::new();
        let second = MemoryConnection::new();

        first.create_key_value_repository().set("currency", "EUR")?;
        assert_eq!(second.create_key_value_repository().get("currency")?, None);
        Ok(())
    }
}
