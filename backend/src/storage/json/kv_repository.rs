use anyhow::Result;
use log::debug;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::connection::JsonConnection;
use crate::storage::traits::KeyValueStore;

/// File-backed key-value repository. Each key is one file in the connection's
/// base directory; a missing file reads as an absent key.
#[derive(Clone)]
pub struct KvRepository {
    connection: JsonConnection,
}

impl KvRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.connection.base_directory().join(key)
    }
}

impl KeyValueStore for KvRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        // Atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved key {} to {:?}", key, path);
        Ok(())
    }
}
