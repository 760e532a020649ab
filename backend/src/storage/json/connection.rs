use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::kv_repository::KvRepository;
use crate::storage::traits::Connection;

/// Environment variable overriding the default data directory
pub const DATA_DIR_ENV: &str = "FINANCE_INSIGHTS_DATA_DIR";

/// JsonConnection manages the data directory the key files live in
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory
    /// (`~/Documents/Finance Insights`, unless overridden by environment)
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            info!("Using data directory from {}: {}", DATA_DIR_ENV, dir);
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Finance Insights");

        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// The directory key files are stored in
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

impl Connection for JsonConnection {
    type KeyValueRepository = KvRepository;

    fn create_key_value_repository(&self) -> KvRepository {
        KvRepository::new(self.clone())
    }
}
