//! # Backend
//!
//! Domain services and storage for the finance insights desktop app. The
//! frontend talks to this crate directly through synchronous service calls:
//! - settings (saved salary, currency, preferences)
//! - analysis history (durable, append-only record store)
//! - ingestion (submitting a statement to the analysis service)

use anyhow::Result;
use log::info;
use std::sync::Arc;
use std::time::Duration;

pub mod domain;
pub mod statement_api;
pub mod storage;

pub use storage::JsonConnection;

use domain::history_service::HistoryService;
use domain::ingestion_service::IngestionService;
use domain::settings_service::SettingsService;
use statement_api::{
    HttpStatementClient, SimulatedStatementProcessor, StatementProcessor, DEFAULT_ENDPOINT,
};

/// Environment variable overriding the analysis endpoint
pub const ENDPOINT_ENV: &str = "FINANCE_INSIGHTS_ENDPOINT";
/// When set to "1", statements are analyzed by the local simulated processor
pub const SIMULATE_ENV: &str = "FINANCE_INSIGHTS_SIMULATE";

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub settings_service: SettingsService<JsonConnection>,
    pub history_service: HistoryService<JsonConnection>,
    pub ingestion_service: IngestionService<JsonConnection>,
}

impl Backend {
    /// Create a backend over the default data directory and the processor
    /// selected by the environment
    pub fn new() -> Result<Self> {
        let connection = JsonConnection::new_default()?;
        let processor = configured_processor()?;
        Ok(Self::with_parts(connection, processor))
    }

    /// Create a backend over explicit parts
    pub fn with_parts(connection: JsonConnection, processor: Arc<dyn StatementProcessor>) -> Self {
        Self {
            settings_service: SettingsService::new(&connection),
            history_service: HistoryService::new(&connection),
            ingestion_service: IngestionService::new(&connection, processor),
        }
    }
}

fn configured_processor() -> Result<Arc<dyn StatementProcessor>> {
    if std::env::var(SIMULATE_ENV).map(|v| v == "1").unwrap_or(false) {
        info!("Statement analysis runs in simulated mode");
        return Ok(Arc::new(SimulatedStatementProcessor::with_delay(
            Duration::from_millis(1500),
        )));
    }

    let endpoint =
        std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    info!("Statement analysis endpoint: {}", endpoint);
    Ok(Arc::new(HttpStatementClient::new(endpoint)?))
}
