//! Analysis history service.
//!
//! Persists the ordered, append-only list of analysis records as a single
//! JSON blob under one storage key. Records are never edited or deleted;
//! the most recently appended record is the one shown by default.

use anyhow::Result;
use chrono::Utc;
use log::{debug, warn};
use shared::AnalysisRecord;
use thiserror::Error;

use crate::storage::traits::{Connection, KeyValueStore};

/// Durable-storage key holding the serialized history
pub const HISTORY_KEY: &str = "financialAnalysesHistory";

/// Prefix of every record id
const RECORD_ID_PREFIX: &str = "analysis::";

/// Errors surfaced by history lookups
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("No analysis found at position {index} (history has {len} entries)")]
    RecordNotFound { index: usize, len: usize },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Service persisting the ordered history of analysis records
#[derive(Clone)]
pub struct HistoryService<C: Connection> {
    repository: C::KeyValueRepository,
}

impl<C: Connection> HistoryService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            repository: connection.create_key_value_repository(),
        }
    }

    /// Load the persisted history, oldest first.
    ///
    /// A blob that fails to parse degrades to an empty history with a logged
    /// warning and is never surfaced to the caller. Storage read errors still
    /// propagate, so a transient failure cannot make `append` discard
    /// existing entries.
    pub fn load(&self) -> Result<Vec<AnalysisRecord>> {
        let Some(blob) = self.repository.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&blob) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("Stored analysis history failed to parse, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Append a record and persist the full sequence back
    pub fn append(&self, record: AnalysisRecord) -> Result<()> {
        let mut records = self.load()?;
        debug!(
            "Appending analysis {} to history of {} entries",
            record.id,
            records.len()
        );
        records.push(record);

        let blob = serde_json::to_string(&records)?;
        self.repository.set(HISTORY_KEY, &blob)
    }

    /// Bounds-checked lookup by position (0 = oldest)
    pub fn get_record(&self, index: usize) -> Result<AnalysisRecord, HistoryError> {
        let records = self.load()?;
        let len = records.len();
        records
            .into_iter()
            .nth(index)
            .ok_or(HistoryError::RecordNotFound { index, len })
    }

    /// Allocate the next record id. Ids are creation-time-derived and
    /// strictly increasing, so back-to-back ingestions within the same
    /// millisecond still get unique ids.
    pub fn next_record_id(existing: &[AnalysisRecord]) -> String {
        let now = Utc::now().timestamp_millis();
        let last = existing
            .last()
            .and_then(|record| record.id.strip_prefix(RECORD_ID_PREFIX))
            .and_then(|millis| millis.parse::<i64>().ok())
            .unwrap_or(0);

        format!("{}{}", RECORD_ID_PREFIX, now.max(last + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryConnection;
    use shared::FinancialSummary;

    fn record(id: &str) -> AnalysisRecord {
        AnalysisRecord {
            id: id.to_string(),
            timestamp: "2025-07-15T10:30:00+00:00".to_string(),
            currency: "NGN".to_string(),
            summary: FinancialSummary::default(),
        }
    }

    fn service() -> (MemoryConnection, HistoryService<MemoryConnection>) {
        let connection = MemoryConnection::new();
        let service = HistoryService::new(&connection);
        (connection, service)
    }

    #[test]
    fn empty_store_loads_empty_history() -> Result<()> {
        let (_conn, service) = service();
        assert!(service.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn append_preserves_prior_entries() -> Result<()> {
        let (_conn, service) = service();
        service.append(record("analysis::1"))?;
        service.append(record("analysis::2"))?;

        let records = service.load()?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "analysis::1");
        assert_eq!(records[1].id, "analysis::2");
        Ok(())
    }

    #[test]
    fn persisted_history_round_trips() -> Result<()> {
        let (connection, service) = service();
        service.append(record("analysis::1"))?;
        let first_load = service.load()?;

        // A fresh service over the same connection sees the same sequence.
        let reloaded = HistoryService::new(&connection).load()?;
        assert_eq!(reloaded, first_load);
        Ok(())
    }

    #[test]
    fn corrupt_blob_degrades_to_empty_history() -> Result<()> {
        let (connection, service) = service();
        connection
            .create_key_value_repository()
            .set(HISTORY_KEY, "{not valid json")?;

        assert!(service.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn append_after_corrupt_blob_starts_fresh() -> Result<()> {
        let (connection, service) = service();
        connection
            .create_key_value_repository()
            .set(HISTORY_KEY, "[[[[")?;

        service.append(record("analysis::9"))?;
        let records = service.load()?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "analysis::9");
        Ok(())
    }

    #[test]
    fn get_record_is_bounds_checked() -> Result<()> {
        let (_conn, service) = service();
        service.append(record("analysis::1"))?;
        service.append(record("analysis::2"))?;

        assert_eq!(service.get_record(0)?.id, "analysis::1");
        assert_eq!(service.get_record(1)?.id, "analysis::2");

        match service.get_record(5) {
            Err(HistoryError::RecordNotFound { index: 5, len: 2 }) => {}
            other => panic!("expected RecordNotFound, got {:?}", other.map(|r| r.id)),
        }
        Ok(())
    }

    #[test]
    fn record_ids_are_monotonic() {
        let first = HistoryService::<MemoryConnection>::next_record_id(&[]);
        let existing = vec![record(&first)];
        let second = HistoryService::<MemoryConnection>::next_record_id(&existing);
        assert_ne!(first, second);

        // Even a last id from the future is never repeated or preceded.
        let future = vec![record("analysis::99999999999999")];
        let next = HistoryService::<MemoryConnection>::next_record_id(&future);
        assert_eq!(next, "analysis::100000000000000");
    }
}
