//! Statement ingestion service.
//!
//! Orchestrates one statement analysis end to end: validate that a file was
//! selected, submit it to the configured processor, build the analysis record
//! and persist it to the history. The service returns the new record to the
//! caller; rendering and other UI updates are the caller's concern.

use chrono::Utc;
use log::info;
use shared::AnalysisRecord;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::commands::ingestion::IngestStatementCommand;
use crate::domain::history_service::HistoryService;
use crate::statement_api::StatementProcessor;
use crate::storage::traits::Connection;

/// Errors surfaced by an ingestion attempt. All are recoverable; the caller
/// reports them and returns to idle.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// The user asked to process before selecting a statement file
    #[error("Please select a bank statement file.")]
    MissingStatement,
    /// Transport failure, or an application-level error from the service
    #[error("Statement processing failed: {0}")]
    ProcessingFailed(String),
    /// The new record could not be persisted
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Service running statement analyses against a [`StatementProcessor`]
#[derive(Clone)]
pub struct IngestionService<C: Connection> {
    history_service: HistoryService<C>,
    processor: Arc<dyn StatementProcessor>,
}

impl<C: Connection> IngestionService<C> {
    pub fn new(connection: &C, processor: Arc<dyn StatementProcessor>) -> Self {
        Self {
            history_service: HistoryService::new(connection),
            processor,
        }
    }

    /// Run one ingestion and return the newly appended record.
    ///
    /// No record is appended on failure, and a missing statement is rejected
    /// before the processor is called.
    pub fn ingest(&self, command: IngestStatementCommand) -> Result<AnalysisRecord, IngestionError> {
        let Some(statement) = command.statement else {
            return Err(IngestionError::MissingStatement);
        };

        info!(
            "Processing statement {} ({} bytes, currency {})",
            statement.file_name,
            statement.contents.len(),
            command.currency
        );

        let summary = self
            .processor
            .process(&statement, &command.salary, command.currency)?;

        let existing = self.history_service.load()?;
        let record = AnalysisRecord {
            id: HistoryService::<C>::next_record_id(&existing),
            timestamp: Utc::now().to_rfc3339(),
            currency: command.currency.code().to_string(),
            summary,
        };

        self.history_service.append(record.clone())?;
        info!(
            "Analysis {} appended, history now has {} entries",
            record.id,
            existing.len() + 1
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::ingestion::StatementUpload;
    use crate::statement_api::sample_summary;
    use crate::storage::memory::MemoryConnection;
    use shared::{Currency, FinancialSummary};

    struct StubProcessor {
        response: Result<FinancialSummary, String>,
    }

    impl StatementProcessor for StubProcessor {
        fn process(
            &self,
            _statement: &StatementUpload,
            _salary: &str,
            _currency: Currency,
        ) -> Result<FinancialSummary, IngestionError> {
            self.response
                .clone()
                .map_err(IngestionError::ProcessingFailed)
        }
    }

    fn command(statement: Option<StatementUpload>) -> IngestStatementCommand {
        IngestStatementCommand {
            statement,
            salary: "500000".to_string(),
            currency: Currency::Usd,
        }
    }

    fn upload() -> StatementUpload {
        StatementUpload {
            file_name: "statement.csv".to_string(),
            contents: b"Date,Description,Amount\n".to_vec(),
        }
    }

    fn service_with(
        connection: &MemoryConnection,
        response: Result<FinancialSummary, String>,
    ) -> IngestionService<MemoryConnection> {
        IngestionService::new(connection, Arc::new(StubProcessor { response }))
    }

    #[test]
    fn missing_statement_is_rejected_without_appending() {
        let connection = MemoryConnection::new();
        let service = service_with(&connection, Ok(sample_summary()));

        let result = service.ingest(command(None));
        assert!(matches!(result, Err(IngestionError::MissingStatement)));

        let history = HistoryService::new(&connection).load().unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn successful_ingestion_appends_one_record() {
        let connection = MemoryConnection::new();
        let service = service_with(&connection, Ok(sample_summary()));

        let record = service.ingest(command(Some(upload()))).unwrap();
        assert_eq!(record.currency, "USD");
        assert_eq!(record.summary.total_income, 500000.0);

        let history = HistoryService::new(&connection).load().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], record);
    }

    #[test]
    fn repeated_ingestions_get_unique_ids() {
        let connection = MemoryConnection::new();
        let service = service_with(&connection, Ok(sample_summary()));

        let first = service.ingest(command(Some(upload()))).unwrap();
        let second = service.ingest(command(Some(upload()))).unwrap();
        assert_ne!(first.id, second.id);

        let history = HistoryService::new(&connection).load().unwrap();
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn processing_failure_appends_nothing() {
        let connection = MemoryConnection::new();
        let service = service_with(&connection, Err("Unsupported file type: .png".to_string()));

        let result = service.ingest(command(Some(upload())));
        match result {
            Err(IngestionError::ProcessingFailed(message)) => {
                assert!(message.contains("Unsupported file type"))
            }
            other => panic!("expected ProcessingFailed, got {:?}", other.map(|r| r.id)),
        }

        let history = HistoryService::new(&connection).load().unwrap();
        assert!(history.is_empty());
    }
}
