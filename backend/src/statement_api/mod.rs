//! # Statement Analysis API
//!
//! Client side of the statement analysis service: the [`StatementProcessor`]
//! seam the ingestion service calls through, the HTTP client that submits a
//! statement to the remote endpoint, and a local simulated processor for
//! offline use and end-to-end tests.
//!
//! ## Wire contract
//!
//! One POST of a multipart form with fields `file` (binary), `salary` (text)
//! and `currency` (3-letter code). The response body is JSON: either a
//! financial summary, or `{"error": "<message>"}` for application-level
//! failures. No retry is attempted.

use log::{info, warn};
use shared::{
    Currency, ExpenseHighlight, FinancialSummary, RecurringTransaction, SpendingBreakdown,
    StatementTransaction,
};
use std::time::Duration;

use crate::domain::commands::ingestion::StatementUpload;
use crate::domain::ingestion_service::IngestionError;

/// Default analysis endpoint; override with `FINANCE_INSIGHTS_ENDPOINT`
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/process_statement";

/// How long to wait for the analysis service before reporting failure
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam between the ingestion service and whatever turns a statement into a
/// financial summary
pub trait StatementProcessor: Send + Sync {
    fn process(
        &self,
        statement: &StatementUpload,
        salary: &str,
        currency: Currency,
    ) -> Result<FinancialSummary, IngestionError>;
}

/// HTTP client submitting statements to the remote analysis service
pub struct HttpStatementClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpStatementClient {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl StatementProcessor for HttpStatementClient {
    fn process(
        &self,
        statement: &StatementUpload,
        salary: &str,
        currency: Currency,
    ) -> Result<FinancialSummary, IngestionError> {
        let file_part = reqwest::blocking::multipart::Part::bytes(statement.contents.clone())
            .file_name(statement.file_name.clone());
        let form = reqwest::blocking::multipart::Form::new()
            .part("file", file_part)
            .text("salary", salary.to_string())
            .text("currency", currency.code());

        info!("Submitting {} to {}", statement.file_name, self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| IngestionError::ProcessingFailed(e.to_string()))?;

        let status = response.status();
        let payload: serde_json::Value = response.json().map_err(|e| {
            IngestionError::ProcessingFailed(format!(
                "Invalid response from analysis service: {}",
                e
            ))
        })?;

        if !status.is_success() && payload.get("error").is_none() {
            return Err(IngestionError::ProcessingFailed(format!(
                "Analysis service returned {}",
                status
            )));
        }

        summary_from_payload(payload).inspect_err(|e| {
            warn!("Analysis of {} failed: {}", statement.file_name, e);
        })
    }
}

/// Interpret the response body: an `error` field is an application-level
/// failure; anything else is passed through as a summary with only a basic
/// parse (missing fields default, they are not validated here).
fn summary_from_payload(payload: serde_json::Value) -> Result<FinancialSummary, IngestionError> {
    if let Some(message) = payload.get("error").and_then(|value| value.as_str()) {
        return Err(IngestionError::ProcessingFailed(message.to_string()));
    }

    serde_json::from_value(payload)
        .map_err(|e| IngestionError::ProcessingFailed(format!("Malformed summary payload: {}", e)))
}

/// Local processor returning the canonical sample analysis. Selected via
/// `FINANCE_INSIGHTS_SIMULATE` when no analysis service is running, and used
/// by the end-to-end tests.
#[derive(Default)]
pub struct SimulatedStatementProcessor {
    delay: Duration,
}

impl SimulatedStatementProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate processing latency, so the in-flight UI states are visible
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl StatementProcessor for SimulatedStatementProcessor {
    fn process(
        &self,
        statement: &StatementUpload,
        _salary: &str,
        _currency: Currency,
    ) -> Result<FinancialSummary, IngestionError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        info!("Simulating analysis for {}", statement.file_name);
        Ok(sample_summary())
    }
}

/// The sample summary the simulated processor returns
pub fn sample_summary() -> FinancialSummary {
    let mut breakdown = SpendingBreakdown::default();
    breakdown.insert("Rent".to_string(), 150000.0);
    breakdown.insert("Food & Dining".to_string(), 85000.0);
    breakdown.insert("Transport".to_string(), 45000.0);
    breakdown.insert("Entertainment".to_string(), 30000.0);
    breakdown.insert("Utilities".to_string(), 25000.0);
    breakdown.insert("Miscellaneous".to_string(), 15000.0);

    FinancialSummary {
        total_income: 500000.0,
        total_expenses: 350000.0,
        net_savings: 150000.0,
        highest_expense: ExpenseHighlight {
            description: "Luxury Apartment Rent".to_string(),
            amount: 150000.0,
        },
        spending_breakdown: breakdown,
        recurring_transactions: vec![
            RecurringTransaction {
                description: "Netflix Subscription".to_string(),
                amount: 15.99,
                frequency: "Monthly".to_string(),
            },
            RecurringTransaction {
                description: "Spotify Premium".to_string(),
                amount: 10.99,
                frequency: "Monthly".to_string(),
            },
            RecurringTransaction {
                description: "Gym Membership".to_string(),
                amount: 50.0,
                frequency: "Monthly".to_string(),
            },
        ],
        transactions: vec![
            StatementTransaction {
                date: "2025-07-15".to_string(),
                description: "Salary Deposit".to_string(),
                amount: 500000.0,
                category: "Income".to_string(),
            },
            StatementTransaction {
                date: "2025-07-14".to_string(),
                description: "Luxury Apartment Rent".to_string(),
                amount: -150000.0,
                category: "Rent".to_string(),
            },
            StatementTransaction {
                date: "2025-07-12".to_string(),
                description: "Grocery Shopping".to_string(),
                amount: -45000.0,
                category: "Food & Dining".to_string(),
            },
            StatementTransaction {
                date: "2025-07-10".to_string(),
                description: "Uber Ride".to_string(),
                amount: -125.5,
                category: "Transport".to_string(),
            },
            StatementTransaction {
                date: "2025-07-08".to_string(),
                description: "Netflix Subscription".to_string(),
                amount: -15.99,
                category: "Entertainment".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_field_maps_to_processing_failed() {
        let payload = json!({ "error": "Unsupported file type: .png" });
        match summary_from_payload(payload) {
            Err(IngestionError::ProcessingFailed(message)) => {
                assert_eq!(message, "Unsupported file type: .png")
            }
            other => panic!("expected ProcessingFailed, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn summary_payload_parses() {
        let payload = json!({
            "total_income": 500000.0,
            "total_expenses": 350000.0,
            "net_savings": 150000.0,
            "highest_expense": { "description": "Rent", "amount": 150000.0 },
            "spending_breakdown": { "Rent": 150000.0 },
            "recurring_transactions": [],
            "transactions": []
        });

        let summary = summary_from_payload(payload).unwrap();
        assert_eq!(summary.net_savings, 150000.0);
        assert_eq!(summary.highest_expense.description, "Rent");
    }

    #[test]
    fn partial_payload_parses_with_defaults() {
        let summary = summary_from_payload(json!({ "total_income": 12.5 })).unwrap();
        assert_eq!(summary.total_income, 12.5);
        assert!(summary.transactions.is_empty());
    }

    #[test]
    fn wrongly_typed_payload_is_processing_failed() {
        let payload = json!({ "total_income": "lots" });
        assert!(matches!(
            summary_from_payload(payload),
            Err(IngestionError::ProcessingFailed(_))
        ));
    }

    #[test]
    fn simulated_processor_is_deterministic() {
        let processor = SimulatedStatementProcessor::new();
        let statement = StatementUpload {
            file_name: "statement.csv".to_string(),
            contents: vec![1, 2, 3],
        };

        let first = processor
            .process(&statement, "500000", Currency::Usd)
            .unwrap();
        let second = processor
            .process(&statement, "500000", Currency::Usd)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first.spending_breakdown.len(), 6);
    }
}
