//! # Data Loading
//!
//! The bridge between the UI and the backend services: initial load of saved
//! settings and history, persisting form values, and running one statement
//! ingestion on a worker thread.
//!
//! ## Data Flow:
//! 1. First frame: restore saved salary/currency/theme and the analysis
//!    history, then hand the store length to the view state machine.
//! 2. Save & Process: persist the form, read the selected file, and spawn a
//!    worker thread that runs the ingestion service.
//! 3. Every frame: poll the worker's channel; on completion update the cached
//!    history, advance the view state, and notify the user.

use eframe::egui;
use log::{info, warn};
use std::sync::mpsc;
use std::thread;

use finance_insights_backend::domain::commands::ingestion::{
    IngestStatementCommand, StatementUpload,
};

use crate::ui::app_state::FinanceInsightsApp;
use crate::ui::components::styling;
use crate::ui::notifications::Notification;
use crate::ui::view_state::ViewState;

impl FinanceInsightsApp {
    /// Restore saved settings and history on the first frame
    pub fn load_initial_data(&mut self, ctx: &egui::Context) {
        info!("Loading saved settings and analysis history");

        match self.backend.settings_service.monthly_salary() {
            Ok(Some(salary)) => self.salary_input = salary,
            Ok(None) => {}
            Err(e) => warn!("Failed to load saved salary: {}", e),
        }

        match self.backend.settings_service.currency() {
            Ok(currency) => self.currency = currency,
            Err(e) => warn!("Failed to load saved currency: {}", e),
        }

        match self.backend.settings_service.dark_mode() {
            Ok(dark_mode) => {
                self.dark_mode = dark_mode;
                styling::apply_theme(ctx, dark_mode);
            }
            Err(e) => warn!("Failed to load theme preference: {}", e),
        }

        match self.backend.history_service.load() {
            Ok(records) => {
                info!("Loaded {} past analyses", records.len());
                self.view = ViewState::initial(records.len());
                self.history = records;
            }
            Err(e) => {
                self.notify(Notification::error(format!(
                    "Could not read analysis history: {}",
                    e
                )));
                self.view = ViewState::initial(0);
                self.history = Vec::new();
            }
        }

        self.loading = false;
    }

    /// Persist the currency dropdown choice
    pub fn persist_currency(&mut self) {
        if let Err(e) = self.backend.settings_service.set_currency(self.currency) {
            warn!("Failed to save currency: {}", e);
        }
    }

    /// Persist both form fields, as Save & Process does before submitting
    fn persist_form_settings(&mut self) {
        let salary = self.salary_input.trim().to_string();
        if let Err(e) = self.backend.settings_service.set_monthly_salary(&salary) {
            warn!("Failed to save salary: {}", e);
        }
        self.persist_currency();
    }

    /// Kick off one ingestion on a worker thread. The trigger control is
    /// disabled while `processing` is set, so at most one request is in
    /// flight at a time.
    pub fn start_ingestion(&mut self) {
        if self.processing {
            return;
        }

        self.persist_form_settings();

        let statement = match &self.selected_statement {
            Some(path) => match std::fs::read(path) {
                Ok(contents) => Some(StatementUpload {
                    file_name: path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "statement".to_string()),
                    contents,
                }),
                Err(e) => {
                    self.notify(Notification::error(format!(
                        "Could not read {}: {}",
                        path.display(),
                        e
                    )));
                    return;
                }
            },
            // The service rejects this before any network call; the result
            // comes back through the same channel as every other outcome.
            None => None,
        };

        let command = IngestStatementCommand {
            statement,
            salary: self.salary_input.trim().to_string(),
            currency: self.currency,
        };

        let service = self.backend.ingestion_service.clone();
        let (sender, receiver) = mpsc::channel();
        self.processing = true;
        self.pending_ingestion = Some(receiver);

        thread::spawn(move || {
            let _ = sender.send(service.ingest(command));
        });
    }

    /// Poll the in-flight ingestion, if any, and apply its outcome
    pub fn poll_ingestion(&mut self) {
        let Some(receiver) = &self.pending_ingestion else {
            return;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.processing = false;
                self.pending_ingestion = None;

                match result {
                    Ok(record) => {
                        info!("Analysis {} ready", record.id);
                        self.history.push(record);
                        self.view.record_ingested(self.history.len());
                        self.notify(Notification::success("Financial summary updated!"));
                    }
                    Err(e) => {
                        warn!("Ingestion failed: {}", e);
                        self.notify(Notification::error(e.to_string()));
                    }
                }
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.processing = false;
                self.pending_ingestion = None;
                self.notify(Notification::error(
                    "Statement processing stopped unexpectedly.",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! End-to-end runs of the ingestion flow against the in-memory store and
    //! the simulated processor, checked down to the rendered strings.

    use std::sync::Arc;

    use finance_insights_backend::domain::commands::ingestion::{
        IngestStatementCommand, StatementUpload,
    };
    use finance_insights_backend::domain::history_service::HistoryService;
    use finance_insights_backend::domain::ingestion_service::IngestionService;
    use finance_insights_backend::statement_api::SimulatedStatementProcessor;
    use finance_insights_backend::storage::MemoryConnection;
    use shared::Currency;

    use crate::ui::format::format_amount;
    use crate::ui::view_state::{ViewMode, ViewState};

    fn command() -> IngestStatementCommand {
        IngestStatementCommand {
            statement: Some(StatementUpload {
                file_name: "statement.csv".to_string(),
                contents: b"Date,Description,Amount\n".to_vec(),
            }),
            salary: "500000".to_string(),
            currency: Currency::Usd,
        }
    }

    #[test]
    fn ingesting_into_an_empty_store_shows_the_formatted_summary() {
        let connection = MemoryConnection::new();
        let history = HistoryService::new(&connection);
        let ingestion =
            IngestionService::new(&connection, Arc::new(SimulatedStatementProcessor::new()));

        let mut view = ViewState::initial(history.load().unwrap().len());
        assert_eq!(view.mode(), ViewMode::Empty);

        let record = ingestion.ingest(command()).unwrap();
        let records = history.load().unwrap();
        assert_eq!(records.len(), 1);

        view.record_ingested(records.len());
        assert_eq!(view.mode(), ViewMode::Summary(0));

        let shown = &records[0];
        assert_eq!(shown.id, record.id);
        assert_eq!(
            format_amount(shown.summary.total_income, &shown.currency),
            "$500,000.00"
        );
        assert_eq!(
            format_amount(shown.summary.total_expenses, &shown.currency),
            "$350,000.00"
        );
        assert_eq!(
            format_amount(shown.summary.net_savings, &shown.currency),
            "$150,000.00"
        );
        assert_eq!(shown.summary.highest_expense.amount, 150000.0);
    }

    #[test]
    fn selecting_a_missing_entry_keeps_the_history_view() {
        let connection = MemoryConnection::new();
        let history = HistoryService::new(&connection);
        let ingestion =
            IngestionService::new(&connection, Arc::new(SimulatedStatementProcessor::new()));

        ingestion.ingest(command()).unwrap();
        ingestion.ingest(command()).unwrap();
        let len = history.load().unwrap().len();
        assert_eq!(len, 2);

        let mut view = ViewState::initial(len);
        view.toggle_history(len);
        assert_eq!(view.mode(), ViewMode::History);

        let error = view.select_history_entry(5, len).unwrap_err();
        assert_eq!(error.index, 5);
        assert_eq!(view.mode(), ViewMode::History);
    }
}
