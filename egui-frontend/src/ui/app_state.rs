//! # App State
//!
//! Central application state for the finance insights dashboard.
//!
//! ## State Management:
//! The `FinanceInsightsApp` struct holds all application state in one place:
//! the backend connection, the cached analysis history, the view state
//! machine, form inputs, and the in-flight ingestion handle. Components
//! render from this state and push user actions back into it, keeping a
//! single source of truth.

use log::info;
use shared::{AnalysisRecord, Currency};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use finance_insights_backend::domain::ingestion_service::IngestionError;
use finance_insights_backend::Backend;

use crate::ui::components::styling;
use crate::ui::notifications::Notification;
use crate::ui::view_state::{ViewMode, ViewState};

/// Main application struct for the egui finance insights dashboard
pub struct FinanceInsightsApp {
    pub backend: Backend,

    // Analysis state
    /// Cached store contents, creation order (index 0 = oldest)
    pub history: Vec<AnalysisRecord>,
    /// Which view is visible and which record it shows
    pub view: ViewState,

    // Form state
    pub salary_input: String,
    pub currency: Currency,
    pub selected_statement: Option<PathBuf>,

    // Ingestion state
    /// True while a request is outstanding; the trigger control is disabled
    pub processing: bool,
    /// Channel carrying the worker thread's result back to the UI thread
    pub pending_ingestion: Option<Receiver<Result<AnalysisRecord, IngestionError>>>,

    // UI state
    pub loading: bool,
    pub dark_mode: bool,
    pub notifications: Vec<Notification>,
}

impl FinanceInsightsApp {
    /// Create a new app instance with a backend connection
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing Finance Insights app");

        styling::setup_app_style(&cc.egui_ctx);
        let backend = Backend::new()?;

        Ok(Self {
            backend,

            // Analysis state
            history: Vec::new(),
            view: ViewState::initial(0),

            // Form state
            salary_input: String::new(),
            currency: Currency::default(),
            selected_statement: None,

            // Ingestion state
            processing: false,
            pending_ingestion: None,

            // UI state
            loading: true,
            dark_mode: false,
            notifications: Vec::new(),
        })
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// The record the current summary view shows, if any
    pub fn current_record(&self) -> Option<&AnalysisRecord> {
        match self.view.mode() {
            ViewMode::Summary(index) => self.history.get(index),
            _ => None,
        }
    }

    /// Flip between summary and history views
    pub fn toggle_history(&mut self) {
        self.view.toggle_history(self.history.len());
    }

    /// Open one history entry; an invalid position is reported and the
    /// history list stays visible
    pub fn open_history_entry(&mut self, index: usize) {
        if let Err(error) = self.view.select_history_entry(index, self.history.len()) {
            self.notify(Notification::error(error.to_string()));
        }
    }
}
