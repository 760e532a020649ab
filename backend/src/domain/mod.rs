//! # Domain Module
//!
//! Contains all business logic for the finance insights application.
//!
//! This module encapsulates the core rules and services that define how
//! statement analyses are requested, persisted, and read back. It operates
//! independently of any specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **history_service**: the durable, ordered history of analysis records
//! - **ingestion_service**: one statement analysis end to end (validate,
//!   submit, persist)
//! - **settings_service**: saved salary, currency, and preference flags
//! - **commands**: input types the services accept from callers

pub mod commands;
pub mod history_service;
pub mod ingestion_service;
pub mod settings_service;

pub use history_service::{HistoryError, HistoryService};
pub use ingestion_service::{IngestionError, IngestionService};
pub use settings_service::SettingsService;
