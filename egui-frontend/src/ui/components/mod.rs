//! # UI Components
//!
//! Rendering modules for the dashboard. Each module extends
//! `FinanceInsightsApp` with the draw functions for one area of the screen;
//! everything renders from the app state and pushes user actions back into
//! it.

pub mod chart_renderer;
pub mod history_renderer;
pub mod settings_panel;
pub mod styling;
pub mod summary_renderer;
