//! # App Coordinator
//!
//! The main update loop: first-run data loading, polling the in-flight
//! ingestion, notification expiry, and routing to the view the state machine
//! says is visible.

use eframe::egui;
use std::time::Duration;

use crate::ui::app_state::FinanceInsightsApp;
use crate::ui::components::styling;
use crate::ui::notifications::NotificationKind;
use crate::ui::view_state::ViewMode;

impl eframe::App for FinanceInsightsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load saved settings and history on first run
        if self.loading {
            self.load_initial_data(ctx);
        }

        self.poll_ingestion();
        self.notifications.retain(|n| !n.is_expired());

        // Keep repainting while something is pending or about to expire
        if self.processing || !self.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui, ctx);
            ui.separator();

            self.render_notifications(ui);
            self.render_settings_panel(ui);
            ui.add_space(8.0);

            self.render_main_content(ui);
        });
    }
}

impl FinanceInsightsApp {
    fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Finance Insights")
                    .size(26.0)
                    .strong(),
            );
            ui.label(egui::RichText::new("Your Financial Overview").weak());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme_icon = if self.dark_mode { "☀" } else { "🌙" };
                if ui.button(theme_icon).clicked() {
                    self.toggle_dark_mode(ctx);
                }

                if self.view.history_available() {
                    if ui.button(self.view.toggle_label()).clicked() {
                        self.toggle_history();
                    }
                }
            });
        });
    }

    fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.dark_mode = !self.dark_mode;
        styling::apply_theme(ctx, self.dark_mode);
        if let Err(e) = self.backend.settings_service.set_dark_mode(self.dark_mode) {
            log::warn!("Failed to save theme preference: {}", e);
        }
    }

    fn render_notifications(&self, ui: &mut egui::Ui) {
        for notification in &self.notifications {
            let (color, icon) = match notification.kind {
                NotificationKind::Info => (styling::INFO_COLOR, "ℹ"),
                NotificationKind::Success => (styling::INCOME_COLOR, "✔"),
                NotificationKind::Error => (styling::EXPENSE_COLOR, "✖"),
            };
            ui.colored_label(color, format!("{} {}", icon, notification.message));
        }
    }

    fn render_main_content(&mut self, ui: &mut egui::Ui) {
        match self.view.mode() {
            ViewMode::Empty => self.render_empty_state(ui),
            ViewMode::Summary(index) => match self.history.get(index) {
                Some(record) => self.render_summary(ui, record),
                // The cache and view state only diverge if the store was
                // swapped underneath us; degrade to the empty state.
                None => self.render_empty_state(ui),
            },
            ViewMode::History => self.render_history(ui),
        }
    }
}
