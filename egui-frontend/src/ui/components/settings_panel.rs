//! # Settings Panel
//!
//! The salary/currency form and the statement upload controls: the entry
//! point of the whole analysis flow. Salary and currency are persisted when
//! the user saves; the currency choice is also persisted the moment the
//! dropdown changes, so the symbol follows immediately.

use eframe::egui;

use crate::ui::app_state::FinanceInsightsApp;
use crate::ui::components::styling;

/// File types the analysis service accepts
const STATEMENT_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls", "pdf"];

impl FinanceInsightsApp {
    pub fn render_settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Monthly Salary").strong());
                ui.label(self.currency.symbol());
                ui.add(
                    egui::TextEdit::singleline(&mut self.salary_input)
                        .desired_width(140.0)
                        .hint_text("e.g. 250000"),
                );

                let previous = self.currency;
                egui::ComboBox::from_id_salt("currency_select")
                    .selected_text(self.currency.code())
                    .show_ui(ui, |ui| {
                        for currency in shared::Currency::ALL {
                            ui.selectable_value(
                                &mut self.currency,
                                currency,
                                format!("{} ({})", currency.code(), currency.symbol()),
                            );
                        }
                    });
                if self.currency != previous {
                    self.persist_currency();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Select File").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Bank statements", STATEMENT_EXTENSIONS)
                        .pick_file()
                    {
                        self.selected_statement = Some(path);
                    }
                }

                match &self.selected_statement {
                    Some(path) => {
                        let name = path
                            .file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        ui.label(name);
                    }
                    None => {
                        ui.label(egui::RichText::new("No file chosen").weak());
                    }
                }
            });

            ui.horizontal(|ui| {
                let process = ui.add_enabled(
                    !self.processing,
                    egui::Button::new("Save & Process Statement"),
                );
                if process.clicked() {
                    self.start_ingestion();
                }

                if self.processing {
                    ui.spinner();
                    ui.colored_label(styling::INFO_COLOR, "Processing statement...");
                }
            });
        });
    }
}
