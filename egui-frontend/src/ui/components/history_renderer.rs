//! # History Renderer
//!
//! The list of past analyses, newest first. Rows are read-only previews;
//! opening one asks the view state machine for the transition, so an invalid
//! position is reported without leaving the list.

use eframe::egui;

use crate::ui::app_state::FinanceInsightsApp;
use crate::ui::components::styling;
use crate::ui::format::{format_amount, format_timestamp};

impl FinanceInsightsApp {
    pub fn render_history(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Analysis History").size(20.0).strong());
        ui.add_space(4.0);

        let mut selected: Option<usize> = None;

        egui::ScrollArea::vertical()
            .id_salt("history_list")
            .show(ui, |ui| {
                for (index, record) in self.history.iter().enumerate().rev() {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(format!("Analysis #{}", index + 1))
                                        .strong(),
                                );
                                ui.label(
                                    egui::RichText::new(format_timestamp(&record.timestamp))
                                        .weak(),
                                );
                            });

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("View").clicked() {
                                        selected = Some(index);
                                    }
                                    ui.colored_label(
                                        styling::INCOME_COLOR,
                                        format_amount(
                                            record.summary.total_income,
                                            &record.currency,
                                        ),
                                    );
                                    ui.label(egui::RichText::new(&record.currency).weak());
                                },
                            );
                        });
                    });
                }
            });

        if let Some(index) = selected {
            self.open_history_entry(index);
        }
    }
}
