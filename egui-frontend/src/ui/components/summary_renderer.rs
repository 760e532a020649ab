//! # Summary Renderer
//!
//! The financial summary view: metric cards, the two charts, the spending
//! breakdown, and the recurring/recent transaction lists. Everything here is
//! a pure projection of the record being shown — no ambient state is read —
//! so rendering the same record twice produces identical output.

use eframe::egui;
use shared::AnalysisRecord;

use crate::ui::app_state::FinanceInsightsApp;
use crate::ui::components::{chart_renderer, styling};
use crate::ui::format::{format_amount, format_timestamp};

impl FinanceInsightsApp {
    pub fn render_summary(&self, ui: &mut egui::Ui, record: &AnalysisRecord) {
        let summary = &record.summary;
        let code = record.currency.as_str();

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Financial Summary").size(20.0).strong());
            ui.label(
                egui::RichText::new(format!("analyzed {}", format_timestamp(&record.timestamp)))
                    .weak(),
            );
        });
        ui.add_space(4.0);

        // Metric cards
        ui.columns(4, |columns| {
            metric_card(
                &mut columns[0],
                "Total Income",
                format_amount(summary.total_income, code),
                Some(styling::INCOME_COLOR),
            );
            metric_card(
                &mut columns[1],
                "Total Expenses",
                format_amount(summary.total_expenses, code),
                Some(styling::EXPENSE_COLOR),
            );
            let savings_color = if summary.net_savings >= 0.0 {
                styling::INCOME_COLOR
            } else {
                styling::EXPENSE_COLOR
            };
            metric_card(
                &mut columns[2],
                "Net Savings",
                format_amount(summary.net_savings, code),
                Some(savings_color),
            );
            metric_card(
                &mut columns[3],
                "Highest Expense",
                format!(
                    "{} ({})",
                    format_amount(summary.highest_expense.amount, code),
                    summary.highest_expense.description
                ),
                None,
            );
        });

        ui.add_space(8.0);

        // Charts
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.label(egui::RichText::new("Spending Breakdown").strong());
                chart_renderer::render_spending_chart(ui, summary);
                render_breakdown_legend(ui, record);
            });
            columns[1].group(|ui| {
                ui.label(egui::RichText::new("Income vs. Expenses").strong());
                chart_renderer::render_income_expense_chart(ui, summary);
            });
        });

        ui.add_space(8.0);

        // Lists
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.label(egui::RichText::new("Recurring Expenses").strong());
                render_recurring_list(ui, record);
            });
            columns[1].group(|ui| {
                ui.label(egui::RichText::new("Recent Transactions").strong());
                render_transaction_list(ui, record);
            });
        });
    }

    /// Placeholder shown before the first analysis
    pub fn render_empty_state(&self, ui: &mut egui::Ui) {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("No financial summary yet")
                    .size(18.0)
                    .strong(),
            );
            ui.label("Upload a bank statement above to see your totals, spending breakdown, and recurring charges.");
        });
    }
}

fn metric_card(ui: &mut egui::Ui, label: &str, value: String, value_color: Option<egui::Color32>) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(label).weak());
            let text = egui::RichText::new(value).size(16.0).strong();
            match value_color {
                Some(color) => ui.label(text.color(color)),
                None => ui.label(text),
            };
        });
    });
}

fn render_breakdown_legend(ui: &mut egui::Ui, record: &AnalysisRecord) {
    for (index, entry) in record.summary.spending_breakdown.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.colored_label(styling::color_for_category(index), "■");
            ui.label(&entry.category);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format_amount(entry.amount, &record.currency));
            });
        });
    }
}

fn render_recurring_list(ui: &mut egui::Ui, record: &AnalysisRecord) {
    if record.summary.recurring_transactions.is_empty() {
        ui.label(egui::RichText::new("No data available.").weak());
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("recurring_list")
        .max_height(180.0)
        .show(ui, |ui| {
            for item in &record.summary.recurring_transactions {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&item.description).strong());
                        ui.label(egui::RichText::new(&item.frequency).weak());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(
                            styling::EXPENSE_COLOR,
                            format_amount(item.amount, &record.currency),
                        );
                    });
                });
                ui.separator();
            }
        });
}

fn render_transaction_list(ui: &mut egui::Ui, record: &AnalysisRecord) {
    if record.summary.transactions.is_empty() {
        ui.label(egui::RichText::new("No data available.").weak());
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("transaction_list")
        .max_height(180.0)
        .show(ui, |ui| {
            for item in &record.summary.transactions {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&item.description).strong());
                        ui.label(egui::RichText::new(&item.date).weak());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let color = if item.is_expense() {
                            styling::EXPENSE_COLOR
                        } else {
                            styling::INCOME_COLOR
                        };
                        ui.colored_label(
                            color,
                            format_amount(item.amount.abs(), &record.currency),
                        );
                    });
                });
                ui.separator();
            }
        });
}
