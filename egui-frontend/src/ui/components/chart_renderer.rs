//! # Chart Renderer
//!
//! The two summary charts: spending per category and income vs. expenses.
//! Both are plotted straight from the record being shown, so re-rendering
//! the same record always draws the same chart.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};
use shared::FinancialSummary;

use crate::ui::components::styling;

const CHART_HEIGHT: f32 = 220.0;

/// Bar chart of the spending breakdown, one bar per category in payload order
pub fn render_spending_chart(ui: &mut egui::Ui, summary: &FinancialSummary) {
    if summary.spending_breakdown.is_empty() {
        ui.label(egui::RichText::new("No data available.").weak());
        return;
    }

    let bars: Vec<Bar> = summary
        .spending_breakdown
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Bar::new(index as f64, entry.amount)
                .name(&entry.category)
                .fill(styling::color_for_category(index))
                .width(0.6)
        })
        .collect();

    Plot::new("spending_breakdown_chart")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_axes([false, true])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Two-bar comparison of total income against total expenses
pub fn render_income_expense_chart(ui: &mut egui::Ui, summary: &FinancialSummary) {
    let income = BarChart::new(vec![Bar::new(0.0, summary.total_income).width(0.5)])
        .name("Income")
        .color(styling::INCOME_COLOR);
    let expenses = BarChart::new(vec![Bar::new(1.0, summary.total_expenses).width(0.5)])
        .name("Expenses")
        .color(styling::EXPENSE_COLOR);

    Plot::new("income_expense_chart")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_axes([false, true])
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(income);
            plot_ui.bar_chart(expenses);
        });
}
