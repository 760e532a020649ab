use eframe::egui;
use log::{error, info};

mod ui;

use ui::app_state::FinanceInsightsApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Finance Insights");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([820.0, 600.0])
            .with_title("Finance Insights")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Finance Insights",
        options,
        Box::new(|cc| match FinanceInsightsApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Finance Insights");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
