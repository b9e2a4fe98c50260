// src/gui/components/chart_buttons.rs

use eframe::egui;

use crate::{
    charts::router,
    gui::{actions, app::App},
};

/// One full-width button per chart, then the status line.
pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let width = ui.available_width();

    for chart in router::all_charts() {
        let button = ui.add_sized([width, 24.0], egui::Button::new(chart.label()));
        if button.clicked() {
            let ctx = ui.ctx().clone();
            actions::plot(app, &ctx, chart.kind());
        }
    }

    ui.label(app.status.as_str());
}
