// src/gui/components/gallery.rs

use eframe::egui::{self, load::SizedTexture};

use crate::gui::app::App;

/// Every rendered chart, stacked in click order, scaled to the window width.
pub fn draw(ui: &mut egui::Ui, app: &App) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in &app.gallery {
                let image = egui::Image::new(SizedTexture::from_handle(&entry.texture))
                    .max_width(ui.available_width());
                ui.add(image).on_hover_text(entry.kind.file_name());
            }
        });
}
