// src/gui/actions/plot.rs
use std::path::Path;

use eframe::egui;
use tracing::{error, info};

use crate::{
    charts::router,
    config::options::ChartKind,
    error::Result,
    gui::app::{App, GalleryImage},
    runner,
};

/// Button → render → append. Runs on the UI thread and blocks until done.
/// On failure the gallery is left as it was.
pub fn plot(app: &mut App, ctx: &egui::Context, kind: ChartKind) {
    let label = router::chart_for(kind).label();
    info!("UI: {label}");

    let result = runner::plot(kind, &app.state.options)
        .and_then(|path| load_texture(ctx, &path));

    match result {
        Ok(texture) => {
            app.gallery.push(GalleryImage { kind, texture });
            app.status(format!("{label} ({})", app.gallery.len()));
        }
        Err(e) => {
            error!("Chart: {:?} failed: {e}", kind);
            app.status(format!("Error: {e}"));
        }
    }
}

fn load_texture(ctx: &egui::Context, path: &Path) -> Result<egui::TextureHandle> {
    let img = image::open(path)?.to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    let pixels = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    Ok(ctx.load_texture(path.display().to_string(), pixels, egui::TextureOptions::LINEAR))
}
