// src/gui/fonts.rs
//
// egui's bundled fonts have no CJK glyphs. The configured label font is
// appended to both families as a fallback so the button labels render.

use std::{path::Path, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::warn;

const CJK: &str = "cjk";

pub fn install(ctx: &egui::Context, path: &Path) {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            warn!("UI: label font {} unavailable ({e}); CJK text may not render", path.display());
            return;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(s!(CJK), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(s!(CJK));
    }
    ctx.set_fonts(fonts);
}
