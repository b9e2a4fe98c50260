// src/gui/app.rs
use std::error::Error;

use eframe::egui;
use tracing::info;

use crate::config::{
    consts::{STATUS_READY, WINDOW_TITLE},
    options::ChartKind,
    state::{AppState, GuiState},
};

pub fn native_options(gui: &GuiState) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([gui.window_w as f32, gui.window_h as f32])
            .with_resizable(gui.resizable),
        ..Default::default()
    }
}

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, state)))),
    )?;
    Ok(())
}

/// One rendered chart in the gallery.
pub struct GalleryImage {
    pub kind: ChartKind,
    pub texture: egui::TextureHandle,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // rendered charts, oldest first; only ever appended to
    pub gallery: Vec<GalleryImage>,

    pub status: String,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        super::fonts::install(&cc.egui_ctx, &state.options.charts.label_font);
        info!(
            "Init: data={} charts={}",
            state.options.store.csv_path().display(),
            state.options.charts.dir.display()
        );

        Self {
            state,
            gallery: Vec::new(),
            status: s!(STATUS_READY),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::chart_buttons::draw(ui, self);

            ui.separator();

            super::components::gallery::draw(ui, self);
        });
    }
}
