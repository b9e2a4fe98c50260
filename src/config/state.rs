// src/config/state.rs
use super::{consts::{WINDOW_H, WINDOW_W}, options::AppOptions};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    /// Fixed-size window; the gallery scrolls instead of growing it.
    pub resizable: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            resizable: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
