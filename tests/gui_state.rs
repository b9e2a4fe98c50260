// tests/gui_state.rs
use douban_top250::config::{
    consts::{STATUS_READY, WINDOW_TITLE},
    state::{AppState, GuiState},
};

#[test]
fn window_is_fixed_at_400_by_300() {
    let gui = GuiState::default();
    assert_eq!((gui.window_w, gui.window_h), (400, 300));
    assert!(!gui.resizable);
}

#[test]
fn window_text_is_chinese() {
    assert_eq!(WINDOW_TITLE, "豆瓣电影Top 250数据分析");
    assert_eq!(STATUS_READY, "就绪");
}

#[test]
fn default_state_points_at_working_dir() {
    let state = AppState::default();
    assert_eq!(state.options.store.dir, std::path::Path::new("."));
    assert_eq!(state.options.charts.dir, state.options.store.dir);
}
