// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use douban_top250::{
    config::state::AppState,
    core::HttpFetcher,
    gui, log,
    progress::LogProgress,
    runner,
};

fn main() {
    log::init();
    let state = AppState::default();

    // Scrape once up front unless both dataset files already exist.
    if let Err(e) = prepare(&state) {
        eprintln!("Scrape failed: {e}");
        std::process::exit(1);
    }

    let options = gui::native_options(&state.gui);
    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

fn prepare(state: &AppState) -> douban_top250::Result<()> {
    let fetcher = HttpFetcher::new(&state.options.scrape)?;
    runner::ensure_dataset(&state.options, &fetcher, Some(&mut LogProgress::default()))?;
    Ok(())
}
