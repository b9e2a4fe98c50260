// src/log.rs
//
// tracing subscriber: elapsed-time stamps, to stderr and to a debug log
// under .store/. Safe to call more than once.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, fmt::time::Uptime, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::consts::{LOG_DIR, LOG_FILE, LOG_FILTER};

pub fn init() {
    let filter = EnvFilter::new(LOG_FILTER);

    let stderr_layer = fmt::layer()
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr);

    // No log file → stderr only.
    let file_layer = open_log_file().map(|file| {
        fmt::layer()
            .with_timer(Uptime::default())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn open_log_file() -> Option<fs::File> {
    fs::create_dir_all(LOG_DIR).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(LOG_DIR).join(LOG_FILE))
        .ok()
}
