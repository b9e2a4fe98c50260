// src/progress.rs
use tracing::info;

/// Lightweight progress reporting used by the scrape pass.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been fetched and parsed.
    fn item_done(&mut self, _start: usize, _items: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Forwards progress to the log.
#[derive(Default)]
pub struct LogProgress {
    done: usize,
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        info!(pages = total, "Scrape: begin");
    }
    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }
    fn item_done(&mut self, start: usize, items: usize) {
        self.done += 1;
        info!("Scrape: page start={start} items={items} ({}/{})", self.done, self.total);
    }
    fn finish(&mut self) {
        info!("Scrape: finished ({}/{})", self.done, self.total);
    }
}
