// src/charts/fonts.rs
//
// Chart text goes through plotters' ab_glyph backend, which only knows fonts
// registered by family name. We register the configured files on first use
// and again whenever the configured path for a family changes.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, OnceLock},
};

use plotters::style::{register_font, FontStyle};
use tracing::debug;

use crate::{
    config::options::ChartOptions,
    error::{Error, Result},
};

/// Titles, axes, legends. Registered as the default family so mesh labels
/// pick it up without per-call styling.
pub const LABEL_FAMILY: &str = "sans-serif";

/// Word-cloud glyphs.
pub const CLOUD_FAMILY: &str = "douban-cloud";

static LOADED: OnceLock<Mutex<HashMap<&'static str, PathBuf>>> = OnceLock::new();

/// Make `family` render with the font file at `path`.
/// The file must exist on every call; there is no fallback font.
pub fn use_font(family: &'static str, path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(font_err(path, "file not found"));
    }

    let mut loaded = LOADED
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if loaded.get(family).is_some_and(|p| p == path) {
        return Ok(());
    }

    let bytes = fs::read(path).map_err(|e| font_err(path, &e.to_string()))?;
    // plotters keeps a 'static reference for the life of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(family, FontStyle::Normal, bytes)
        .map_err(|_| font_err(path, "not a usable TrueType/OpenType font"))?;

    debug!(family, path = %path.display(), "Font registered");
    loaded.insert(family, path.to_path_buf());
    Ok(())
}

pub fn use_label_font(opts: &ChartOptions) -> Result<()> {
    use_font(LABEL_FAMILY, &opts.label_font)
}

fn font_err(path: &Path, reason: &str) -> Error {
    Error::Font { path: path.to_path_buf(), reason: s!(reason) }
}
