// src/runner.rs
//
// Pipeline entry points shared by the GUI and the CLI:
// - ensure_dataset: reuse the persisted files, or scrape + save once.
// - plot:           reload the CSV, render one chart, return its image path.

use std::path::PathBuf;

use tracing::info;

use crate::{
    charts::router,
    config::options::{AppOptions, ChartKind},
    core::Fetch,
    data::Dataset,
    error::Result,
    file::ensure_parent,
    progress::Progress,
    scrape, store,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// Both files were already on disk; nothing was fetched.
    Reused,
    /// A full scrape ran and wrote both files.
    Scraped { rows: usize },
}

/// Scrape only when the persisted dataset is incomplete.
pub fn ensure_dataset(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<EnsureOutcome> {
    if store::exists(&opts.store) {
        info!("文件已存在: {} 无需重复爬取", opts.store.xlsx_path().display());
        return Ok(EnsureOutcome::Reused);
    }
    let ds = refresh_dataset(opts, fetcher, progress)?;
    Ok(EnsureOutcome::Scraped { rows: ds.len() })
}

/// Full scrape, then overwrite both persisted files.
pub fn refresh_dataset(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<Dataset> {
    let ds = scrape::collect_movies(fetcher, &opts.scrape, progress)?;
    store::save(&opts.store, &ds)?;
    info!(rows = ds.len(), "文件已经生成！");
    Ok(ds)
}

/// Render one chart from a fresh reload of the CSV.
pub fn plot(kind: ChartKind, opts: &AppOptions) -> Result<PathBuf> {
    let ds = store::load(&opts.store)?;
    let out = opts.charts.out_path(kind);
    ensure_parent(&out)?;

    router::chart_for(kind).render(&ds, &out, &opts.charts)?;

    info!(chart = kind.slug(), rows = ds.len(), "Chart: wrote {}", out.display());
    Ok(out)
}
