// src/scrape.rs
//
// Fetch → extract → accumulate, one page at a time, in offset order.
// Any page error ends the whole pass.

use tracing::{debug, error, warn};

use crate::{
    config::options::ScrapeOptions,
    core::Fetch,
    data::{Dataset, DatasetBuilder},
    error::Result,
    progress::Progress,
    specs::top250,
};

/// Scrape every listing page into a ranked dataset.
pub fn collect_movies(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Dataset> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.pages);
    }

    let result = collect_pages(fetcher, opts, progress.as_deref_mut());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    if let Err(e) = &result {
        error!("Scrape: aborted: {e}");
    }
    result
}

fn collect_pages(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Dataset> {
    let mut builder = DatasetBuilder::with_capacity(opts.expected_rows());

    for start in opts.offsets() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("正在爬取: {}", opts.page_url(start)));
        }

        let html = fetcher.fetch_page(start)?;
        let movies = top250::parse_page(&html)?;
        let n = movies.len();

        for m in movies {
            debug!(title = %m.title, "爬取到电影");
            builder.push(m);
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(start, n);
        }
    }

    let expected = opts.expected_rows();
    if builder.len() < expected {
        let msg = format!("只爬取到 {}/{} 部电影", builder.len(), expected);
        warn!("Scrape: {msg}");
        if let Some(p) = progress.as_deref_mut() {
            p.log(&msg);
        }
    }

    Ok(builder.finish())
}
