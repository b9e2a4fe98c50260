// src/core/net.rs
//
// Blocking HTTP GET of one listing page. No timeout, no retry: a failed
// request is returned as-is and ends the scrape.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::{config::options::ScrapeOptions, error::Result};

/// Source of listing-page markup, keyed by page offset.
pub trait Fetch {
    fn fetch_page(&self, start: usize) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
    opts: ScrapeOptions,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client, opts: opts.clone() })
    }
}

impl Fetch for HttpFetcher {
    fn fetch_page(&self, start: usize) -> Result<String> {
        let url = self.opts.page_url(start);
        debug!(%url, "GET");
        let body = self.client
            .get(&url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}
