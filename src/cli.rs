// src/cli.rs
//
// Headless front end: scrape and/or render charts without opening a window.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::{
    charts::router,
    config::options::{AppOptions, ChartKind},
    core::HttpFetcher,
    error::Result,
    progress::LogProgress,
    runner::{self, EnsureOutcome},
};

#[derive(Debug, Parser)]
#[command(name = "cli", about = "Douban Top 250 scraper and chart renderer")]
pub struct Cli {
    /// Directory for the dataset files and chart images
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// CJK font used for chart labels
    #[arg(long, global = true)]
    pub font: Option<PathBuf>,

    /// Font used for the genre word cloud
    #[arg(long = "cloud-font", global = true)]
    pub cloud_font: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape the listing unless both dataset files already exist
    Scrape {
        /// Re-scrape and overwrite even if the files exist
        #[arg(long)]
        force: bool,
    },
    /// Render one chart (year, rating, scatter, top10, wordcloud) or "all"
    Plot {
        chart: String,
    },
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(dir) = &self.dir {
            opts = opts.with_dir(dir);
        }
        opts.charts.set_fonts(self.font.as_deref(), self.cloud_font.as_deref());
        opts
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let opts = cli.options();

    match &cli.command {
        Command::Scrape { force } => {
            let fetcher = HttpFetcher::new(&opts.scrape)?;
            let mut progress = LogProgress::default();
            if *force {
                let ds = runner::refresh_dataset(&opts, &fetcher, Some(&mut progress))?;
                println!("Scraped {} movies", ds.len());
            } else {
                match runner::ensure_dataset(&opts, &fetcher, Some(&mut progress))? {
                    EnsureOutcome::Reused => println!("Dataset already present; nothing fetched"),
                    EnsureOutcome::Scraped { rows } => println!("Scraped {rows} movies"),
                }
            }
        }
        Command::Plot { chart } => {
            for kind in charts_for(chart)? {
                let path = runner::plot(kind, &opts)?;
                info!("{} → {}", router::chart_for(kind).label(), path.display());
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

fn charts_for(arg: &str) -> Result<Vec<ChartKind>> {
    if arg.eq_ignore_ascii_case("all") {
        return Ok(ChartKind::ALL.to_vec());
    }
    Ok(vec![arg.parse()?])
}
