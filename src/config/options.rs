// src/config/options.rs
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;
use crate::error::Error;

/// Everything the pipeline needs, passed explicitly to each component.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub store: StoreOptions,
    pub charts: ChartOptions,
}

impl AppOptions {
    /// Point both the persisted dataset and the chart images at `dir`.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.store.dir = dir.clone();
        self.charts.dir = dir;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub user_agent: String,
    pub pages: usize,
    pub page_size: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            pages: PAGE_COUNT,
            page_size: PAGE_SIZE,
        }
    }
}

impl ScrapeOptions {
    /// Listing offsets in request order: 0, 25, 50, …
    pub fn offsets(&self) -> impl Iterator<Item = usize> + use<> {
        let step = self.page_size;
        (0..self.pages).map(move |i| i * step)
    }

    pub fn page_url(&self, start: usize) -> String {
        format!("{}?start={}&filter=", self.base_url, start)
    }

    /// Rows a complete scrape yields.
    pub fn expected_rows(&self) -> usize {
        self.pages * self.page_size
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub dir: PathBuf,
    pub xlsx_file: String,
    pub csv_file: String,
    pub sheet_name: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DATA_DIR),
            xlsx_file: s!(XLSX_FILE),
            csv_file: s!(CSV_FILE),
            sheet_name: s!(SHEET_NAME),
        }
    }
}

impl StoreOptions {
    /// Primary (spreadsheet) file.
    pub fn xlsx_path(&self) -> PathBuf { self.dir.join(&self.xlsx_file) }

    /// Secondary (delimited text) file; the one charts reload from.
    pub fn csv_path(&self) -> PathBuf { self.dir.join(&self.csv_file) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    pub dir: PathBuf,
    /// CJK-capable font for titles, axes and legends.
    pub label_font: PathBuf,
    /// Font for the genre word cloud. No fallback when absent.
    pub cloud_font: PathBuf,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DATA_DIR),
            label_font: PathBuf::from(LABEL_FONT),
            cloud_font: PathBuf::from(CLOUD_FONT),
        }
    }
}

impl ChartOptions {
    pub fn out_path(&self, kind: ChartKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    pub fn set_fonts(&mut self, label: Option<&Path>, cloud: Option<&Path>) {
        if let Some(p) = label { self.label_font = p.to_path_buf(); }
        if let Some(p) = cloud { self.cloud_font = p.to_path_buf(); }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    YearDistribution,
    RatingDistribution,
    CommentCountByRating,
    Top10CommentCounts,
    GenreWordCloud,
}

impl ChartKind {
    /// Button order in the window.
    pub const ALL: [ChartKind; 5] = [
        ChartKind::YearDistribution,
        ChartKind::RatingDistribution,
        ChartKind::CommentCountByRating,
        ChartKind::Top10CommentCounts,
        ChartKind::GenreWordCloud,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::YearDistribution     => YEAR_CHART_FILE,
            ChartKind::RatingDistribution   => RATING_CHART_FILE,
            ChartKind::CommentCountByRating => SCATTER_CHART_FILE,
            ChartKind::Top10CommentCounts   => TOP10_CHART_FILE,
            ChartKind::GenreWordCloud       => CLOUD_CHART_FILE,
        }
    }

    /// Short name used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::YearDistribution     => "year",
            ChartKind::RatingDistribution   => "rating",
            ChartKind::CommentCountByRating => "scatter",
            ChartKind::Top10CommentCounts   => "top10",
            ChartKind::GenreWordCloud       => "wordcloud",
        }
    }
}

impl FromStr for ChartKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.slug() == wanted)
            .ok_or_else(|| Error::Usage(format!(
                "unknown chart '{s}' (expected one of: year, rating, scatter, top10, wordcloud)"
            )))
    }
}
