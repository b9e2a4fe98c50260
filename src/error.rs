// src/error.rs
//
// One error type for the whole pipeline. Variants follow the fault classes
// the app distinguishes: a network or page-structure fault ends the scrape,
// a data-shape or font fault ends only the chart request that hit it.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or a non-success HTTP status.
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// The page did not have the expected structure.
    #[error("page structure: {0}")]
    Parse(String),

    /// A persisted value did not have the shape an analysis needs.
    #[error("data shape: {0}")]
    DataShape(String),

    /// A configured font file is missing or unusable.
    #[error("font {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    #[error("chart rendering: {0}")]
    Render(String),

    #[error("usage: {0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Render(e.to_string())
    }
}
