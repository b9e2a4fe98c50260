// src/charts/mod.rs
//! # Charts
//!
//! One renderer per [`ChartKind`]. A renderer takes the reloaded dataset,
//! derives its view through [`crate::analysis`], and writes one PNG.
//!
//! Order inside `render` matters: derive the data first (data-shape faults
//! surface before any font is touched), then load fonts, then draw.
//!
//! Dispatch goes through [`router`]; the GUI and CLI never call a renderer
//! directly.

use std::path::Path;

use plotters::style::RGBColor;

use crate::{
    config::options::{ChartKind, ChartOptions},
    data::Dataset,
    error::Result,
};

pub mod fonts;
pub mod router;

pub mod year;
pub mod rating;
pub mod scatter;
pub mod top10;
pub mod wordcloud;

pub trait Chart: Send + Sync + 'static {
    fn kind(&self) -> ChartKind;

    /// Button text.
    fn label(&self) -> &'static str;

    /// Draw `ds` into a PNG at `out`, overwriting it.
    fn render(&self, ds: &Dataset, out: &Path, opts: &ChartOptions) -> Result<()>;
}

pub(crate) const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub(crate) const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
pub(crate) const SCATTER_BLUE: RGBColor = RGBColor(31, 119, 180);

pub(crate) const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];
