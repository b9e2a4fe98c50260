// src/charts/year.rs
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use super::{fonts::{use_label_font, LABEL_FAMILY}, Chart, SKY_BLUE};
use crate::{
    analysis::year_counts,
    config::options::{ChartKind, ChartOptions},
    data::Dataset,
    error::Result,
};

pub struct YearDistribution;
pub static CHART: YearDistribution = YearDistribution;

impl Chart for YearDistribution {
    fn kind(&self) -> ChartKind { ChartKind::YearDistribution }
    fn label(&self) -> &'static str { "Top250年份分布条状图" }

    fn render(&self, ds: &Dataset, out: &Path, opts: &ChartOptions) -> Result<()> {
        let counts = year_counts(ds);
        use_label_font(opts)?;
        draw(&counts, out)
    }
}

/// Vertical bars by year (ascending), count printed above each bar.
fn draw(counts: &[(String, usize)], out: &Path) -> Result<()> {
    let root = BitMapBackend::new(out, (1400, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = counts.len().max(1);
    let top = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let y_max = top + top / 10 + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption("豆瓣电影Top250年份分布", (LABEL_FAMILY, 32))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("年份")
        .y_desc("电影数量")
        .x_labels(n)
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => counts.get(*i).map(|(y, _)| y.clone()).unwrap_or_default(),
            _ => s!(),
        })
        .x_label_style((LABEL_FAMILY, 12).into_font().transform(FontTransform::Rotate90))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(SKY_BLUE.filled())
            .margin(2)
            .data(counts.iter().enumerate().map(|(i, (_, c))| (i, *c))),
    )?;

    let above = TextStyle::from((LABEL_FAMILY, 13).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(counts.iter().enumerate().map(|(i, (_, c))| {
        Text::new(c.to_string(), (SegmentValue::CenterOf(i), *c), above.clone())
    }))?;

    root.present()?;
    Ok(())
}
