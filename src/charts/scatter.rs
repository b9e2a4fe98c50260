// src/charts/scatter.rs
//
// "评价人数随评分变化": every rating_count is parsed (and a bad one fails the
// request), but the plot itself is row index vs. rating. The parsed counts
// are not drawn.

use std::path::Path;

use plotters::prelude::*;

use super::{fonts::{use_label_font, LABEL_FAMILY}, Chart, SCATTER_BLUE};
use crate::{
    analysis::{rating_counts_parsed, rating_points},
    config::options::{ChartKind, ChartOptions},
    data::Dataset,
    error::Result,
};

pub struct CommentCountByRating;
pub static CHART: CommentCountByRating = CommentCountByRating;

impl Chart for CommentCountByRating {
    fn kind(&self) -> ChartKind { ChartKind::CommentCountByRating }
    fn label(&self) -> &'static str { "评价人数随评分变化散点图" }

    fn render(&self, ds: &Dataset, out: &Path, opts: &ChartOptions) -> Result<()> {
        let _counts = rating_counts_parsed(ds)?;
        let points = rating_points(ds);
        use_label_font(opts)?;
        draw(&points, ds.len(), out)
    }
}

fn draw(points: &[(f64, f64)], rows: usize, out: &Path) -> Result<()> {
    let root = BitMapBackend::new(out, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let (lo, hi) = if lo.is_finite() { (lo - 0.1, hi + 0.1) } else { (0.0, 10.0) };
    let x_max = rows.max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption("评价人数随评分变化", (LABEL_FAMILY, 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, lo..hi)?;

    // Plain decimals on both axes, never scientific notation.
    chart
        .configure_mesh()
        .x_desc("电影索引")
        .y_desc("评分")
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.1}"))
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, SCATTER_BLUE.mix(0.5).filled())),
    )?;

    root.present()?;
    Ok(())
}
