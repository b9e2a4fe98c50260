// src/charts/top10.rs
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{fonts::{use_label_font, LABEL_FAMILY}, Chart, LIGHT_GREEN};
use crate::{
    analysis::top_by_comment_count,
    config::options::{ChartKind, ChartOptions},
    data::{Dataset, Movie},
    error::Result,
};

const TOP_N: usize = 10;

pub struct Top10CommentCounts;
pub static CHART: Top10CommentCounts = Top10CommentCounts;

impl Chart for Top10CommentCounts {
    fn kind(&self) -> ChartKind { ChartKind::Top10CommentCounts }
    fn label(&self) -> &'static str { "评论人数TOP10条状图" }

    fn render(&self, ds: &Dataset, out: &Path, opts: &ChartOptions) -> Result<()> {
        let top = top_by_comment_count(ds, TOP_N)?;
        use_label_font(opts)?;
        draw(&top, out)
    }
}

/// Horizontal bars labelled by title, largest at the top, value at bar end.
fn draw(top: &[(&Movie, u64)], out: &Path) -> Result<()> {
    let root = BitMapBackend::new(out, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = top.len().max(1);
    let max = top.first().map(|(_, v)| *v).unwrap_or(0);
    let x_max = max + max / 8 + 1;

    // Row i (0 = largest) sits in segment n-1-i so it is drawn on top.
    let title_at = |seg: usize| {
        n.checked_sub(seg + 1)
            .and_then(|i| top.get(i))
            .map(|(m, _)| m.title.clone())
            .unwrap_or_default()
    };

    let mut chart = ChartBuilder::on(&root)
        .caption("评论人数TOP10电影", (LABEL_FAMILY, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(220)
        .build_cartesian_2d(0u64..x_max, (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("评价人数")
        .y_desc("电影名称")
        .y_labels(n)
        .y_label_formatter(&|v| match v {
            SegmentValue::CenterOf(seg) => title_at(*seg),
            _ => s!(),
        })
        .x_label_formatter(&|v| v.to_string())
        .draw()?;

    chart.draw_series(
        Histogram::horizontal(&chart)
            .style(LIGHT_GREEN.filled())
            .margin(6)
            .data(top.iter().enumerate().map(|(i, (_, v))| (n - 1 - i, *v))),
    )?;

    let at_end = TextStyle::from((LABEL_FAMILY, 12).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    chart.draw_series(top.iter().enumerate().map(|(i, (_, v))| {
        Text::new(v.to_string(), (*v, SegmentValue::CenterOf(n - 1 - i)), at_end.clone())
    }))?;

    root.present()?;
    Ok(())
}
