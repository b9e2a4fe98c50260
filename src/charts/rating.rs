// src/charts/rating.rs
//
// Pie of rating values, drawn as polygons in pixel space: first slice starts
// at 12 o'clock, slices run counter-clockwise, each labelled at 85% radius.

use std::f64::consts::PI;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{fonts::{use_label_font, LABEL_FAMILY}, Chart, PALETTE};
use crate::{
    analysis::{rating_shares, RatingShare},
    config::options::{ChartKind, ChartOptions},
    data::Dataset,
    error::Result,
};

const LEGEND_W: i32 = 220;

pub struct RatingDistribution;
pub static CHART: RatingDistribution = RatingDistribution;

impl Chart for RatingDistribution {
    fn kind(&self) -> ChartKind { ChartKind::RatingDistribution }
    fn label(&self) -> &'static str { "豆瓣电影Top 250评分分布饼图" }

    fn render(&self, ds: &Dataset, out: &Path, opts: &ChartOptions) -> Result<()> {
        let slices = rating_shares(ds);
        use_label_font(opts)?;
        draw(&slices, out)
    }
}

fn draw(slices: &[RatingShare], out: &Path) -> Result<()> {
    let root = BitMapBackend::new(out, (900, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let area = root.titled("豆瓣电影Top 250评分分布", (LABEL_FAMILY, 30))?;

    let (w, h) = area.dim_in_pixel();
    let (w, h) = (w as i32, h as i32);
    let center = ((w - LEGEND_W) / 2, h / 2);
    let radius = (center.0.min(center.1) - 20).max(10) as f64;

    let centered = TextStyle::from((LABEL_FAMILY, 16).into_font()).pos(Pos::new(HPos::Center, VPos::Center));

    let mut from = PI / 2.0;
    for (i, slice) in slices.iter().enumerate() {
        let sweep = 2.0 * PI * slice.share;
        let color = PALETTE[i % PALETTE.len()];

        area.draw(&Polygon::new(wedge(center, radius, from, from + sweep), color.filled()))?;

        let at = polar(center, radius * 0.85, from + sweep / 2.0);
        area.draw(&Text::new(slice.percent_label(), at, centered.clone()))?;

        from += sweep;
    }

    // Legend: "评分" then one "<rating> (<n>次)" line per slice.
    let x0 = w - LEGEND_W + 20;
    let mut y = 30;
    area.draw(&Text::new("评分", (x0, y), (LABEL_FAMILY, 18).into_font()))?;
    for (i, slice) in slices.iter().enumerate() {
        y += 24;
        let color = PALETTE[i % PALETTE.len()];
        area.draw(&Rectangle::new([(x0, y), (x0 + 14, y + 14)], color.filled()))?;
        area.draw(&Text::new(slice.legend_label(), (x0 + 22, y), (LABEL_FAMILY, 14).into_font()))?;
    }

    root.present()?;
    Ok(())
}

/// Pixel point at `r` from `c`, angle in radians counter-clockwise from 3 o'clock.
fn polar(c: (i32, i32), r: f64, theta: f64) -> (i32, i32) {
    (
        c.0 + (r * theta.cos()).round() as i32,
        c.1 - (r * theta.sin()).round() as i32,
    )
}

/// Closed slice outline: centre, then the arc in ~1° steps.
fn wedge(c: (i32, i32), r: f64, from: f64, to: f64) -> Vec<(i32, i32)> {
    let steps = (((to - from).to_degrees()).ceil() as usize).max(1);
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push(c);
    for s in 0..=steps {
        let t = from + (to - from) * s as f64 / steps as f64;
        pts.push(polar(c, r, t));
    }
    pts
}
