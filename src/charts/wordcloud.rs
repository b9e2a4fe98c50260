// src/charts/wordcloud.rs
//
// Genre word cloud. Words are sized by frequency and placed on an
// Archimedean spiral from the centre; a word that cannot be placed without
// overlapping or leaving the canvas is dropped.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{fonts::{use_font, CLOUD_FAMILY}, Chart};
use crate::{
    analysis::{genre_frequencies, genre_text},
    config::options::{ChartKind, ChartOptions},
    data::Dataset,
    error::{Error, Result},
};

const CANVAS: (u32, u32) = (1000, 560);
const TITLE_H: i32 = 60;
const MIN_SIZE: f64 = 16.0;
const MAX_SIZE: f64 = 96.0;
const SPIRAL_STEPS: usize = 4000;

pub struct GenreWordCloud;
pub static CHART: GenreWordCloud = GenreWordCloud;

impl Chart for GenreWordCloud {
    fn kind(&self) -> ChartKind { ChartKind::GenreWordCloud }
    fn label(&self) -> &'static str { "电影类型词云图" }

    fn render(&self, ds: &Dataset, out: &Path, opts: &ChartOptions) -> Result<()> {
        // The cloud font is the one hard external dependency of this chart.
        use_font(CLOUD_FAMILY, &opts.cloud_font)?;

        let words = genre_frequencies(&genre_text(ds));
        if words.is_empty() {
            return Err(Error::DataShape(s!("no genre words to draw")));
        }
        draw(&words, out)
    }
}

/// Axis-aligned box, centre + half extents, in pixels.
#[derive(Clone, Copy)]
struct Placed {
    x: i32,
    y: i32,
    hw: i32,
    hh: i32,
}

impl Placed {
    fn overlaps(&self, o: &Placed) -> bool {
        (self.x - o.x).abs() < self.hw + o.hw && (self.y - o.y).abs() < self.hh + o.hh
    }

    fn inside(&self, w: i32, h: i32) -> bool {
        self.x - self.hw >= 0 && self.x + self.hw <= w && self.y - self.hh >= 0 && self.y + self.hh <= h
    }
}

fn draw(words: &[(String, usize)], out: &Path) -> Result<()> {
    let root = BitMapBackend::new(out, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let (w, _) = root.dim_in_pixel();
    let title = TextStyle::from((CLOUD_FAMILY, 28).into_font()).pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new("电影类型词云图", (w as i32 / 2, TITLE_H / 2), title))?;

    let cloud = root.margin(TITLE_H as u32, 10, 10, 10);
    place_words(&cloud, words)?;

    root.present()?;
    Ok(())
}

fn place_words(area: &DrawingArea<BitMapBackend<'_>, Shift>, words: &[(String, usize)]) -> Result<()> {
    let (w, h) = area.dim_in_pixel();
    let (w, h) = (w as i32, h as i32);
    let (cx, cy) = (w / 2, h / 2);

    let max = words.first().map(|(_, c)| *c).unwrap_or(1) as f64;
    let min = words.last().map(|(_, c)| *c).unwrap_or(1) as f64;
    let span = (max - min).max(1.0);

    let mut placed: Vec<Placed> = Vec::with_capacity(words.len());

    for (i, (word, count)) in words.iter().enumerate() {
        let ratio = (*count as f64 - min) / span;
        let size = MIN_SIZE + (MAX_SIZE - MIN_SIZE) * ratio;
        let font = (CLOUD_FAMILY, size).into_font();

        let (tw, th) = area.estimate_text_size(word, &TextStyle::from(font.clone()))?;
        let (hw, hh) = (tw as i32 / 2 + 2, th as i32 / 2 + 2);

        let Some(spot) = spiral(cx, cy).find_map(|(x, y)| {
            let b = Placed { x, y, hw, hh };
            (b.inside(w, h) && !placed.iter().any(|p| p.overlaps(&b))).then_some(b)
        }) else {
            continue;
        };
        placed.push(spot);

        let hue = ((i * 47) % 360) as f64 / 360.0;
        let color = HSLColor(hue, 0.65, 0.35 + 0.2 * (1.0 - ratio));
        let style = font.color(&color).pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(word.as_str(), (spot.x, spot.y), style))?;
    }
    Ok(())
}

/// Points on an Archimedean spiral around (cx, cy), flattened to 2:1 to
/// match the canvas.
fn spiral(cx: i32, cy: i32) -> impl Iterator<Item = (i32, i32)> {
    (0..SPIRAL_STEPS).map(move |step| {
        let t = step as f64 * 0.1;
        let r = 2.0 * t;
        (cx + (r * t.cos()) as i32, cy + (0.5 * r * t.sin()) as i32)
    })
}
