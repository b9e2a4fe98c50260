// src/analysis.rs
//
// Pure summary views over a Dataset. Each chart derives exactly one of these;
// nothing here touches the disk or a drawing backend.

use std::collections::{BTreeMap, HashMap};

use crate::{
    config::consts::RATING_COUNT_SUFFIX,
    core::sanitize::strip_suffix_trimmed,
    data::{Dataset, Movie},
    error::{Error, Result},
};

/// "1500人评价" → 1500. A value without the suffix, or with a non-integer
/// prefix, is a data-shape error.
pub fn parse_rating_count(raw: &str) -> Result<u64> {
    let digits = strip_suffix_trimmed(raw, RATING_COUNT_SUFFIX).ok_or_else(|| {
        Error::DataShape(format!("rating count {raw:?} lacks the '{RATING_COUNT_SUFFIX}' suffix"))
    })?;
    digits
        .parse::<u64>()
        .map_err(|e| Error::DataShape(format!("rating count {raw:?}: {e}")))
}

/// Parse every row's rating_count, in row order. Fails on the first bad value.
pub fn rating_counts_parsed(ds: &Dataset) -> Result<Vec<u64>> {
    ds.iter().map(|m| parse_rating_count(&m.rating_count)).collect()
}

/// Movies per year, ascending by year. Counts sum to `ds.len()`.
pub fn year_counts(ds: &Dataset) -> Vec<(String, usize)> {
    value_counts(ds.iter().map(|m| m.year.as_str()))
}

/// Movies per rating value (as text), ascending.
pub fn rating_counts(ds: &Dataset) -> Vec<(String, usize)> {
    value_counts(ds.iter().map(|m| m.rating.as_str()))
}

fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts.into_iter().map(|(k, n)| (k.to_string(), n)).collect()
}

/// One pie slice: a rating value, its row count and its fraction of all rows.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingShare {
    pub rating: String,
    pub count: usize,
    pub share: f64,
}

impl RatingShare {
    /// Slice label, e.g. "12.4%".
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.share * 100.0)
    }

    /// Legend line, e.g. "9.7 (31次)".
    pub fn legend_label(&self) -> String {
        format!("{} ({}次)", self.rating, self.count)
    }
}

/// `rating_counts` with each group's fraction of the table. Empty for an
/// empty dataset.
pub fn rating_shares(ds: &Dataset) -> Vec<RatingShare> {
    let counts = rating_counts(ds);
    let total: usize = counts.iter().map(|(_, c)| *c).sum();
    if total == 0 {
        return Vec::new();
    }
    counts
        .into_iter()
        .map(|(rating, count)| RatingShare { rating, count, share: count as f64 / total as f64 })
        .collect()
}

/// The `n` movies with the most ratings, largest first.
/// Equal counts keep their original row order.
pub fn top_by_comment_count(ds: &Dataset, n: usize) -> Result<Vec<(&Movie, u64)>> {
    let counts = rating_counts_parsed(ds)?;
    let mut ranked: Vec<(&Movie, u64)> = ds.iter().zip(counts).collect();
    // Stable sort: ties stay in row order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    Ok(ranked)
}

/// Every non-empty genre field, space-joined.
pub fn genre_text(ds: &Dataset) -> String {
    ds.iter()
        .map(|m| m.genre.trim())
        .filter(|g| !g.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace-separated word frequencies, most frequent first;
/// ties in order of first appearance.
pub fn genre_frequencies(text: &str) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in text.split_whitespace() {
        let n = counts.entry(word).or_insert(0);
        if *n == 0 {
            order.push(word);
        }
        *n += 1;
    }
    let mut out: Vec<(String, usize)> = order
        .into_iter()
        .map(|w| (w.to_string(), counts[w]))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Row index vs. numeric rating, for the scatter chart.
/// Ratings that are not numbers are left out.
pub fn rating_points(ds: &Dataset) -> Vec<(f64, f64)> {
    ds.iter()
        .enumerate()
        .filter_map(|(i, m)| m.rating.trim().parse::<f64>().ok().map(|r| (i as f64, r)))
        .collect()
}
