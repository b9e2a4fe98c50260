// src/charts/router.rs
use crate::config::options::ChartKind::{self, *};
use super::{rating, scatter, top10, wordcloud, year, Chart};

/// Button order in the window.
pub static CHARTS: &[&'static dyn Chart] = &[
    &year::CHART,
    &rating::CHART,
    &scatter::CHART,
    &top10::CHART,
    &wordcloud::CHART,
];

pub fn all_charts() -> &'static [&'static dyn Chart] {
    CHARTS
}

pub fn chart_for(kind: ChartKind) -> &'static dyn Chart {
    match kind {
        YearDistribution     => &year::CHART,
        RatingDistribution   => &rating::CHART,
        CommentCountByRating => &scatter::CHART,
        Top10CommentCounts   => &top10::CHART,
        GenreWordCloud       => &wordcloud::CHART,
    }
}
