// src/data.rs
//
// The ranked-movie table.
//
// - Movie:          one list item, field order = on-disk column order.
// - Dataset:        ordered, read-only table produced by a scrape or a reload.
// - DatasetBuilder: the only way to create a Dataset from scraped items;
//                   it owns the running rank counter.

use serde::{Deserialize, Serialize};

/// One ranked item. Serde names are the on-disk column labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    #[serde(rename = "序号")]
    pub rank: u32,
    #[serde(rename = "标题")]
    pub title: String,
    #[serde(rename = "链接")]
    pub link: String,
    #[serde(rename = "导演")]
    pub director: String,
    /// Kept as text; plotted as a category.
    #[serde(rename = "评分")]
    pub rating: String,
    /// "<int>人评价"
    #[serde(rename = "评价人数")]
    pub rating_count: String,
    #[serde(rename = "简介")]
    pub summary: String,
    #[serde(rename = "年份")]
    pub year: String,
    #[serde(rename = "地区")]
    pub region: String,
    #[serde(rename = "类型")]
    pub genre: String,
}

impl Movie {
    /// Cells in schema order, all as text.
    pub fn to_row(&self) -> [String; 10] {
        [
            self.rank.to_string(),
            self.title.clone(),
            self.link.clone(),
            self.director.clone(),
            self.rating.clone(),
            self.rating_count.clone(),
            self.summary.clone(),
            self.year.clone(),
            self.region.clone(),
            self.genre.clone(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    movies: Vec<Movie>,
}

impl Dataset {
    /// Wrap rows that already carry their ranks (e.g. reloaded from disk).
    pub fn from_movies(movies: Vec<Movie>) -> Self { Self { movies } }

    pub fn movies(&self) -> &[Movie] { &self.movies }
    pub fn len(&self) -> usize { self.movies.len() }
    pub fn is_empty(&self) -> bool { self.movies.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Movie> { self.movies.iter() }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;
    fn into_iter(self) -> Self::IntoIter { self.movies.iter() }
}

/// Accumulates scraped items in fetch order and numbers them 1, 2, 3, …
/// across all pages. No dedup, no sort.
#[derive(Debug)]
pub struct DatasetBuilder {
    next_rank: u32,
    movies: Vec<Movie>,
}

impl Default for DatasetBuilder {
    fn default() -> Self { Self::new() }
}

impl DatasetBuilder {
    pub fn new() -> Self { Self { next_rank: 1, movies: Vec::new() } }

    pub fn with_capacity(n: usize) -> Self {
        Self { next_rank: 1, movies: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, mut movie: Movie) -> u32 {
        let rank = self.next_rank;
        movie.rank = rank;
        self.movies.push(movie);
        self.next_rank += 1;
        rank
    }

    pub fn extend<I: IntoIterator<Item = Movie>>(&mut self, movies: I) {
        for m in movies {
            self.push(m);
        }
    }

    pub fn len(&self) -> usize { self.movies.len() }
    pub fn is_empty(&self) -> bool { self.movies.is_empty() }

    pub fn finish(self) -> Dataset { Dataset { movies: self.movies } }
}
