// tests/analysis.rs
use douban_top250::{
    analysis::{
        genre_frequencies, genre_text, parse_rating_count, rating_counts, rating_points,
        rating_shares, top_by_comment_count, year_counts,
    },
    data::Dataset,
    Error,
};

mod common;
use common::movie;

fn sample() -> Dataset {
    Dataset::from_movies(vec![
        movie("A", "9.7", "100人评价", "1994", "剧情 犯罪"),
        movie("B", "9.6", "200人评价", "1993", "剧情 爱情 同性"),
        movie("C", "9.7", "50人评价", "1994", "剧情 喜剧"),
        movie("D", "9.5", "200人评价", "2001", ""),
    ])
}

#[test]
fn rating_count_parses_only_with_suffix() {
    assert_eq!(parse_rating_count("1500人评价").unwrap(), 1500);
    assert_eq!(parse_rating_count(" 3094012人评价 ").unwrap(), 3_094_012);
    assert!(matches!(parse_rating_count("1500"), Err(Error::DataShape(_))));
    assert!(matches!(parse_rating_count("一千人评价"), Err(Error::DataShape(_))));
    assert!(matches!(parse_rating_count(""), Err(Error::DataShape(_))));
}

#[test]
fn year_counts_are_ascending_and_sum_to_rows() {
    let ds = sample();
    let counts = year_counts(&ds);
    assert_eq!(
        counts,
        [(s("1993"), 1), (s("1994"), 2), (s("2001"), 1)]
    );
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), ds.len());
}

#[test]
fn rating_counts_group_by_text() {
    assert_eq!(
        rating_counts(&sample()),
        [(s("9.5"), 1), (s("9.6"), 1), (s("9.7"), 2)]
    );
}

#[test]
fn rating_shares_format_percent_and_legend() {
    let shares = rating_shares(&sample());
    let labels: Vec<(String, String)> = shares
        .iter()
        .map(|s| (s.percent_label(), s.legend_label()))
        .collect();
    assert_eq!(
        labels,
        [
            (s("25.0%"), s("9.5 (1次)")),
            (s("25.0%"), s("9.6 (1次)")),
            (s("50.0%"), s("9.7 (2次)")),
        ]
    );
    let total: f64 = shares.iter().map(|s| s.share).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn rating_share_rounds_to_one_decimal() {
    let ds = Dataset::from_movies(vec![
        movie("a", "9.0", "1人评价", "2000", ""),
        movie("b", "9.1", "1人评价", "2000", ""),
        movie("c", "9.1", "1人评价", "2000", ""),
    ]);
    let shares = rating_shares(&ds);
    assert_eq!(shares[0].percent_label(), "33.3%");
    assert_eq!(shares[1].percent_label(), "66.7%");
}

#[test]
fn rating_shares_of_empty_table_is_empty() {
    assert!(rating_shares(&Dataset::default()).is_empty());
}

#[test]
fn top_by_comment_count_is_descending_and_stable() {
    let ds = sample();
    let top = top_by_comment_count(&ds, 3).unwrap();
    let got: Vec<(&str, u64)> = top.iter().map(|(m, n)| (m.title.as_str(), *n)).collect();
    // B and D tie at 200; B comes first in row order.
    assert_eq!(got, [("B", 200), ("D", 200), ("A", 100)]);
}

#[test]
fn three_rows_rank_by_parsed_count() {
    let ds = Dataset::from_movies(vec![
        movie("x", "9.0", "100人评价", "2000", ""),
        movie("y", "9.0", "50人评价", "2000", ""),
        movie("z", "9.0", "200人评价", "2000", ""),
    ]);
    let counts: Vec<u64> = top_by_comment_count(&ds, 10).unwrap().into_iter().map(|(_, n)| n).collect();
    assert_eq!(counts, [200, 100, 50]);
}

#[test]
fn top_by_comment_count_with_fewer_rows_than_n() {
    let ds = sample();
    assert_eq!(top_by_comment_count(&ds, 10).unwrap().len(), 4);
}

#[test]
fn top_by_comment_count_fails_on_malformed_value() {
    let mut movies = sample().movies().to_vec();
    movies[2].rating_count = s("50");
    let ds = Dataset::from_movies(movies);
    assert!(matches!(top_by_comment_count(&ds, 10), Err(Error::DataShape(_))));
}

#[test]
fn genre_words_counted_across_rows() {
    let text = genre_text(&sample());
    assert_eq!(text, "剧情 犯罪 剧情 爱情 同性 剧情 喜剧");

    let freq = genre_frequencies(&text);
    assert_eq!(freq[0], (s("剧情"), 3));
    // Ties keep first-appearance order.
    let rest: Vec<&str> = freq[1..].iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(rest, ["犯罪", "爱情", "同性", "喜剧"]);
}

#[test]
fn rating_points_skip_non_numeric() {
    let mut movies = sample().movies().to_vec();
    movies[1].rating = s("");
    let pts = rating_points(&Dataset::from_movies(movies));
    assert_eq!(pts, [(0.0, 9.7), (2.0, 9.7), (3.0, 9.5)]);
}

fn s(v: &str) -> String { v.to_string() }
