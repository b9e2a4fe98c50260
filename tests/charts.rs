// tests/charts.rs
use std::path::Path;

use douban_top250::{
    charts::router,
    config::options::ChartKind,
    data::Dataset,
    runner, store, Error,
};

mod common;
use common::{movie, tmp_options};

fn rows() -> Dataset {
    Dataset::from_movies(
        (1..=30)
            .map(|i| {
                let mut m = movie(
                    &format!("电影{i}"),
                    &format!("9.{}", i % 10),
                    &format!("{}人评价", 1000 * i),
                    &format!("{}", 1990 + i % 7),
                    ["剧情 犯罪", "爱情", "剧情 动画 奇幻"][i % 3],
                );
                m.rank = i as u32;
                m
            })
            .collect(),
    )
}

#[test]
fn chart_names_round_trip_through_from_str() {
    for kind in ChartKind::ALL {
        assert_eq!(kind.slug().parse::<ChartKind>().unwrap(), kind);
        assert_eq!(router::chart_for(kind).kind(), kind);
    }
    assert!(matches!("pie".parse::<ChartKind>(), Err(Error::Usage(_))));
}

#[test]
fn buttons_follow_chart_order() {
    let labels: Vec<&str> = router::all_charts().iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        [
            "Top250年份分布条状图",
            "豆瓣电影Top 250评分分布饼图",
            "评价人数随评分变化散点图",
            "评论人数TOP10条状图",
            "电影类型词云图",
        ]
    );
}

#[test]
fn scatter_fails_on_malformed_rating_count_before_drawing() {
    let (opts, _dir) = tmp_options("scatter_bad");
    let mut movies = rows().movies().to_vec();
    movies[7].rating_count = s("12345");
    store::save(&opts.store, &Dataset::from_movies(movies)).unwrap();

    let err = runner::plot(ChartKind::CommentCountByRating, &opts).unwrap_err();
    assert!(matches!(err, Error::DataShape(_)), "{err:?}");
    assert!(!opts.charts.out_path(ChartKind::CommentCountByRating).exists());
}

#[test]
fn word_cloud_without_font_is_a_font_error() {
    let (opts, _dir) = tmp_options("cloud_font");
    store::save(&opts.store, &rows()).unwrap();

    let err = runner::plot(ChartKind::GenreWordCloud, &opts).unwrap_err();
    match err {
        Error::Font { path, .. } => assert_eq!(path, opts.charts.cloud_font),
        other => panic!("expected Font, got {other:?}"),
    }
    assert!(!opts.charts.out_path(ChartKind::GenreWordCloud).exists());
}

#[test]
fn label_font_missing_is_a_font_error() {
    let (opts, _dir) = tmp_options("label_font");
    store::save(&opts.store, &rows()).unwrap();

    let err = runner::plot(ChartKind::YearDistribution, &opts).unwrap_err();
    assert!(matches!(err, Error::Font { .. }), "{err:?}");
}

#[test]
fn plot_without_dataset_fails() {
    let (opts, _dir) = tmp_options("no_data");
    assert!(runner::plot(ChartKind::RatingDistribution, &opts).is_err());
}

/// Latin-only, but any TrueType file exercises every drawing path.
const TEST_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSans.ttf");

#[test]
fn every_chart_renders_at_its_canvas_size() {
    let (mut opts, _dir) = tmp_options("render_all");
    let font = Path::new(TEST_FONT);
    opts.charts.set_fonts(Some(font), Some(font));
    store::save(&opts.store, &rows()).unwrap();

    let expected = [
        (ChartKind::YearDistribution, (1400, 800)),
        (ChartKind::RatingDistribution, (900, 800)),
        (ChartKind::CommentCountByRating, (1200, 600)),
        (ChartKind::Top10CommentCounts, (1000, 600)),
        (ChartKind::GenreWordCloud, (1000, 560)),
    ];
    for (kind, (w, h)) in expected {
        let out = runner::plot(kind, &opts).unwrap();
        assert_eq!(out, opts.charts.out_path(kind));
        let img = image::open(&out).unwrap();
        assert_eq!((img.width(), img.height()), (w, h), "{kind:?}");
    }
}

#[test]
fn rerender_overwrites_the_same_file() {
    let (mut opts, _dir) = tmp_options("rerender");
    let font = Path::new(TEST_FONT);
    opts.charts.set_fonts(Some(font), Some(font));
    store::save(&opts.store, &rows()).unwrap();

    let first = runner::plot(ChartKind::Top10CommentCounts, &opts).unwrap();
    let second = runner::plot(ChartKind::Top10CommentCounts, &opts).unwrap();
    assert_eq!(first, second);
    assert!(second.is_file());
}

fn s(v: &str) -> String { v.to_string() }
