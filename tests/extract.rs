// tests/extract.rs
use douban_top250::{
    core::sanitize::{director_from_info, info_segments},
    specs::top250::parse_page,
    Error,
};

mod common;

const FIXTURE: &str = include_str!("fixtures/top250_page.html");

#[test]
fn fixture_items_parse_in_document_order() {
    let movies = parse_page(FIXTURE).unwrap();
    assert_eq!(movies.len(), 3);

    let first = &movies[0];
    assert_eq!(first.rank, 0);
    assert_eq!(first.title, "肖申克的救赎");
    assert_eq!(first.link, "https://movie.douban.com/subject/1292052/");
    assert_eq!(first.director, "弗兰克·德拉邦特 Frank Darabont");
    assert_eq!(first.rating, "9.7");
    assert_eq!(first.rating_count, "3094012人评价");
    assert_eq!(first.summary, "希望让人自由。");
    assert_eq!(first.year, "1994");
    assert_eq!(first.region, "美国");
    assert_eq!(first.genre, "犯罪 剧情");

    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["肖申克的救赎", "霸王别姬", "鬼子来了"]);
}

#[test]
fn multi_value_region_is_kept_whole() {
    let movies = parse_page(FIXTURE).unwrap();
    assert_eq!(movies[1].region, "中国大陆 中国香港");
    assert_eq!(movies[1].genre, "剧情 爱情 同性");
}

#[test]
fn missing_summary_becomes_blank() {
    let movies = parse_page(FIXTURE).unwrap();
    assert_eq!(movies[2].summary, "");
    assert_eq!(movies[2].rating, "9.3");
}

#[test]
fn missing_link_becomes_blank() {
    let item = common::item_html(7).replace(r#"<a href="https://movie.douban.com/subject/1000007/">"#, "<a>");
    let movies = parse_page(&common::page_html([item])).unwrap();
    assert_eq!(movies[0].link, "");
    assert_eq!(movies[0].title, "Movie 7");
}

#[test]
fn page_without_listing_yields_nothing() {
    let movies = parse_page("<html><body><p>检测到有异常请求</p></body></html>").unwrap();
    assert!(movies.is_empty());
}

#[test]
fn generated_page_parses_all_items() {
    let html = common::page_html((1..=25).map(common::item_html));
    let movies = parse_page(&html).unwrap();
    assert_eq!(movies.len(), 25);
    assert_eq!(movies[24].title, "Movie 25");
    assert_eq!(movies[24].director, "Director 25");
    assert_eq!(movies[24].rating_count, "10025人评价");
}

#[test]
fn short_year_region_genre_line_is_fatal() {
    let item = common::item_html(1).replace("&nbsp;/&nbsp;剧情 犯罪", "");
    let err = parse_page(&common::page_html([item])).unwrap_err();
    match err {
        Error::Parse(msg) => assert!(msg.contains("list item 1"), "{msg}"),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn missing_info_line_is_fatal() {
    let item = common::item_html(1).replace(r#"<p class="">"#, r#"<span class="">"#).replace("</p>\n      <div", "</span>\n      <div");
    let err = parse_page(&common::page_html([common::item_html(1), item])).unwrap_err();
    match err {
        Error::Parse(msg) => assert!(msg.contains("list item 2"), "{msg}"),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn director_stops_at_cast_separator() {
    let line = "  导演: 陈凯歌 Kaige Chen\u{a0}\u{a0}\u{a0}主演: 张国荣 Leslie Cheung / 张丰毅 ";
    assert_eq!(director_from_info(line), "陈凯歌 Kaige Chen");
    // No separator: the whole line, minus the label.
    assert_eq!(director_from_info("导演: 宫崎骏 Hayao Miyazaki"), "宫崎骏 Hayao Miyazaki");
}

#[test]
fn info_segments_drop_nbsp_and_trim() {
    let segs = info_segments("\n   1961(中国大陆)\u{a0}/\u{a0}中国大陆\u{a0}/\u{a0}剧情 动画 奇幻\n  ");
    assert_eq!(segs, ["1961(中国大陆)", "中国大陆", "剧情 动画 奇幻"]);
}
