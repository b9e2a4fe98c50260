// src/specs/top250.rs
//
// One Top 250 listing page → up to 25 movies (rank left at 0).
//
// Item layout (children of each <li>):
//   div.item
//     div.pic
//     div.info
//       div.hd  > a[href] > span.title …
//       div.bd  > p (info line: "导演: …<br>1994 / 美国 / 犯罪 剧情")
//               > div.star > span ×4 (…, rating, …, "N人评价")
//               > p.quote > span.inq (summary)

use scraper::{ElementRef, Html, Selector};

use crate::{
    core::sanitize::{director_from_info, info_segments},
    data::Movie,
    error::{Error, Result},
};

const ITEMS: &str = "#content > div > div:nth-of-type(1) > ol > li";
const TITLE: &str = ":scope > div > div:nth-of-type(2) > div:nth-of-type(1) > a > span:nth-of-type(1)";
const LINK: &str = ":scope > div > div:nth-of-type(2) > div:nth-of-type(1) > a";
const INFO: &str = ":scope > div > div:nth-of-type(2) > div:nth-of-type(2) > p:nth-of-type(1)";
const RATING: &str = ":scope > div > div:nth-of-type(2) > div:nth-of-type(2) > div > span:nth-of-type(2)";
const RATING_COUNT: &str = ":scope > div > div:nth-of-type(2) > div:nth-of-type(2) > div > span:nth-of-type(4)";
const SUMMARY: &str = ":scope > div > div:nth-of-type(2) > div:nth-of-type(2) > p:nth-of-type(2) > span";

/// Compiled once per page.
struct Selectors {
    items: Selector,
    title: Selector,
    link: Selector,
    info: Selector,
    rating: Selector,
    rating_count: Selector,
    summary: Selector,
}

impl Selectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            items: selector(ITEMS)?,
            title: selector(TITLE)?,
            link: selector(LINK)?,
            info: selector(INFO)?,
            rating: selector(RATING)?,
            rating_count: selector(RATING_COUNT)?,
            summary: selector(SUMMARY)?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("bad selector {css:?}: {e}")))
}

/// Parse every list item on the page, in document order.
pub fn parse_page(html: &str) -> Result<Vec<Movie>> {
    let doc = Html::parse_document(html);
    let sel = Selectors::compile()?;

    let mut out = Vec::with_capacity(25);
    for (i, li) in doc.select(&sel.items).enumerate() {
        let movie = parse_item(li, &sel)
            .map_err(|e| Error::Parse(format!("list item {}: {e}", i + 1)))?;
        out.push(movie);
    }
    Ok(out)
}

fn parse_item(li: ElementRef<'_>, sel: &Selectors) -> Result<Movie> {
    let title = first_text(li, &sel.title);
    let link = li
        .select(&sel.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|h| h.trim().to_string())
        .unwrap_or_default();

    // The info line is structural: no fallback.
    let info = li
        .select(&sel.info)
        .next()
        .ok_or_else(|| Error::Parse(s!("info line missing")))?;
    let lines = direct_texts(info);
    let (people, facts) = match lines.as_slice() {
        [people, facts, ..] => (*people, *facts),
        _ => return Err(Error::Parse(format!(
            "info line has {} text node(s), expected 2", lines.len()
        ))),
    };

    let director = director_from_info(people);
    let mut segs = info_segments(facts).into_iter();
    let (Some(year), Some(region), Some(genre)) = (segs.next(), segs.next(), segs.next()) else {
        return Err(Error::Parse(format!("year/region/genre line too short: {facts:?}")));
    };

    Ok(Movie {
        rank: 0,
        title,
        link,
        director,
        rating: first_text(li, &sel.rating),
        rating_count: first_text(li, &sel.rating_count),
        summary: first_text(li, &sel.summary),
        year,
        region,
        genre,
    })
}

/// Text nodes that are direct children of `el`.
fn direct_texts<'a>(el: ElementRef<'a>) -> Vec<&'a str> {
    el.children()
        .filter_map(|n| n.value().as_text().map(|t| &**t))
        .collect()
}

/// Trimmed first direct text node of the first match, or "" on any miss.
fn first_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope
        .select(sel)
        .next()
        .and_then(|el| direct_texts(el).first().map(|t| t.trim().to_string()))
        .unwrap_or_default()
}
