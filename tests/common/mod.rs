// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use douban_top250::{config::options::AppOptions, core::Fetch, data::Movie, Error, Result};

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("douban_top250_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Options rooted in a fresh temp dir, fonts pointed at files that don't exist.
pub fn tmp_options(name: &str) -> (AppOptions, PathBuf) {
    let dir = tmp_dir(name);
    let mut opts = AppOptions::default().with_dir(&dir);
    opts.charts.label_font = dir.join("missing-label.ttf");
    opts.charts.cloud_font = dir.join("missing-cloud.ttf");
    (opts, dir)
}

pub fn movie(title: &str, rating: &str, count: &str, year: &str, genre: &str) -> Movie {
    Movie {
        title: title.into(),
        rating: rating.into(),
        rating_count: count.into(),
        year: year.into(),
        genre: genre.into(),
        ..Default::default()
    }
}

/// One listing item in the site's markup; `n` is its 1-based position overall.
pub fn item_html(n: usize) -> String {
    format!(
        r#"<li><div class="item">
  <div class="pic"><em>{n}</em></div>
  <div class="info">
    <div class="hd"><a href="https://movie.douban.com/subject/{id}/"><span class="title">Movie {n}</span><span class="title">&nbsp;/&nbsp;Alt</span></a></div>
    <div class="bd">
      <p class="">导演: Director {n}&nbsp;&nbsp;&nbsp;主演: Someone<br>
        {year}&nbsp;/&nbsp;美国&nbsp;/&nbsp;剧情 犯罪</p>
      <div class="star"><span class="rating5-t"></span><span class="rating_num">9.{d}</span><span></span><span>{count}人评价</span></div>
      <p class="quote"><span class="inq">Quote {n}</span></p>
    </div>
  </div>
</div></li>"#,
        id = 1_000_000 + n,
        year = 1950 + n % 70,
        d = n % 10,
        count = 10_000 + n,
    )
}

pub fn page_html(items: impl IntoIterator<Item = String>) -> String {
    let body: String = items.into_iter().collect();
    format!(
        r#"<html><body><div id="content"><h1>豆瓣电影 Top 250</h1>
<div class="grid-16-8 clearfix"><div class="article"><ol class="grid_view">{body}</ol></div></div>
</div></body></html>"#
    )
}

/// Serves `page_size` generated items per offset and records every request.
pub struct FakeSite {
    pub page_size: usize,
    pub fail_at: Option<usize>,
    pub requests: RefCell<Vec<usize>>,
}

impl FakeSite {
    pub fn new(page_size: usize) -> Self {
        Self { page_size, fail_at: None, requests: RefCell::new(Vec::new()) }
    }

    pub fn failing_at(page_size: usize, start: usize) -> Self {
        Self { fail_at: Some(start), ..Self::new(page_size) }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Fetch for FakeSite {
    fn fetch_page(&self, start: usize) -> Result<String> {
        self.requests.borrow_mut().push(start);
        if self.fail_at == Some(start) {
            return Err(Error::Io(std::io::Error::other("connection reset")));
        }
        Ok(page_html((start + 1..=start + self.page_size).map(item_html)))
    }
}
