// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://movie.douban.com/top250";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36 Edg/108.0.1462.46";
pub const PAGE_COUNT: usize = 10;
pub const PAGE_SIZE: usize = 25;

// Persisted dataset
pub const DATA_DIR: &str = ".";
pub const XLSX_FILE: &str = "豆瓣电影top250数据.xlsx";
pub const CSV_FILE: &str = "豆瓣电影top250数据.csv";
pub const SHEET_NAME: &str = "豆瓣电影top250数据";

/// On-disk column labels, in schema order:
/// rank, title, link, director, rating, rating_count, summary, year, region, genre.
pub const COLUMNS: [&str; 10] = [
    "序号", "标题", "链接", "导演", "评分", "评价人数", "简介", "年份", "地区", "类型",
];

/// Suffix carried by every rating_count value on the site.
pub const RATING_COUNT_SUFFIX: &str = "人评价";

// Chart images
pub const YEAR_CHART_FILE: &str = "year_distribution.png";
pub const RATING_CHART_FILE: &str = "rating_distribution.png";
pub const SCATTER_CHART_FILE: &str = "comment_count_by_rating.png";
pub const TOP10_CHART_FILE: &str = "top10_comment_counts.png";
pub const CLOUD_CHART_FILE: &str = "genre_wordcloud.png";

// Fonts (must cover CJK)
#[cfg(target_os = "windows")]
pub const LABEL_FONT: &str = r"C:\Windows\Fonts\simhei.ttf";
#[cfg(target_os = "windows")]
pub const CLOUD_FONT: &str = r"C:\Windows\Fonts\msyh.ttc";

#[cfg(target_os = "macos")]
pub const LABEL_FONT: &str = "/System/Library/Fonts/STHeiti Medium.ttc";
#[cfg(target_os = "macos")]
pub const CLOUD_FONT: &str = "/System/Library/Fonts/STHeiti Light.ttc";

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const LABEL_FONT: &str = "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const CLOUD_FONT: &str = "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc";

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_FILTER: &str = "info";

// Window
pub const WINDOW_TITLE: &str = "豆瓣电影Top 250数据分析";
pub const WINDOW_W: u32 = 400;
pub const WINDOW_H: u32 = 300;
pub const STATUS_READY: &str = "就绪";
