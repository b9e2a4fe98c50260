// src/core/sanitize.rs

const NBSP: char = '\u{a0}';

/// "导演: 弗兰克·德拉邦特 Frank Darabont\u{a0}\u{a0}\u{a0}主演: …" → "弗兰克·德拉邦特 Frank Darabont"
///
/// A run of three NBSPs separates director from cast; it becomes a tab and
/// only the first tab-separated segment is kept.
pub fn director_from_info(line: &str) -> String {
    let tabbed = line.trim().replace("\u{a0}\u{a0}\u{a0}", "\t");
    let first = tabbed.split('\t').next().unwrap_or("");
    first.replace("导演: ", "")
}

/// "1994\u{a0}/\u{a0}美国\u{a0}/\u{a0}犯罪 剧情" → ["1994", "美国", "犯罪 剧情"]
///
/// NBSPs are dropped before splitting, each segment is trimmed.
pub fn info_segments(line: &str) -> Vec<String> {
    line.trim()
        .replace(NBSP, "")
        .split('/')
        .map(|seg| seg.trim().to_string())
        .collect()
}

/// "1500人评价" → Some("1500"); anything without the suffix → None.
pub fn strip_suffix_trimmed<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    s.trim().strip_suffix(suffix).map(str::trim)
}
