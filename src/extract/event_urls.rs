use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

const BASE_URL: &str = "https://www.vlr.gg";

/// Places where event pages link their matches, broadest last.
static LINK_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        r#"a[href*="/match/"]"#,
        r#"a[href*="/matches/"]"#,
        r#".wf-card a[href*="/"]"#,
        ".match-item a",
        r#"tr a[href*="/"]"#,
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

/// Match pages carry a numeric id path segment.
static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+/").unwrap());

/// Link fragments that mark non-match pages.
// TODO: slugs for teams literally named "Team ..." trip the `team`
// marker and get skipped; anchoring these to whole path segments would
// keep them.
const SKIP_MARKERS: [&str; 6] = ["forum", "ranking", "team", "player", "event", "stats"];

/// Collect candidate match-page URLs from an event page: absolutized,
/// stripped of query/fragment, deduplicated in document order.
pub fn discover_match_urls(document: &Html) -> Vec<String> {
    let mut urls = vec![];
    for selector in LINK_SELECTORS.iter() {
        for link in document.select(selector) {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            if !href.contains("/match/") && !NUMERIC_SEGMENT.is_match(href) {
                continue;
            }
            if SKIP_MARKERS.iter().any(|marker| href.contains(marker)) {
                continue;
            }
            let full = if href.starts_with('/') {
                format!("{BASE_URL}{href}")
            } else {
                href.to_string()
            };
            if NUMERIC_SEGMENT.is_match(&full) {
                urls.push(full);
            }
        }
    }

    urls.into_iter()
        .filter(|url| url.contains("vlr.gg") && NUMERIC_SEGMENT.is_match(url))
        .map(|url| {
            url.split(['?', '#'])
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .unique()
        .collect_vec()
}
