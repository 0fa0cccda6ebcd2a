use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::extract::context::resolve_match_context;
use crate::extract::single_map::extract_single_map;
use crate::extract::text_scan;
use crate::model::MapRecord;

/// Map-container selection strategies, evaluated in order; the first one
/// that yields at least one container wins. The catch-all fifth strategy
/// lives in [`select_map_containers`].
static CONTAINER_STRATEGIES: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        ".vm-stats-game",
        ".vm-stats-gamesnav-item",
        ".match-header-vs-score",
        r#".map-item, .game-item, [class*="map-"]"#,
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

static ANY_MAP_CLASS: Lazy<Selector> = Lazy::new(|| Selector::parse(r#"[class*="map"]"#).unwrap());

/// Class fragments that mark navigation chrome rather than map results.
const CHROME_MARKERS: [&str; 4] = ["nav", "header", "footer", "sidebar"];

/// Extract every validated per-map record from one match page.
///
/// Resolution failures degrade to fewer records: a page whose team names
/// cannot be resolved produces none at all, and a page whose structured
/// containers all fail is handed to the text-scan fallback.
pub fn extract_match(document: &Html, source_url: &str) -> Vec<MapRecord> {
    let Some(context) = resolve_match_context(document, source_url) else {
        warn!(url = source_url, "no team names resolved, skipping match");
        return vec![];
    };

    let containers = select_map_containers(document);
    let mut records = containers
        .iter()
        .enumerate()
        .filter_map(|(i, container)| extract_single_map(container, &context, i + 1, source_url))
        .collect_vec();

    // Discarded containers leave gaps in the raw indices; close them.
    for (i, record) in records.iter_mut().enumerate() {
        record.map_number = (i + 1) as u32;
    }

    if records.is_empty() {
        debug!(url = source_url, "structured extraction found nothing, scanning page text");
        records = text_scan::extract_from_text(document, &context, source_url);
    }

    debug!(count = records.len(), url = source_url, "extracted map records");
    records
}

fn select_map_containers(document: &Html) -> Vec<ElementRef<'_>> {
    for selector in CONTAINER_STRATEGIES.iter() {
        let containers = document.select(selector).collect_vec();
        if !containers.is_empty() {
            return containers;
        }
    }
    // Anything map-like that is not navigation chrome.
    document
        .select(&ANY_MAP_CLASS)
        .filter(|e| {
            let class = e.value().attr("class").unwrap_or_default();
            !CHROME_MARKERS.iter().any(|marker| class.contains(marker))
        })
        .collect_vec()
}
