use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};
use strum::IntoEnumIterator;

use crate::extract::element_text;
use crate::model::MapName;

/// Structural lookups for a map name inside a container, most specific
/// first.
static NAME_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        ".vm-stats-game-header .map",
        ".vm-stats-game-header span:last-child",
        ".map-name",
        ".vm-stats-gamesnav-item-name",
        ".match-header-vs-score-map",
        r#"div[class*="map"] span"#,
        "[data-map-name]",
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

/// Embedded play times like `50:07` or `1:13:23`.
static DURATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}:\d{2}(?::\d{2})?").unwrap());
static PICK_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)pick").unwrap());
/// Whole-word matcher per known map, in enumeration order.
static MAP_WORDS: Lazy<Vec<(MapName, Regex)>> = Lazy::new(|| {
    MapName::iter()
        .map(|map| {
            let word = Regex::new(&format!(r"(?i)\b{map}\b")).unwrap();
            (map, word)
        })
        .collect()
});

/// Resolve a container's map name and embedded duration.
///
/// Structural lookups win over the raw-text scan; whichever candidate
/// wins is stripped of its duration, pick marker and non-letter noise
/// and must then equal a known map name verbatim.
pub fn resolve_map_name(container: &ElementRef) -> (Option<MapName>, Option<String>) {
    let container_text = element_text(container);

    let mut candidate = None;
    for selector in NAME_SELECTORS.iter() {
        if let Some(element) = container.select(selector).next() {
            let text = element_text(&element);
            if text.len() > 1 && !text.chars().all(|c| c.is_ascii_digit()) {
                candidate = Some(text);
                break;
            }
        }
    }

    let candidate = candidate.or_else(|| {
        let lowered = container_text.to_lowercase();
        MAP_WORDS
            .iter()
            .find(|(map, word)| {
                word.is_match(&container_text)
                    || lowered.trim().starts_with(&map.to_string().to_lowercase())
            })
            .map(|(map, _)| map.to_string())
    });

    let Some(raw) = candidate else {
        return (None, None);
    };

    let duration = DURATION.find(&raw).map(|m| m.as_str().to_string());
    let cleaned = match &duration {
        Some(d) => raw.replace(d.as_str(), ""),
        None => raw.clone(),
    };
    let cleaned = PICK_MARKER.replace_all(&cleaned, "");
    let cleaned: String = cleaned.chars().filter(|c| c.is_ascii_alphabetic()).collect();

    (MapName::from_str(&cleaned).ok(), duration)
}
