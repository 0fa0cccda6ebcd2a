//! The extraction core: pure functions from parsed markup to validated
//! map records. Nothing in this module performs I/O or returns an error;
//! a page whose markup has drifted degrades to fewer records instead.

pub mod context;
pub mod event_urls;
pub mod map_name;
pub mod match_maps;
pub mod score;
pub mod series;
pub mod single_map;
pub mod team_names;
pub mod text_scan;

use scraper::ElementRef;

pub use event_urls::discover_match_urls;
pub use match_maps::extract_match;

/// Concatenated text of an element and all its descendants, trimmed.
///
/// The heuristics depend on combined text (a map header may spread
/// "Ascent", "50:07" and "PICK" over sibling spans), so this collects
/// every text node rather than the first.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
