use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::extract::element_text;
use crate::extract::team_names::resolve_team_names;
use crate::model::{MatchContext, SeriesFormat};

static TOURNAMENT_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        ".match-header-event .wf-label-med",
        ".match-header-event",
        ".event-name",
        ".tournament-name",
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

static FORMAT_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [".match-header-vs-note", ".match-format", ".bo-indicator"]
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});

static DATE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [".moment-tz-convert", ".match-header-date", ".date"]
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});

static MAP_STAT_CONTAINERS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".vm-stats-game").unwrap());

/// Resolve the match-level context for a page, or nothing if the team
/// names cannot be found (a team-less match produces no records).
pub fn resolve_match_context(document: &Html, source_url: &str) -> Option<MatchContext> {
    let (team_a, team_b) = resolve_team_names(document, source_url)?;
    Some(MatchContext {
        team_a,
        team_b,
        tournament: resolve_tournament(document),
        match_type: resolve_match_type(document),
        date: resolve_date(document),
    })
}

fn first_selector_text(document: &Html, selectors: &[Selector]) -> Option<String> {
    selectors
        .iter()
        .find_map(|s| document.select(s).next().map(|e| element_text(&e)))
}

fn resolve_tournament(document: &Html) -> String {
    first_selector_text(document, &TOURNAMENT_SELECTORS)
        .unwrap_or_else(|| "Unknown Tournament".to_string())
}

fn resolve_date(document: &Html) -> String {
    first_selector_text(document, &DATE_SELECTORS).unwrap_or_else(|| "Unknown Date".to_string())
}

fn resolve_match_type(document: &Html) -> SeriesFormat {
    for selector in FORMAT_SELECTORS.iter() {
        if let Some(element) = document.select(selector).next() {
            let text = element_text(&element).to_lowercase();
            if text.contains("bo5") || text.contains("best of 5") {
                return SeriesFormat::Bo5;
            }
            if text.contains("bo3") || text.contains("best of 3") {
                return SeriesFormat::Bo3;
            }
            if text.contains("bo1") || text.contains("best of 1") {
                return SeriesFormat::Bo1;
            }
        }
    }

    // No explicit note anywhere; infer from how many per-map stat
    // containers the page carries.
    match document.select(&MAP_STAT_CONTAINERS).count() {
        n if n >= 4 => SeriesFormat::Bo5,
        n if n >= 3 => SeriesFormat::Bo3,
        _ => SeriesFormat::Bo1,
    }
}
