use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::extract::element_text;
use crate::extract::map_name::resolve_map_name;
use crate::extract::score::is_valid_score;
use crate::model::{MapRecord, MapWinner, MatchContext};

/// Structural score lookups inside a map container, most reliable first.
static SCORE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        ".vm-stats-game-score div",
        ".vm-stats-game-score span",
        ".match-header-vs-score div",
        ".score-team",
        r#"div[class*="score"]:not([class*="time"]):not([class*="duration"])"#,
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

static LONG_TIMESTAMP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}:\d{2}:\d{2}").unwrap());
static SHORT_TIMESTAMP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}:\d{2}").unwrap());
static SCORE_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\s*-\s*(\d{1,2})\b").unwrap());

/// Extract zero-or-one validated map record from one container.
///
/// The map name must resolve to a known map, and some tier of the score
/// cascade must produce a validator-passing pair; otherwise the
/// container is discarded. `raw_index` is provisional and overwritten
/// when the match extractor renumbers survivors.
pub fn extract_single_map(
    container: &ElementRef,
    context: &MatchContext,
    raw_index: usize,
    source_url: &str,
) -> Option<MapRecord> {
    let (map_name, duration) = resolve_map_name(container);
    let map_name = map_name?;

    let (score_a, score_b) = resolve_scores(container)?;

    // The validator forbids equal scores, so the comparison is strict.
    let winner = if score_a > score_b {
        MapWinner::TeamA
    } else {
        MapWinner::TeamB
    };

    Some(MapRecord {
        context: context.clone(),
        map_number: raw_index as u32,
        map_name,
        duration,
        team_a_score: score_a as u8,
        team_b_score: score_b as u8,
        winner,
        source_url: source_url.to_string(),
    })
}

/// Three-tier score cascade: structural elements, then a pattern scan of
/// the container's text, then the same scan widened to the parent.
fn resolve_scores(container: &ElementRef) -> Option<(i32, i32)> {
    structural_scores(container)
        .or_else(|| text_scores(&element_text(container)))
        .or_else(|| parent_scores(container))
}

fn structural_scores(container: &ElementRef) -> Option<(i32, i32)> {
    for selector in SCORE_SELECTORS.iter() {
        let elements = container.select(selector).collect_vec();
        if elements.len() < 2 {
            continue;
        }
        if let (Some(a), Some(b)) = (digit_text(&elements[0]), digit_text(&elements[1])) {
            if is_valid_score(a, b) {
                return Some((a, b));
            }
        }
    }
    None
}

fn digit_text(element: &ElementRef) -> Option<i32> {
    let text = element_text(element);
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

/// Scan free text for the first validator-passing `a - b` pair, with
/// timestamp-like substrings stripped so durations are not misread as
/// scores.
pub(crate) fn text_scores(text: &str) -> Option<(i32, i32)> {
    let clean = LONG_TIMESTAMP.replace_all(text, "");
    let clean = SHORT_TIMESTAMP.replace_all(&clean, "");
    SCORE_PAIR
        .captures_iter(&clean)
        .filter_map(|c| Some((c[1].parse().ok()?, c[2].parse().ok()?)))
        .find(|&(a, b)| is_valid_score(a, b))
}

fn parent_scores(container: &ElementRef) -> Option<(i32, i32)> {
    let parent = container.parent().and_then(ElementRef::wrap)?;
    text_scores(&element_text(&parent))
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;
    use crate::model::{MapName, SeriesFormat};

    fn context() -> MatchContext {
        MatchContext {
            team_a: "Alpha".to_string(),
            team_b: "Beta".to_string(),
            tournament: "Test Event".to_string(),
            match_type: SeriesFormat::Bo3,
            date: "Aug 24, 2025".to_string(),
        }
    }

    fn extract(html: &str) -> Option<MapRecord> {
        let document = Html::parse_fragment(html);
        extract_single_map(&document.root_element(), &context(), 1, "https://www.vlr.gg/1")
    }

    #[test]
    fn structural_scores_win() {
        let record = extract(
            r#"<div>
                <div class="map-name">Ascent</div>
                <div class="vm-stats-game-score"><div>13</div><div>7</div></div>
            </div>"#,
        )
        .unwrap();
        assert_eq!(record.map_name, MapName::Ascent);
        assert_eq!((record.team_a_score, record.team_b_score), (13, 7));
        assert_eq!(record.winner, MapWinner::TeamA);
    }

    #[test]
    fn text_scan_ignores_durations() {
        // "50:07" must not be read as a 50-7 score; the real pair
        // follows it.
        let record = extract(r#"<div><div class="map-name">Bind 50:07</div> 11 - 13</div>"#).unwrap();
        assert_eq!(record.map_name, MapName::Bind);
        assert_eq!(record.duration.as_deref(), Some("50:07"));
        assert_eq!((record.team_a_score, record.team_b_score), (11, 13));
        assert_eq!(record.winner, MapWinner::TeamB);
    }

    #[test]
    fn invalid_structural_pair_falls_through_to_text() {
        // 5-3 fails validation in the structural tier; the text tier
        // then finds the overtime pair.
        let record = extract(
            r#"<div>
                <div class="map-name">Haven</div>
                <div class="vm-stats-game-score"><div>5</div><div>3</div></div>
                <span>final 14-16</span>
            </div>"#,
        )
        .unwrap();
        assert_eq!((record.team_a_score, record.team_b_score), (14, 16));
    }

    #[test]
    fn unknown_map_is_discarded_before_scores() {
        assert!(extract(r#"<div><div class="map-name">Lobby</div> 13-7</div>"#).is_none());
    }

    #[test]
    fn no_valid_scores_discards_the_container() {
        assert!(extract(r#"<div><div class="map-name">Lotus</div> 5-3</div>"#).is_none());
    }
}
