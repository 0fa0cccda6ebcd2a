use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::extract::element_text;

/// Team-name element lookups, most specific first. The first selector
/// with at least two hits wins.
static TEAM_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        ".match-header-vs .wf-title-med",
        ".match-header-team .wf-title-med",
        ".team-name",
        ".match-header-vs-team-name",
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

/// Resolve the two competing team names, or nothing if every strategy
/// fails (which skips the whole match).
///
/// Strategies, in order: structural lookups, the page title split on
/// `" vs "`, and finally the URL slug split on `"-vs-"`.
pub fn resolve_team_names(document: &Html, url: &str) -> Option<(String, String)> {
    for selector in TEAM_SELECTORS.iter() {
        let names = document
            .select(selector)
            .map(|e| element_text(&e))
            .collect_vec();
        if names.len() >= 2 && !names[0].is_empty() && !names[1].is_empty() {
            return Some((names[0].clone(), names[1].clone()));
        }
    }

    if let Some(title) = document.select(&TITLE).next() {
        let title_text = element_text(&title);
        let parts = title_text.split(" vs ").collect_vec();
        if parts.len() >= 2 {
            let team_a = parts[0].trim();
            let team_b = parts[1].split(" - ").next().unwrap_or_default().trim();
            if !team_a.is_empty() && !team_b.is_empty() {
                return Some((team_a.to_string(), team_b.to_string()));
            }
        }
    }

    let slug = url.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    if let Some((left, right)) = slug.split_once("-vs-") {
        let team_a = title_case(&left.replace('-', " "));
        // The slug's tail is the event and stage; keep at most the first
        // two tokens so two-word names like "team-heretics" survive.
        let team_b = title_case(&right.split('-').take(2).join(" "));
        if !team_a.is_empty() && !team_b.is_empty() {
            return Some((team_a, team_b));
        }
    }

    None
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_MATCH_URL: &str = "https://www.vlr.gg/123456/some-page";

    #[test]
    fn structural_lookup_wins() {
        let document = Html::parse_document(
            r#"<html><head><title>Wrong vs Title</title></head><body>
            <div class="match-header-vs">
                <div class="wf-title-med">Paper Rex</div>
                <div class="wf-title-med">Gen.G</div>
            </div></body></html>"#,
        );
        let teams = resolve_team_names(&document, NO_MATCH_URL);
        assert_eq!(teams, Some(("Paper Rex".to_string(), "Gen.G".to_string())));
    }

    #[test]
    fn title_fallback_truncates_the_site_suffix() {
        let document = Html::parse_document(
            "<html><head><title>Sentinels vs DRX - Match Page - VLR.gg</title></head><body></body></html>",
        );
        let teams = resolve_team_names(&document, NO_MATCH_URL);
        assert_eq!(teams, Some(("Sentinels".to_string(), "DRX".to_string())));
    }

    #[test]
    fn url_fallback_title_cases_both_slug_sides() {
        let document = Html::parse_document("<html><body></body></html>");
        let teams = resolve_team_names(
            &document,
            "https://www.vlr.gg/123456/fnatic-vs-team-heretics-event-gf",
        );
        assert_eq!(
            teams,
            Some(("Fnatic".to_string(), "Team Heretics".to_string()))
        );
    }

    #[test]
    fn no_strategy_matching_skips_the_match() {
        let document = Html::parse_document("<html><body><p>not a match page</p></body></html>");
        assert_eq!(resolve_team_names(&document, NO_MATCH_URL), None);
    }
}
