use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use strum::IntoEnumIterator;

use crate::extract::score::is_valid_score;
use crate::model::{MapName, MapRecord, MapWinner, MatchContext};

static LINE_SCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\s*[-:]\s*(\d{1,2})\b").unwrap());
/// Numbered sections like `1 Lotus ... 13-7`.
static NUMBERED_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s+([A-Z][a-z]+)\s+.*?(\d{1,2})\s*[-:]\s*(\d{1,2})").unwrap()
});

/// Last-resort extraction over the page's flattened text, used when no
/// structured container yields a validated map.
pub fn extract_from_text(
    document: &Html,
    context: &MatchContext,
    source_url: &str,
) -> Vec<MapRecord> {
    let text = flatten_text(document);
    let records = scan_lines(&text, context, source_url);
    if !records.is_empty() {
        return records;
    }
    scan_numbered_sections(&text, context, source_url)
}

/// Flattened page text. Text nodes are concatenated as-is; the line
/// structure the scan relies on comes from the document's own newlines.
fn flatten_text(document: &Html) -> String {
    document.root_element().text().collect::<String>()
}

/// Tier 1: lines mentioning a known map, with a score on the same line
/// or within the next two. Each map name is used at most once.
fn scan_lines(text: &str, context: &MatchContext, source_url: &str) -> Vec<MapRecord> {
    let lines = text.lines().collect_vec();
    let mut records = vec![];
    let mut seen: HashSet<MapName> = HashSet::new();

    for (i, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lowered = line.to_lowercase();
        for map_name in MapName::iter() {
            if seen.contains(&map_name) || !lowered.contains(&map_name.to_string().to_lowercase())
            {
                continue;
            }
            let window = &lines[i..(i + 3).min(lines.len())];
            let Some((a, b)) = window.iter().find_map(|l| line_scores(l)) else {
                continue;
            };
            let map_number = (records.len() + 1) as u32;
            records.push(build_record(context, map_number, map_name, a, b, source_url));
            seen.insert(map_name);
            break;
        }
    }
    records
}

/// First score-shaped token on a line, if it survives validation. Only
/// the first is considered; a line led by a timestamp hides any score
/// after it.
fn line_scores(line: &str) -> Option<(i32, i32)> {
    let captures = LINE_SCORE.captures(line)?;
    let a = captures[1].parse().ok()?;
    let b = captures[2].parse().ok()?;
    is_valid_score(a, b).then_some((a, b))
}

/// Tier 2: explicitly numbered map sections anywhere in the text. The
/// scanned number is kept as-is, not renumbered.
fn scan_numbered_sections(
    text: &str,
    context: &MatchContext,
    source_url: &str,
) -> Vec<MapRecord> {
    NUMBERED_SECTION
        .captures_iter(text)
        .filter_map(|c| {
            let map_name = MapName::from_str(&c[2]).ok()?;
            let map_number: u32 = c[1].parse().ok()?;
            let a: i32 = c[3].parse().ok()?;
            let b: i32 = c[4].parse().ok()?;
            is_valid_score(a, b)
                .then(|| build_record(context, map_number, map_name, a, b, source_url))
        })
        .collect()
}

fn build_record(
    context: &MatchContext,
    map_number: u32,
    map_name: MapName,
    a: i32,
    b: i32,
    source_url: &str,
) -> MapRecord {
    // Literal comparison; the Draw arm is unreachable for any pair the
    // validator let through.
    let winner = match a.cmp(&b) {
        Ordering::Greater => MapWinner::TeamA,
        Ordering::Less => MapWinner::TeamB,
        Ordering::Equal => MapWinner::Draw,
    };
    MapRecord {
        context: context.clone(),
        map_number,
        map_name,
        duration: None,
        team_a_score: a as u8,
        team_b_score: b as u8,
        winner,
        source_url: source_url.to_string(),
    }
}
