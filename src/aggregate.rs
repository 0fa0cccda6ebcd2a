//! Aggregation of map records across many matches into tabular summary
//! rows. Purely in-memory; how callers persist the table is up to them.

use itertools::Itertools;

use crate::model::{MapRecord, TeamSummary};

/// Build the per-team summary table across all collected records,
/// sorted by maps won descending.
pub fn team_summaries(records: &[MapRecord]) -> Vec<TeamSummary> {
    let teams = records
        .iter()
        .flat_map(|r| [r.context.team_a.as_str(), r.context.team_b.as_str()])
        .unique()
        .collect_vec();

    let mut summaries = teams
        .into_iter()
        .map(|team| {
            let played = records
                .iter()
                .filter(|r| r.context.team_a == team || r.context.team_b == team)
                .collect_vec();
            let won = played.iter().filter(|r| r.winner_name() == team).count();
            let lost = played
                .iter()
                .filter(|r| r.winner_name() != team && r.winner_name() != "Draw")
                .count();
            let win_rate = if played.is_empty() {
                0.0
            } else {
                won as f64 / played.len() as f64 * 100.0
            };
            TeamSummary {
                team: team.to_string(),
                maps_played: played.len(),
                maps_won: won,
                maps_lost: lost,
                win_rate,
            }
        })
        .collect_vec();

    summaries.sort_by(|a, b| b.maps_won.cmp(&a.maps_won));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MapName, MapWinner, MatchContext, SeriesFormat};

    fn record(team_a: &str, team_b: &str, winner: MapWinner) -> MapRecord {
        let (a, b) = match winner {
            MapWinner::TeamA => (13, 7),
            MapWinner::TeamB => (7, 13),
            MapWinner::Draw => (6, 6),
        };
        MapRecord {
            context: MatchContext {
                team_a: team_a.to_string(),
                team_b: team_b.to_string(),
                tournament: "Test Event".to_string(),
                match_type: SeriesFormat::Bo3,
                date: "Aug 24, 2025".to_string(),
            },
            map_number: 1,
            map_name: MapName::Ascent,
            duration: None,
            team_a_score: a,
            team_b_score: b,
            winner,
            source_url: "https://www.vlr.gg/1".to_string(),
        }
    }

    #[test]
    fn summaries_count_wins_losses_and_rate() {
        let records = vec![
            record("Alpha", "Beta", MapWinner::TeamA),
            record("Alpha", "Beta", MapWinner::TeamA),
            record("Alpha", "Beta", MapWinner::TeamB),
            record("Gamma", "Alpha", MapWinner::TeamA),
        ];
        let summaries = team_summaries(&records);

        let alpha = summaries.iter().find(|s| s.team == "Alpha").unwrap();
        assert_eq!(alpha.maps_played, 4);
        assert_eq!(alpha.maps_won, 2);
        assert_eq!(alpha.maps_lost, 2);
        assert!((alpha.win_rate - 50.0).abs() < f64::EPSILON);

        // Most wins sorts first.
        assert_eq!(summaries[0].team, "Alpha");
    }

    #[test]
    fn draws_count_as_neither_won_nor_lost() {
        let records = vec![
            record("Alpha", "Beta", MapWinner::Draw),
            record("Alpha", "Beta", MapWinner::TeamA),
        ];
        let summaries = team_summaries(&records);
        let beta = summaries.iter().find(|s| s.team == "Beta").unwrap();
        assert_eq!(beta.maps_played, 2);
        assert_eq!(beta.maps_won, 0);
        assert_eq!(beta.maps_lost, 1);
    }

    #[test]
    fn no_records_no_rows() {
        assert!(team_summaries(&[]).is_empty());
    }
}
