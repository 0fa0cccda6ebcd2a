use tracing::warn;

use crate::model::{MapRecord, MapWinner};

/// Advisory check that a match's kept records form a plausible series
/// shape for its length. Returns a classification string (or nothing for
/// an empty match); never discards or alters records.
pub fn classify_series(records: &[MapRecord]) -> Option<String> {
    let context = &records.first()?.context;
    let team_a_wins = records.iter().filter(|r| r.winner == MapWinner::TeamA).count();
    let team_b_wins = records.iter().filter(|r| r.winner == MapWinner::TeamB).count();

    let classification = match records.len() {
        1 => "Complete Bo1 series".to_string(),
        2 if team_a_wins == 2 || team_b_wins == 2 => "Complete Bo3 series (2-0)".to_string(),
        2 => "Incomplete Bo3: found 2 maps but neither team won both".to_string(),
        3 if (team_a_wins == 2 && team_b_wins == 1) || (team_a_wins == 1 && team_b_wins == 2) => {
            "Complete Bo3 series (2-1)".to_string()
        }
        3 => format!("Unexpected Bo3 result: {team_a_wins}-{team_b_wins}"),
        4 if team_a_wins == 3 || team_b_wins == 3 => "Complete Bo5 series (3-1)".to_string(),
        4 => "Incomplete Bo5: found 4 maps but no team won 3".to_string(),
        5 if (team_a_wins == 3 && team_b_wins == 2) || (team_a_wins == 2 && team_b_wins == 3) => {
            "Complete Bo5 series (3-2)".to_string()
        }
        5 => format!("Unexpected Bo5 result: {team_a_wins}-{team_b_wins}"),
        n => format!("Unusual series length: {n} maps"),
    };

    if !classification.starts_with("Complete") {
        warn!(
            team_a = %context.team_a,
            team_b = %context.team_b,
            %classification,
            "series shape looks off"
        );
    }
    Some(classification)
}
