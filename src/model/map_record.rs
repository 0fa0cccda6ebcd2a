use serde::Serialize;

use crate::model::{MapName, SeriesFormat};

/// Match-level context resolved once per page and shared read-only by
/// every map record derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct MatchContext {
    pub team_a: String,
    pub team_b: String,
    pub tournament: String,
    pub match_type: SeriesFormat,
    pub date: String,
}

/// Which side took a map.
///
/// `Draw` exists only because the text-scan fallback compares its two
/// scores literally. A pair that passed the score validator is never
/// equal, so no validated path can produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MapWinner {
    TeamA,
    TeamB,
    Draw,
}

/// One map's validated result within a match.
#[derive(Debug, Clone, Serialize)]
pub struct MapRecord {
    pub context: MatchContext,
    /// 1-based position within the match, contiguous after filtering.
    pub map_number: u32,
    pub map_name: MapName,
    /// Play time as shown on the page, e.g. `50:07` or `1:13:23`.
    pub duration: Option<String>,
    pub team_a_score: u8,
    pub team_b_score: u8,
    pub winner: MapWinner,
    pub source_url: String,
}

impl MapRecord {
    /// The winning team's name, or `"Draw"`.
    pub fn winner_name(&self) -> &str {
        match self.winner {
            MapWinner::TeamA => &self.context.team_a,
            MapWinner::TeamB => &self.context.team_b,
            MapWinner::Draw => "Draw",
        }
    }

    pub fn team_a_won(&self) -> u8 {
        matches!(self.winner, MapWinner::TeamA) as u8
    }

    pub fn team_b_won(&self) -> u8 {
        matches!(self.winner, MapWinner::TeamB) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::score::is_valid_score;

    fn context() -> MatchContext {
        MatchContext {
            team_a: "Fnatic".to_string(),
            team_b: "Team Heretics".to_string(),
            tournament: "Esports World Cup 2025".to_string(),
            match_type: SeriesFormat::Bo3,
            date: "Aug 24, 2025".to_string(),
        }
    }

    fn record(winner: MapWinner, a: u8, b: u8) -> MapRecord {
        MapRecord {
            context: context(),
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
    fn exactly_one_win_indicator_is_set() {
        let won_a = record(MapWinner::TeamA, 13, 7);
        assert_eq!(won_a.winner_name(), "Fnatic");
        assert_eq!((won_a.team_a_won(), won_a.team_b_won()), (1, 0));

        let won_b = record(MapWinner::TeamB, 7, 13);
        assert_eq!(won_b.winner_name(), "Team Heretics");
        assert_eq!((won_b.team_a_won(), won_b.team_b_won()), (0, 1));
    }

    #[test]
    fn draw_requires_bypassing_the_validator() {
        // The only route to a Draw record is the text-scan fallback's
        // literal comparison; its scores could only be equal if the
        // validator had not run on them.
        let draw = record(MapWinner::Draw, 6, 6);
        assert_eq!(draw.winner_name(), "Draw");
        assert_eq!((draw.team_a_won(), draw.team_b_won()), (0, 0));
        assert!(!is_valid_score(6, 6));
    }
}
