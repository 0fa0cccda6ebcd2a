use serde::Serialize;

/// One row of the per-team summary table built by [`crate::aggregate`].
#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary {
    pub team: String,
    pub maps_played: usize,
    pub maps_won: usize,
    /// Maps the opposing team won; draws count as neither won nor lost.
    pub maps_lost: usize,
    /// Share of played maps won, as a percentage.
    pub win_rate: f64,
}
