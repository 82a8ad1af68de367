use serde::Serialize;

use crate::core::types::Pick;

pub const UNKNOWN_LABEL: &str = "N/A";
pub const DEFAULT_SCORE: CorrectScore = CorrectScore { home: 0, away: 0 };

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchWinner {
    pub label: String,
    pub confidence_percent: String, // "61%"
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CorrectScore {
    pub home: i64,
    pub away: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GoalScorers<'a> {
    pub first: Option<&'a Pick>,
    pub last: Option<&'a Pick>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct OneXTwo<'a> {
    pub home: Option<&'a Pick>,
    pub draw: Option<&'a Pick>,
    pub away: Option<&'a Pick>,
}

/// Everything the detail page and the submission preview show for a pick list.
///
/// Optional slots borrow straight from the input list.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedView<'a> {
    pub match_winner: MatchWinner,
    pub correct_score: CorrectScore,
    pub first_scorer: Option<&'a Pick>,
    pub last_scorer: Option<&'a Pick>,
    pub one_x_two: OneXTwo<'a>,
}
