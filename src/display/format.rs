use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::types::Pick;
use crate::resolver::types::{MatchWinner, ResolvedView, UNKNOWN_LABEL};

pub const UNKNOWN_ODDS: &str = "N/A";

/// Renders a 0-100 value as a whole percentage, rounding half away from zero.
///
/// Values outside that range are printed as-is once rounded, but the
/// conversion to an integer saturates: NaN renders as `"0%"` and anything
/// beyond the `i64` range clamps to its bounds.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

pub fn format_odds(odds: Option<Decimal>) -> String {
    match odds {
        Some(o) => o.normalize().to_string(),
        None => UNKNOWN_ODDS.to_string(),
    }
}

fn scorer_name(pick: Option<&Pick>) -> String {
    pick.and_then(|p| p.player_name().or_else(|| p.selection_label()))
        .unwrap_or(UNKNOWN_LABEL)
        .to_string()
}

/// Odds and confidence strings for one 1X2 leg.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LegDisplay {
    pub odds: String,
    pub confidence: String,
}

impl LegDisplay {
    pub fn from_pick(pick: Option<&Pick>) -> Self {
        Self {
            odds: format_odds(pick.and_then(|p| p.odds)),
            confidence: pick
                .and_then(|p| p.confidence)
                .map(format_percent)
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OneXTwoDisplay {
    pub home: LegDisplay,
    pub draw: LegDisplay,
    pub away: LegDisplay,
}

/// Display strings for a resolved view, as the read and preview screens show them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDisplay {
    pub match_winner: MatchWinner,
    pub correct_score: String, // "2 - 1"
    pub first_scorer: String,
    pub last_scorer: String,
    pub one_x_two: OneXTwoDisplay,
}

impl PredictionDisplay {
    pub fn from_view(view: &ResolvedView<'_>) -> Self {
        Self {
            match_winner: view.match_winner.clone(),
            correct_score: format!("{} - {}", view.correct_score.home, view.correct_score.away),
            first_scorer: scorer_name(view.first_scorer),
            last_scorer: scorer_name(view.last_scorer),
            one_x_two: OneXTwoDisplay {
                home: LegDisplay::from_pick(view.one_x_two.home),
                draw: LegDisplay::from_pick(view.one_x_two.draw),
                away: LegDisplay::from_pick(view.one_x_two.away),
            },
        }
    }
}
