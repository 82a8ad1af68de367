//! Pick resolution.
//!
//! Classifies a raw pick list into the slots shown on a prediction's detail
//! page and submission preview. Every function here is total: no input makes
//! it fail, and a slot that nothing claims falls back to its documented
//! default.

pub mod correct_score;
pub mod match_winner;
pub mod one_x_two;
pub mod rules;
pub mod scorers;
pub mod types;

pub use correct_score::resolve_correct_score;
pub use match_winner::resolve_match_winner;
pub use one_x_two::resolve_one_x_two;
pub use scorers::resolve_goal_scorers;
pub use types::{
    CorrectScore, DEFAULT_SCORE, GoalScorers, MatchWinner, OneXTwo, ResolvedView, UNKNOWN_LABEL,
};

use crate::core::types::Pick;

pub fn resolve_all(picks: &[Pick], accuracy: f64) -> ResolvedView<'_> {
    let scorers = resolve_goal_scorers(picks);
    ResolvedView {
        match_winner: resolve_match_winner(picks, accuracy),
        correct_score: resolve_correct_score(picks),
        first_scorer: scorers.first,
        last_scorer: scorers.last,
        one_x_two: resolve_one_x_two(picks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fixture_picks() -> Vec<Pick> {
        vec![
            Pick {
                market: Some("DoubleChance".to_string()),
                selection_key: Some("1X".to_string()),
                selection_label: Some("Arsenal or Draw".to_string()),
                confidence: Some(81.0),
                ..Default::default()
            },
            Pick {
                market: Some("FullTimeResult_1X2".to_string()),
                selection_key: Some("1".to_string()),
                selection_label: Some("Arsenal".to_string()),
                team_name: Some("Arsenal".to_string()),
                confidence: Some(61.0),
                odds: Some(dec!(1.85)),
                ..Default::default()
            },
            Pick {
                market: Some("FullTimeResult_1X2".to_string()),
                selection_key: Some("X".to_string()),
                confidence: Some(24.0),
                odds: Some(dec!(3.6)),
                ..Default::default()
            },
            Pick {
                market: Some("CorrectScore".to_string()),
                home_score: Some(2),
                away_score: Some(1),
                ..Default::default()
            },
            Pick {
                market: Some("GoalScorer".to_string()),
                sub_type: Some("FirstTimeGoalScorer".to_string()),
                player_name: Some("B. Saka".to_string()),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_resolve_all_fills_every_slot() {
        let picks = fixture_picks();
        let view = resolve_all(&picks, 68.0);

        assert_eq!(
            view.match_winner,
            MatchWinner {
                label: "Arsenal".to_string(),
                confidence_percent: "61%".to_string(),
            }
        );
        assert_eq!(view.correct_score, CorrectScore { home: 2, away: 1 });
        assert!(std::ptr::eq(view.first_scorer.unwrap(), &picks[4]));
        assert!(view.last_scorer.is_none());
        assert!(std::ptr::eq(view.one_x_two.home.unwrap(), &picks[1]));
        assert!(std::ptr::eq(view.one_x_two.draw.unwrap(), &picks[2]));
        assert!(view.one_x_two.away.is_none());
    }

    #[test]
    fn test_resolve_all_on_empty_list() {
        let view = resolve_all(&[], 73.0);

        assert_eq!(view.match_winner.label, UNKNOWN_LABEL);
        assert_eq!(view.match_winner.confidence_percent, "73%");
        assert_eq!(view.correct_score, DEFAULT_SCORE);
        assert!(view.first_scorer.is_none());
        assert!(view.last_scorer.is_none());
        assert_eq!(view.one_x_two, OneXTwo::default());
    }

    #[test]
    fn test_resolve_all_tolerates_blank_picks() {
        let picks = vec![Pick::default(); 5];
        let view = resolve_all(&picks, 0.0);

        assert_eq!(view.match_winner.label, "N/A");
        assert_eq!(view.match_winner.confidence_percent, "0%");
        assert_eq!(view.correct_score, DEFAULT_SCORE);
    }

    #[test]
    fn test_repeated_resolution_is_identical_and_leaves_input_untouched() {
        let picks = fixture_picks();
        let before = picks.clone();

        let first = resolve_all(&picks, 68.0);
        let second = resolve_all(&picks, 68.0);

        assert_eq!(first, second);
        assert_eq!(picks, before);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let picks = fixture_picks();
        let json = serde_json::to_value(resolve_all(&picks, 68.0)).unwrap();

        assert_eq!(json["matchWinner"]["confidencePercent"], "61%");
        assert_eq!(json["correctScore"]["home"], 2);
        assert_eq!(json["firstScorer"]["playerName"], "B. Saka");
        assert!(json["lastScorer"].is_null());
        assert_eq!(json["oneXTwo"]["draw"]["selectionKey"], "X");
    }
}
