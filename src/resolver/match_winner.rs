use tracing::{debug, trace};

use crate::core::types::Pick;
use crate::display::format::format_percent;
use crate::resolver::rules::{
    MARKET_DOUBLE_CHANCE, MARKET_FULL_TIME_RESULT, MARKET_MATCH_WINNER, Rule, first_match,
    market_is,
};
use crate::resolver::types::{MatchWinner, UNKNOWN_LABEL};

const WINNER_KEYS: [&str; 4] = ["HOME", "AWAY", "1", "2"];

pub const MATCH_WINNER_RULES: &[Rule] = &[
    Rule::new("full_time_result_market", |p: &Pick| {
        market_is(p, MARKET_FULL_TIME_RESULT)
    }),
    Rule::new("match_winner_market", |p: &Pick| {
        market_is(p, MARKET_MATCH_WINNER)
    }),
    Rule::new("winner_selection_key", |p: &Pick| {
        p.selection_key().is_some_and(|k| WINNER_KEYS.contains(&k))
    }),
];

// Only consulted when nothing above matched.
pub const DOUBLE_CHANCE_RULES: &[Rule] = &[Rule::new("double_chance_market", |p: &Pick| {
    market_is(p, MARKET_DOUBLE_CHANCE)
})];

/// Resolves the headline winner and its confidence.
///
/// Winner-type picks take precedence over double chance; label and
/// confidence each fall back independently, ending at `"N/A"` and the
/// prediction's overall accuracy.
pub fn resolve_match_winner(picks: &[Pick], accuracy: f64) -> MatchWinner {
    let winner = first_match(picks, MATCH_WINNER_RULES);
    let double_chance = match winner {
        Some(m) => {
            trace!(rule = m.rule, "match winner pick found");
            None
        }
        None => first_match(picks, DOUBLE_CHANCE_RULES),
    };

    let winner = winner.map(|m| m.pick);
    let double_chance = double_chance.map(|m| m.pick);

    let label = winner
        .and_then(Pick::selection_label)
        .or_else(|| double_chance.and_then(Pick::selection_label))
        .or_else(|| winner.and_then(Pick::team_name))
        .unwrap_or(UNKNOWN_LABEL);

    let confidence = winner
        .and_then(|p| p.confidence)
        .or_else(|| double_chance.and_then(|p| p.confidence));
    if confidence.is_none() {
        debug!(accuracy, "no pick confidence for match winner, using accuracy");
    }

    MatchWinner {
        label: label.to_string(),
        confidence_percent: format_percent(confidence.unwrap_or(accuracy)),
    }
}
