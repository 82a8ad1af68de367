use tracing::{debug, trace};

use crate::core::types::Pick;
use crate::resolver::rules::{MARKET_CORRECT_SCORE, Rule, first_match, market_is};
use crate::resolver::types::{CorrectScore, DEFAULT_SCORE};

// A 0-0 pick is only found through the market tag: the score rules need a
// strictly positive side.
pub const CORRECT_SCORE_RULES: &[Rule] = &[
    Rule::new("correct_score_market", |p: &Pick| {
        market_is(p, MARKET_CORRECT_SCORE)
    }),
    Rule::new("positive_home_score", |p: &Pick| p.home_score() > 0),
    Rule::new("positive_away_score", |p: &Pick| p.away_score() > 0),
];

pub fn resolve_correct_score(picks: &[Pick]) -> CorrectScore {
    match first_match(picks, CORRECT_SCORE_RULES) {
        Some(m) => {
            trace!(rule = m.rule, "correct score pick found");
            CorrectScore {
                home: m.pick.home_score(),
                away: m.pick.away_score(),
            }
        }
        None => {
            debug!("no correct score pick, using default");
            DEFAULT_SCORE
        }
    }
}
