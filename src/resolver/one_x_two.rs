use crate::core::types::Pick;
use crate::resolver::rules::{MARKET_FULL_TIME_RESULT, Rule, first_match, key_is, market_is};
use crate::resolver::types::OneXTwo;

// The market-qualified rules are subsumed by the bare key rules.
pub const HOME_RULES: &[Rule] = &[
    Rule::new("home_key", |p: &Pick| key_is(p, "HOME")),
    Rule::new("one_key", |p: &Pick| key_is(p, "1")),
    Rule::new("full_time_result_one", |p: &Pick| {
        market_is(p, MARKET_FULL_TIME_RESULT) && key_is(p, "1")
    }),
];

pub const DRAW_RULES: &[Rule] = &[
    Rule::new("draw_key", |p: &Pick| key_is(p, "DRAW")),
    Rule::new("x_key", |p: &Pick| key_is(p, "X")),
    Rule::new("full_time_result_x", |p: &Pick| {
        market_is(p, MARKET_FULL_TIME_RESULT) && key_is(p, "X")
    }),
];

pub const AWAY_RULES: &[Rule] = &[
    Rule::new("away_key", |p: &Pick| key_is(p, "AWAY")),
    Rule::new("two_key", |p: &Pick| key_is(p, "2")),
    Rule::new("full_time_result_two", |p: &Pick| {
        market_is(p, MARKET_FULL_TIME_RESULT) && key_is(p, "2")
    }),
];

pub fn resolve_one_x_two(picks: &[Pick]) -> OneXTwo<'_> {
    let leg = |rules: &[Rule]| first_match(picks, rules).map(|m| m.pick);
    OneXTwo {
        home: leg(HOME_RULES),
        draw: leg(DRAW_RULES),
        away: leg(AWAY_RULES),
    }
}
