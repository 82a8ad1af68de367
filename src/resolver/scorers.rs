use tracing::trace;

use crate::core::types::Pick;
use crate::resolver::rules::{
    Rule, SUB_TYPE_FIRST_SCORER, SUB_TYPE_LAST_SCORER, contains_ci, first_match,
};
use crate::resolver::types::GoalScorers;

pub const FIRST_SCORER_RULES: &[Rule] = &[
    Rule::new("first_scorer_sub_type", |p: &Pick| {
        p.sub_type() == Some(SUB_TYPE_FIRST_SCORER)
    }),
    Rule::new("market_mentions_first", |p: &Pick| {
        contains_ci(p.market(), "first")
    }),
    Rule::new("player_sub_type_mentions_first", |p: &Pick| {
        p.player_name().is_some() && contains_ci(p.sub_type(), "first")
    }),
];

pub const LAST_SCORER_RULES: &[Rule] = &[
    Rule::new("last_scorer_sub_type", |p: &Pick| {
        p.sub_type() == Some(SUB_TYPE_LAST_SCORER)
    }),
    Rule::new("market_mentions_last", |p: &Pick| {
        contains_ci(p.market(), "last")
    }),
    Rule::new("player_sub_type_mentions_last", |p: &Pick| {
        p.player_name().is_some() && contains_ci(p.sub_type(), "last")
    }),
];

/// First and last goal-scorer picks.
///
/// The two scans don't know about each other, so a pick whose text mentions
/// both "first" and "last" comes back in both slots.
pub fn resolve_goal_scorers(picks: &[Pick]) -> GoalScorers<'_> {
    let first = first_match(picks, FIRST_SCORER_RULES);
    let last = first_match(picks, LAST_SCORER_RULES);

    if let Some(m) = first {
        trace!(rule = m.rule, "first scorer pick found");
    }
    if let Some(m) = last {
        trace!(rule = m.rule, "last scorer pick found");
    }

    GoalScorers {
        first: first.map(|m| m.pick),
        last: last.map(|m| m.pick),
    }
}
