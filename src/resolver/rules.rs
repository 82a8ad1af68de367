//! Ordered predicate rules shared by every slot resolver.
//!
//! A slot is described by a list of named rules. Scanning a pick list
//! returns the first pick (in list order) that satisfies any rule, together
//! with the name of the rule that claimed it. Later matches are ignored.

use crate::core::types::Pick;

pub const MARKET_FULL_TIME_RESULT: &str = "FullTimeResult_1X2";
pub const MARKET_MATCH_WINNER: &str = "MatchWinner";
pub const MARKET_DOUBLE_CHANCE: &str = "DoubleChance";
pub const MARKET_CORRECT_SCORE: &str = "CorrectScore";

pub const SUB_TYPE_FIRST_SCORER: &str = "FirstTimeGoalScorer";
pub const SUB_TYPE_LAST_SCORER: &str = "LastTimeGoalScorer";

pub type Predicate = fn(&Pick) -> bool;

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub name: &'static str,
    pub matches: Predicate,
}

impl Rule {
    pub const fn new(name: &'static str, matches: Predicate) -> Self {
        Self { name, matches }
    }
}

/// A pick claimed by a slot, and the rule that claimed it.
#[derive(Clone, Copy, Debug)]
pub struct Matched<'a> {
    pub pick: &'a Pick,
    pub rule: &'static str,
}

pub fn first_match<'a>(picks: &'a [Pick], rules: &[Rule]) -> Option<Matched<'a>> {
    picks.iter().find_map(|pick| {
        rules
            .iter()
            .find(|rule| (rule.matches)(pick))
            .map(|rule| Matched {
                pick,
                rule: rule.name,
            })
    })
}

pub fn market_is(pick: &Pick, market: &str) -> bool {
    pick.market() == Some(market)
}

pub fn key_is(pick: &Pick, key: &str) -> bool {
    pick.selection_key() == Some(key)
}

/// Case-insensitive substring test. `needle` must already be lowercase.
pub fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(key: &str) -> Pick {
        Pick {
            selection_key: Some(key.to_string()),
            ..Default::default()
        }
    }

    const RULES: &[Rule] = &[
        Rule::new("key_a", |p: &Pick| key_is(p, "A")),
        Rule::new("key_b", |p: &Pick| key_is(p, "B")),
    ];

    #[test]
    fn test_first_match_follows_list_order_not_rule_order() {
        let picks = vec![keyed("B"), keyed("A")];
        let m = first_match(&picks, RULES).unwrap();

        assert!(std::ptr::eq(m.pick, &picks[0]));
        assert_eq!(m.rule, "key_b");
    }

    #[test]
    fn test_first_rule_wins_when_pick_satisfies_several() {
        let rules = [
            Rule::new("any_key", |p: &Pick| p.selection_key().is_some()),
            Rule::new("key_a", |p: &Pick| key_is(p, "A")),
        ];
        let picks = vec![keyed("A")];
        assert_eq!(first_match(&picks, &rules).unwrap().rule, "any_key");
    }

    #[test]
    fn test_no_match_on_empty_or_unmatched_list() {
        assert!(first_match(&[], RULES).is_none());
        assert!(first_match(&[keyed("C"), Pick::default()], RULES).is_none());
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci(Some("FirstGoalScorer"), "first"));
        assert!(contains_ci(Some("ANYTIME LAST"), "last"));
        assert!(!contains_ci(Some("Anytime"), "first"));
        assert!(!contains_ci(None, "first"));
    }

    #[test]
    fn test_market_match_is_exact() {
        let pick = Pick {
            market: Some("correctscore".to_string()),
            ..Default::default()
        };
        assert!(!market_is(&pick, MARKET_CORRECT_SCORE));
    }
}
