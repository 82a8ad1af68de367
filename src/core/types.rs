use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::lenient::{
    lenient_decimal, lenient_f64, lenient_i64, lenient_seq, lenient_string,
};
use crate::resolver::{ResolvedView, resolve_all};

/// A single market/selection forecast attached to a fixture.
///
/// Every field is optional: the backend omits whatever doesn't apply to the
/// market, and sometimes more than that.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub selection_key: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub selection_label: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>, // percent, 0-100
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub recent_form: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal", skip_serializing_if = "Option::is_none")]
    pub odds: Option<Decimal>, // decimal price
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub home_score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub away_score: Option<i64>,
}

impl Pick {
    pub fn market(&self) -> Option<&str> {
        present(&self.market)
    }

    pub fn selection_key(&self) -> Option<&str> {
        present(&self.selection_key)
    }

    pub fn selection_label(&self) -> Option<&str> {
        present(&self.selection_label)
    }

    pub fn team_name(&self) -> Option<&str> {
        present(&self.team_name)
    }

    pub fn player_name(&self) -> Option<&str> {
        present(&self.player_name)
    }

    pub fn sub_type(&self) -> Option<&str> {
        present(&self.sub_type)
    }

    /// Score fields only mean something on correct-score picks; absent reads as 0.
    pub fn home_score(&self) -> i64 {
        self.home_score.unwrap_or(0)
    }

    pub fn away_score(&self) -> i64 {
        self.away_score.unwrap_or(0)
    }
}

// Empty strings count as absent, same as a missing field.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A prediction document as returned by the backend.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Prediction {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub fixture: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub accuracy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub picks: Option<Vec<Pick>>,
}

impl Prediction {
    pub fn picks(&self) -> &[Pick] {
        self.picks.as_deref().unwrap_or(&[])
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy.unwrap_or(0.0)
    }

    pub fn resolve(&self) -> ResolvedView<'_> {
        resolve_all(self.picks(), self.accuracy())
    }
}
