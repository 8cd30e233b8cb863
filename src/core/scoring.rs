//! Score Normalizer
//!
//! Derives the display scores from the raw upstream payload: the rounded
//! risk, the complementary safety score, and (when the payload carries
//! the secondary signals) the composite rug probability.
//!
//! All functions here are pure. Coercion of the raw risk fields fails
//! closed: a present-but-non-numeric value is an error, never a default.

use serde::Serialize;
use serde_json::Value;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::AuditResponse;
use crate::utils::constants::{RUG_WEIGHT_CREATOR, RUG_WEIGHT_OVERALL, RUG_WEIGHT_PER_ISSUE};

/// Normalized scores for one audit
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSet {
    /// Risk exactly as coerced from the upstream payload
    pub raw_risk: f64,
    /// Risk rounded to 2 decimal places, input to the classifier
    pub rounded_risk: f64,
    /// Complement of risk on a 0-100 integer scale
    pub safety_score: u8,
    /// Composite weighted signal; None when the payload has no
    /// creatorRisk, since zero would misrepresent an unscored case
    pub rug_probability: Option<f64>,
}

impl ScoreSet {
    /// Normalize an upstream response into display scores.
    pub fn from_response(response: &AuditResponse) -> AppResult<ScoreSet> {
        let raw_risk = coerce_risk("overallRisk", response.overall_risk.as_ref())?.unwrap_or(0.0);
        let creator_risk = coerce_risk("creatorRisk", response.creator_risk.as_ref())?;

        let rounded_risk = round2(raw_risk);
        let rug_probability = creator_risk
            .map(|creator| rug_probability(rounded_risk, creator, response.issue_count()));

        Ok(ScoreSet {
            raw_risk,
            rounded_risk,
            safety_score: safety_score(raw_risk),
            rug_probability,
        })
    }
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Safety score: `max(0, 100 - trunc(raw_risk))`, held to the 0-100
/// scale the UI and ledger expect.
pub fn safety_score(raw_risk: f64) -> u8 {
    (100 - raw_risk.trunc() as i64).clamp(0, 100) as u8
}

/// Composite rug probability, clamped to 100.
pub fn rug_probability(rounded_risk: f64, creator_risk: f64, issue_count: usize) -> f64 {
    let raw = RUG_WEIGHT_OVERALL * rounded_risk
        + RUG_WEIGHT_CREATOR * creator_risk
        + RUG_WEIGHT_PER_ISSUE * issue_count as f64;
    raw.min(100.0)
}

/// Coerce an optional raw JSON value into a float.
///
/// Absent and null mean "not provided" (Ok(None)). Numbers pass through,
/// numeric strings parse. Anything else is a hard PARSE_NON_NUMERIC_RISK
/// failure that the caller must surface, leaving the ledger untouched.
fn coerce_risk(field: &str, value: Option<&Value>) -> AppResult<Option<f64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| AppError::non_numeric_risk(field, n)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| AppError::non_numeric_risk(field, format!("\"{}\"", s))),
        Some(other) => Err(AppError::non_numeric_risk(field, other)),
    }
}
