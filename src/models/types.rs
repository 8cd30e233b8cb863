//! Type definitions for the Webacy audit payload
//!
//! The upstream schema is not fully documented and has drifted between
//! deployments, so every field is optional and deserialization never
//! rejects a well-formed JSON object. The risk fields stay raw
//! `serde_json::Value`s: coercion lives in `core::scoring`, where a
//! non-numeric value fails closed instead of silently becoming a default.

use serde::Deserialize;
use serde_json::Value;

/// Raw response from the Webacy address-lookup endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    /// Aggregate risk score, expected 0-100. Number or numeric string.
    #[serde(default)]
    pub overall_risk: Option<Value>,
    /// Deployer-wallet risk score. Absent on older API tiers.
    #[serde(default)]
    pub creator_risk: Option<Value>,
    /// Reported security issues, in upstream order.
    #[serde(default)]
    pub issues: Vec<Issue>,
    /// Largest holder records. Display-only passthrough.
    #[serde(default)]
    pub top_holders: Vec<TopHolder>,
}

impl AuditResponse {
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// One reported security issue. Either field may be missing or empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A large-holder record. Shape varies across API tiers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHolder {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub percentage: Option<f64>,
}
