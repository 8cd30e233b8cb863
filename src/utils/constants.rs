//! Shared constants for SafeLaunch Guard
//!
//! Single source of truth: thresholds, weights, fallback copy, and
//! default limits live here, not scattered through business logic.

/// Webacy address-lookup API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.webacy.com";

/// Environment variable holding the Webacy API key.
pub const API_KEY_ENV: &str = "WEBACY_API_KEY";

/// Outbound request deadline in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

// ============================================
// Verdict thresholds (closed on the lower tier)
// ============================================

/// Risk at or below this classifies LOW.
pub const LOW_RISK_MAX: f64 = 23.0;

/// Risk above LOW_RISK_MAX and at or below this classifies MEDIUM.
pub const MEDIUM_RISK_MAX: f64 = 50.0;

// ============================================
// Rug probability weights
// ============================================

pub const RUG_WEIGHT_OVERALL: f64 = 0.6;
pub const RUG_WEIGHT_CREATOR: f64 = 0.2;
pub const RUG_WEIGHT_PER_ISSUE: f64 = 5.0;

// ============================================
// Grant accounting
// ============================================

/// Audits covered by the Webacy grant.
pub const DEFAULT_GRANT_LIMIT: u64 = 2000;

/// Stop issuing requests when remaining credits drop to this buffer.
pub const DEFAULT_SAFETY_BUFFER: u64 = 0;

/// Ledger count assumed when the ledger file is absent or corrupt.
/// Historical deployments disagreed on this value; it is configurable
/// and nothing downstream depends on the exact number.
pub const DEFAULT_BASELINE_COUNT: u64 = 16;

/// Remaining credits above this count as Healthy.
pub const CREDITS_HEALTHY_ABOVE: u64 = 500;

/// Remaining credits above this (but not Healthy) count as Low.
pub const CREDITS_LOW_ABOVE: u64 = 100;

/// Default location of the persisted usage ledger.
pub const DEFAULT_LEDGER_PATH: &str = "usage_ledger.json";

/// History entries shown in stats output.
pub const HISTORY_DISPLAY_LIMIT: usize = 5;

// ============================================
// Display copy
// ============================================

/// Title used when an issue record has no usable title.
pub const FALLBACK_ISSUE_TITLE: &str = "Security Detail";

/// Description used when an issue record has no usable description.
pub const FALLBACK_ISSUE_DESCRIPTION: &str =
    "Technical risk detected. Check Webacy dashboard for details.";

/// Line emitted when the risk engine reported no issues.
pub const NO_ISSUES_LINE: &str =
    "No significant vulnerabilities detected by the Webacy Risk Engine.";

/// Fixed legal disclaimer closing every report.
pub const REPORT_DISCLAIMER: &str =
    "Powered by Webacy | SafeLaunch Guard provides informational risk signals, not financial advice.";

/// First line of every report.
pub const REPORT_HEADER: &str = "SafeLaunch Guard Security Audit";
