//! SafeLaunch Guard Library
//!
//! Webacy-powered token security audit engine:
//! - Tiered LOW/MEDIUM/HIGH verdicts from the upstream risk score
//! - Safety-score and rug-probability normalization
//! - Display-ready findings with fallback copy
//! - Downloadable plain-text audit reports and share artifacts
//! - File-backed grant usage ledger with bounded history

pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::auditor::{AuditOutcome, Auditor};
pub use crate::core::classifier::{TierColor, Verdict};
pub use crate::core::findings::{format_findings, Finding};
pub use crate::core::report::{badge_markdown, compose_report, report_filename, share_url};
pub use crate::core::scoring::ScoreSet;
pub use models::config::{Chain, GuardConfig};
pub use models::errors::{AppError, AppResult, ErrorCode};
pub use models::types::{AuditResponse, Issue, TopHolder};
pub use providers::webacy::WebacyClient;
pub use utils::ledger::{CreditStatus, LedgerEntry, UsageLedger};
