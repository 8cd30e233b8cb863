//! Usage Ledger
//!
//! Tracks how many grant credits the session has burned and a bounded
//! history of recent audits, mirrored to a JSON file after every
//! mutation. The in-memory state is authoritative: a failed write is
//! logged and swallowed, never propagated, so a read-only disk cannot
//! block auditing.
//!
//! Exactly two mutations exist: `record_audit` and `reset`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::utils::constants::{CREDITS_HEALTHY_ABOVE, CREDITS_LOW_ABOVE, HISTORY_DISPLAY_LIMIT};

/// One completed audit, as remembered by the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub addr: String,
    pub score: u8,
}

/// On-disk shape of the ledger file
#[derive(Debug, Serialize, Deserialize)]
struct LedgerFile {
    count: u64,
    history: Vec<LedgerEntry>,
}

/// Grant credit health, derived from remaining credits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditStatus {
    Healthy,
    Low,
    Critical,
}

impl CreditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditStatus::Healthy => "Healthy",
            CreditStatus::Low => "Low",
            CreditStatus::Critical => "Critical",
        }
    }
}

/// File-backed audit counter with bounded recent history
#[derive(Debug)]
pub struct UsageLedger {
    count: u64,
    history: Vec<LedgerEntry>,
    baseline: u64,
    path: PathBuf,
}

impl UsageLedger {
    /// Load the ledger from `path`.
    ///
    /// An absent, unreadable, or corrupt file is the explicit recovery
    /// path: start from the baseline count with empty history.
    pub fn load(path: impl Into<PathBuf>, baseline: u64) -> Self {
        let path = path.into();
        match Self::read_file(&path) {
            Some(file) => {
                debug!("📒 Ledger loaded: {} audits recorded", file.count);
                Self { count: file.count, history: file.history, baseline, path }
            }
            None => {
                info!(
                    "📒 No usable ledger at {}, starting from baseline {}",
                    path.display(),
                    baseline
                );
                Self { count: baseline, history: Vec::new(), baseline, path }
            }
        }
    }

    fn read_file(path: &Path) -> Option<LedgerFile> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return None,
        };
        match serde_json::from_str(&raw) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("📒 Ledger file corrupt, falling back to baseline: {}", e);
                None
            }
        }
    }

    /// Record one completed audit: count+1, history appended, persisted.
    pub fn record_audit(&mut self, addr: impl Into<String>, score: u8) {
        self.count += 1;
        self.history.push(LedgerEntry { addr: addr.into(), score });
        self.persist();
    }

    /// Restore the baseline count and clear history, then persist.
    pub fn reset(&mut self) {
        self.count = self.baseline;
        self.history.clear();
        self.persist();
        info!("📒 Ledger reset to baseline {}", self.baseline);
    }

    /// Total audits recorded (baseline included).
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Full history length.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The most recent audits, newest last, bounded for display.
    pub fn recent(&self) -> &[LedgerEntry] {
        let start = self.history.len().saturating_sub(HISTORY_DISPLAY_LIMIT);
        &self.history[start..]
    }

    /// Credits left under the given grant limit.
    pub fn remaining(&self, grant_limit: u64) -> u64 {
        grant_limit.saturating_sub(self.count)
    }

    /// Health of the remaining credit balance.
    pub fn credit_status(&self, grant_limit: u64) -> CreditStatus {
        let remaining = self.remaining(grant_limit);
        if remaining > CREDITS_HEALTHY_ABOVE {
            CreditStatus::Healthy
        } else if remaining > CREDITS_LOW_ABOVE {
            CreditStatus::Low
        } else {
            CreditStatus::Critical
        }
    }

    /// Mirror the current state to disk, best effort.
    fn persist(&self) {
        let file = LedgerFile { count: self.count, history: self.history.clone() };
        let json = match serde_json::to_string_pretty(&file) {
            Ok(json) => json,
            Err(e) => {
                warn!("📒 Ledger serialization failed, state kept in memory: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            warn!(
                "📒 Ledger write to {} failed, state kept in memory: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_ledger_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("safelaunch_ledger_{}_{}.json", tag, std::process::id()))
    }

    #[test]
    fn test_missing_file_starts_at_baseline() {
        let path = temp_ledger_path("missing");
        let _ = fs::remove_file(&path);

        let ledger = UsageLedger::load(&path, 16);
        assert_eq!(ledger.count(), 16);
        assert_eq!(ledger.history_len(), 0);
    }

    #[test]
    fn test_record_audit_increments_and_persists() {
        let path = temp_ledger_path("record");
        let _ = fs::remove_file(&path);

        let mut ledger = UsageLedger::load(&path, 16);
        ledger.record_audit("0xabc", 85);
        assert_eq!(ledger.count(), 17);

        // A fresh load sees the persisted state
        let reloaded = UsageLedger::load(&path, 16);
        assert_eq!(reloaded.count(), 17);
        assert_eq!(reloaded.recent(), &[LedgerEntry { addr: "0xabc".into(), score: 85 }]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_recovers_to_baseline() {
        let path = temp_ledger_path("corrupt");
        fs::write(&path, "{not json").unwrap();

        let ledger = UsageLedger::load(&path, 22);
        assert_eq!(ledger.count(), 22);
        assert_eq!(ledger.history_len(), 0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_reset_restores_baseline_and_clears_history() {
        let path = temp_ledger_path("reset");
        let _ = fs::remove_file(&path);

        let mut ledger = UsageLedger::load(&path, 11);
        ledger.record_audit("0x1", 90);
        ledger.record_audit("0x2", 40);
        ledger.reset();

        assert_eq!(ledger.count(), 11);
        assert_eq!(ledger.history_len(), 0);

        let reloaded = UsageLedger::load(&path, 11);
        assert_eq!(reloaded.count(), 11);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_recent_bounded_to_display_limit() {
        let path = temp_ledger_path("recent");
        let _ = fs::remove_file(&path);

        let mut ledger = UsageLedger::load(&path, 0);
        for i in 0..8 {
            ledger.record_audit(format!("0x{}", i), i as u8);
        }
        assert_eq!(ledger.history_len(), 8);

        let recent = ledger.recent();
        assert_eq!(recent.len(), HISTORY_DISPLAY_LIMIT);
        assert_eq!(recent.first().unwrap().addr, "0x3");
        assert_eq!(recent.last().unwrap().addr, "0x7");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_credit_status_thresholds() {
        let path = temp_ledger_path("credits");
        let _ = fs::remove_file(&path);

        let mut ledger = UsageLedger::load(&path, 0);
        assert_eq!(ledger.credit_status(2000), CreditStatus::Healthy);

        for _ in 0..1600 {
            ledger.count += 1; // skip persistence churn
        }
        assert_eq!(ledger.remaining(2000), 400);
        assert_eq!(ledger.credit_status(2000), CreditStatus::Low);

        ledger.count = 1950;
        assert_eq!(ledger.credit_status(2000), CreditStatus::Critical);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_failure_keeps_memory_authoritative() {
        // A directory path cannot be written as a file
        let mut ledger = UsageLedger::load(std::env::temp_dir(), 5);
        ledger.record_audit("0xabc", 70);
        assert_eq!(ledger.count(), 6);
        assert_eq!(ledger.history_len(), 1);
    }
}
