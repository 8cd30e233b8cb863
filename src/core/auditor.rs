//! Audit pipeline orchestrator
//!
//! Wires validate -> quota gate -> fetch -> normalize -> classify ->
//! format -> compose into one operation and owns the usage ledger.
//!
//! Invariant: the ledger records exactly once per fully successful
//! audit, and zero times on any error path. There is no partial
//! success - every stage after the fetch is pure, so a failure anywhere
//! leaves both the ledger file and the in-memory count untouched.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::classifier::Verdict;
use crate::core::findings::{format_findings, Finding};
use crate::core::report::{badge_markdown, compose_report, report_filename, share_url};
use crate::core::scoring::ScoreSet;
use crate::models::config::{Chain, GuardConfig};
use crate::models::errors::{AppError, AppResult};
use crate::models::types::TopHolder;
use crate::providers::webacy::WebacyClient;
use crate::utils::constants::API_KEY_ENV;
use crate::utils::ledger::UsageLedger;

/// Everything a completed audit produced
#[derive(Debug, Clone, Serialize)]
pub struct AuditOutcome {
    pub address: String,
    pub chain_name: &'static str,
    pub verdict: Verdict,
    pub scores: ScoreSet,
    pub findings: Vec<Finding>,
    /// Largest holders as reported upstream, passthrough for display
    #[serde(skip)]
    pub top_holders: Vec<TopHolder>,
    /// Downloadable report document
    pub report: String,
    /// Deterministic filename for the report artifact
    pub report_filename: String,
    /// Social-share link
    pub share_url: String,
    /// Markdown badge, present for LOW verdicts only
    pub badge_markdown: Option<String>,
}

impl AuditOutcome {
    /// Console rendering of the assessment.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "\n{} Assessment: {}\n",
            self.verdict.emoji(),
            self.verdict.label()
        );
        out.push_str(&format!("   Target:       {}\n", self.address));
        out.push_str(&format!("   Network:      {}\n", self.chain_name));
        out.push_str(&format!("   Safety Score: {}/100\n", self.scores.safety_score));
        out.push_str(&format!("   Risk Level:   {}/100\n", self.scores.rounded_risk));
        if let Some(p) = self.scores.rug_probability {
            out.push_str(&format!("   Rug Prob.:    {:.1}/100\n", p));
        }

        if self.findings.is_empty() {
            out.push_str("\n   No significant threats detected.\n");
        } else {
            out.push_str(&format!("\n   🚩 {} risk factor(s) detected:\n", self.findings.len()));
            for finding in &self.findings {
                out.push_str(&format!("     - {}: {}\n", finding.title, finding.description));
            }
        }

        if !self.top_holders.is_empty() {
            out.push_str(&format!("\n   Top holders tracked: {}\n", self.top_holders.len()));
        }

        out
    }
}

/// The audit pipeline: config + client + ledger
#[derive(Debug)]
pub struct Auditor {
    config: GuardConfig,
    client: WebacyClient,
    ledger: UsageLedger,
}

impl Auditor {
    /// Build the pipeline from an explicit configuration.
    pub fn new(config: GuardConfig) -> AppResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::missing_api_key(API_KEY_ENV));
        }
        let client = WebacyClient::from_config(&config);
        let ledger = UsageLedger::load(&config.ledger_path, config.baseline_count);
        Ok(Self { config, client, ledger })
    }

    /// Run one complete audit.
    pub async fn run_audit(&mut self, address: &str, chain: Chain) -> AppResult<AuditOutcome> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AppError::empty_address());
        }

        let limit = self.config.effective_limit();
        if self.ledger.count() >= limit {
            return Err(AppError::quota_exceeded(self.ledger.count(), limit));
        }

        debug!("🛡️ Auditing {} on {}", address, chain.display_name());
        let response = self.client.address_risk(address, chain).await?;

        let scores = ScoreSet::from_response(&response)?;
        let verdict = Verdict::classify(scores.rounded_risk);
        let findings = format_findings(&response.issues);
        let report = compose_report(address, chain, verdict, &scores, &findings);

        // The whole pipeline succeeded; record exactly once.
        self.ledger.record_audit(address, scores.safety_score);
        info!(
            "✅ Audit complete: {} -> {} (safety {}/100)",
            address,
            verdict.label(),
            scores.safety_score
        );

        Ok(AuditOutcome {
            address: address.to_string(),
            chain_name: chain.display_name(),
            verdict,
            scores,
            findings,
            top_holders: response.top_holders,
            report,
            report_filename: report_filename(address),
            share_url: share_url(address, verdict),
            badge_markdown: badge_markdown(verdict),
        })
    }

    /// Ledger view for stats rendering.
    pub fn ledger(&self) -> &UsageLedger {
        &self.ledger
    }

    /// Restore the ledger to its baseline.
    pub fn reset_ledger(&mut self) {
        self.ledger.reset();
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }
}
