//! Report Composer
//!
//! Assembles the downloadable plain-text audit report and the share
//! artifacts (social URL, badge snippet). Pure string assembly, no I/O:
//! the caller decides whether anything is written to disk.

use crate::core::classifier::Verdict;
use crate::core::findings::Finding;
use crate::core::scoring::ScoreSet;
use crate::models::config::Chain;
use crate::utils::constants::{NO_ISSUES_LINE, REPORT_DISCLAIMER, REPORT_HEADER};

/// Compose the full report document.
///
/// Fixed structure: header, target/network/verdict/score lines, a
/// separator, one bullet per finding (or the fixed no-issues line), and
/// the closing disclaimer. Never fails.
pub fn compose_report(
    address: &str,
    chain: Chain,
    verdict: Verdict,
    scores: &ScoreSet,
    findings: &[Finding],
) -> String {
    let mut report = String::new();
    report.push_str(REPORT_HEADER);
    report.push('\n');
    report.push_str(&format!("Target Address: {}\n", address));
    report.push_str(&format!("Network: {}\n", chain.display_name()));
    report.push_str(&format!("Verdict: {}\n", verdict.label()));
    report.push_str(&format!("Risk Score: {}/100\n", scores.rounded_risk));
    report.push_str(&format!("Safety Score: {}/100\n", scores.safety_score));
    match scores.rug_probability {
        Some(p) => report.push_str(&format!("Rug Probability: {:.1}/100\n", p)),
        None => report.push_str("Rug Probability: unavailable\n"),
    }
    report.push_str("------------------------------\n\n");

    if findings.is_empty() {
        report.push_str(NO_ISSUES_LINE);
        report.push('\n');
    } else {
        for finding in findings {
            report.push_str(&format!("- {}: {}\n", finding.title, finding.description));
        }
    }

    report.push('\n');
    report.push_str(REPORT_DISCLAIMER);
    report.push('\n');
    report
}

/// Deterministic report filename from the first 8 characters of the
/// audited address.
pub fn report_filename(address: &str) -> String {
    format!("Audit_{}.txt", address_prefix(address))
}

/// Social-share URL embedding the address prefix and verdict.
pub fn share_url(address: &str, verdict: Verdict) -> String {
    format!(
        "https://twitter.com/intent/tweet?text=SafeLaunch%20Guard%20scanned%20{}...%20{}",
        address_prefix(address),
        verdict.label().replace(' ', "%20"),
    )
}

/// Markdown shield badge, offered for LOW verdicts only.
pub fn badge_markdown(verdict: Verdict) -> Option<String> {
    match verdict {
        Verdict::Low => Some(
            "![SafeLaunch Verified](https://img.shields.io/badge/SafeLaunch-LOW%20RISK-brightgreen?style=for-the-badge)"
                .to_string(),
        ),
        _ => None,
    }
}

fn address_prefix(address: &str) -> String {
    address.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::AuditResponse;

    fn scores(raw: f64) -> ScoreSet {
        let response: AuditResponse =
            serde_json::from_value(serde_json::json!({ "overallRisk": raw })).unwrap();
        ScoreSet::from_response(&response).unwrap()
    }

    #[test]
    fn test_report_core_lines() {
        let s = scores(15.0);
        let report = compose_report(
            "0xABC123456789",
            Chain::Base,
            Verdict::classify(s.rounded_risk),
            &s,
            &[],
        );
        assert!(report.starts_with("SafeLaunch Guard Security Audit\n"));
        assert!(report.contains("Target Address: 0xABC123456789"));
        assert!(report.contains("Network: Base"));
        assert!(report.contains("Verdict: LOW RISK"));
        assert!(report.contains("Safety Score: 85/100"));
        assert!(report.contains("Risk Score: 15/100"));
        assert!(report.trim_end().ends_with(REPORT_DISCLAIMER));
    }

    #[test]
    fn test_empty_findings_render_no_issues_line() {
        let s = scores(75.0);
        let report =
            compose_report("0xdead", Chain::Ethereum, Verdict::High, &s, &[]);
        assert!(report.contains(NO_ISSUES_LINE));
        assert!(!report.contains("\n- "));
    }

    #[test]
    fn test_findings_render_one_bullet_each() {
        let s = scores(60.0);
        let findings = vec![
            Finding { title: "Mint authority".into(), description: "Owner can mint".into() },
            Finding { title: "High tax".into(), description: "12% sell tax".into() },
        ];
        let report = compose_report("0xdead", Chain::Bsc, Verdict::High, &s, &findings);
        assert!(report.contains("- Mint authority: Owner can mint\n"));
        assert!(report.contains("- High tax: 12% sell tax\n"));
        assert!(!report.contains(NO_ISSUES_LINE));
    }

    #[test]
    fn test_rug_probability_line() {
        let with: AuditResponse = serde_json::from_value(
            serde_json::json!({"overallRisk": 40, "creatorRisk": 50}),
        )
        .unwrap();
        let s = ScoreSet::from_response(&with).unwrap();
        let report = compose_report("0x1", Chain::Base, Verdict::Medium, &s, &[]);
        assert!(report.contains("Rug Probability: 34.0/100"));

        let s = scores(40.0);
        let report = compose_report("0x1", Chain::Base, Verdict::Medium, &s, &[]);
        assert!(report.contains("Rug Probability: unavailable"));
    }

    #[test]
    fn test_report_filename_prefix() {
        assert_eq!(report_filename("0xABC123456789"), "Audit_0xABC123.txt");
        assert_eq!(report_filename("0xAB"), "Audit_0xAB.txt");
    }

    #[test]
    fn test_share_url_embeds_prefix_and_verdict() {
        let url = share_url("0xABC123456789", Verdict::High);
        assert!(url.contains("0xABC123"));
        assert!(url.contains("HIGH%20RISK"));
    }

    #[test]
    fn test_badge_low_only() {
        assert!(badge_markdown(Verdict::Low).unwrap().contains("brightgreen"));
        assert!(badge_markdown(Verdict::Medium).is_none());
        assert!(badge_markdown(Verdict::High).is_none());
    }
}
