//! Finding Formatter
//!
//! Turns raw upstream issue records into display-ready findings. Missing
//! or empty titles and descriptions degrade to fixed fallback copy, so a
//! finding never renders blank.

use serde::Serialize;

use crate::models::types::Issue;
use crate::utils::constants::{FALLBACK_ISSUE_DESCRIPTION, FALLBACK_ISSUE_TITLE};

/// One display-ready security finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub title: String,
    pub description: String,
}

impl Finding {
    /// Build a finding from a raw issue record, applying fallbacks.
    /// An empty string counts as absent.
    pub fn from_issue(issue: &Issue) -> Finding {
        Finding {
            title: non_empty(issue.title.as_deref()).unwrap_or(FALLBACK_ISSUE_TITLE).to_string(),
            description: non_empty(issue.description.as_deref())
                .unwrap_or(FALLBACK_ISSUE_DESCRIPTION)
                .to_string(),
        }
    }
}

/// Format all issues, preserving upstream order. An empty result is a
/// valid "no threats detected" outcome, not an error.
pub fn format_findings(issues: &[Issue]) -> Vec<Finding> {
    issues.iter().map(Finding::from_issue).collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(title: Option<&str>, description: Option<&str>) -> Issue {
        Issue {
            title: title.map(String::from),
            description: description.map(String::from),
        }
    }

    #[test]
    fn test_complete_issue_passes_through() {
        let f = Finding::from_issue(&issue(Some("Mint authority"), Some("Owner can mint")));
        assert_eq!(f.title, "Mint authority");
        assert_eq!(f.description, "Owner can mint");
    }

    #[test]
    fn test_missing_fields_use_fallbacks() {
        let f = Finding::from_issue(&issue(None, None));
        assert_eq!(f.title, FALLBACK_ISSUE_TITLE);
        assert_eq!(f.description, FALLBACK_ISSUE_DESCRIPTION);
    }

    #[test]
    fn test_empty_string_treated_as_absent() {
        let f = Finding::from_issue(&issue(Some(""), Some("")));
        assert_eq!(f.title, FALLBACK_ISSUE_TITLE);
        assert_eq!(f.description, FALLBACK_ISSUE_DESCRIPTION);
    }

    #[test]
    fn test_order_preserved() {
        let issues = vec![
            issue(Some("first"), None),
            issue(Some("second"), None),
            issue(Some("third"), None),
        ];
        let findings = format_findings(&issues);
        let titles: Vec<&str> = findings.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let once = Finding::from_issue(&issue(Some("Tax"), Some("5% on sells")));
        let again = Finding::from_issue(&issue(
            Some(once.title.as_str()),
            Some(once.description.as_str()),
        ));
        assert_eq!(once, again);
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(format_findings(&[]).is_empty());
    }
}
