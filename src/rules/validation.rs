//! Optional strict checks on decoded rules.
//!
//! # Responsibilities
//! - Flag rules the decoder accepts but that can never match or redirect usefully
//!
//! # Design Decisions
//! - Returns all rule errors, not just the first
//! - Never run by the decoder itself; callers opt in

use crate::rules::Rule;

/// A semantic problem with a single decoded rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rule #{index}: path is empty")]
    EmptyPath { index: usize },

    #[error("rule #{index}: path {path:?} does not start with '/'")]
    RelativePath { index: usize, path: String },

    #[error("rule #{index}: url for {path:?} is empty")]
    EmptyTarget { index: usize, path: String },

    #[error("rule #{index}: url for {path:?} contains control characters")]
    InvalidTarget { index: usize, path: String },
}

/// Check every rule, collecting all problems.
pub fn validate_rules(rules: &[Rule]) -> Result<(), Vec<RuleError>> {
    let mut errors = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        if rule.path.is_empty() {
            errors.push(RuleError::EmptyPath { index });
        } else if !rule.path.starts_with('/') {
            errors.push(RuleError::RelativePath {
                index,
                path: rule.path.clone(),
            });
        }

        if rule.target.trim().is_empty() {
            errors.push(RuleError::EmptyTarget {
                index,
                path: rule.path.clone(),
            });
        } else if rule.target.chars().any(char::is_control) {
            // Would not survive as a Location header value.
            errors.push(RuleError::InvalidTarget {
                index,
                path: rule.path.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rules_pass() {
        let rules = vec![
            Rule::new("/a", "https://a.example"),
            Rule::new("/b", "/relative/target"),
        ];
        assert_eq!(validate_rules(&rules), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let rules = vec![
            Rule::new("", "https://a.example"),
            Rule::new("/ok", "https://ok.example"),
            Rule::new("no-slash", " "),
            Rule::new("/bad", "https://x.example/\nSet-Cookie: a=b"),
        ];

        let errors = validate_rules(&rules).unwrap_err();
        assert_eq!(
            errors,
            vec![
                RuleError::EmptyPath { index: 0 },
                RuleError::RelativePath { index: 2, path: "no-slash".into() },
                RuleError::EmptyTarget { index: 2, path: "no-slash".into() },
                RuleError::InvalidTarget { index: 3, path: "/bad".into() },
            ]
        );
    }
}
