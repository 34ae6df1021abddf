//! Rule decoding from YAML.

use serde::{Deserialize, Serialize};

/// A single redirect directive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rule {
    /// Exact request path to match (e.g. "/docs").
    pub path: String,

    /// Redirect destination, absolute or relative.
    #[serde(rename = "url")]
    pub target: String,
}

impl Rule {
    pub fn new(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
        }
    }
}

/// The input could not be decoded into a sequence of `{path, url}` records.
#[derive(Debug, thiserror::Error)]
#[error("invalid redirect rules: {0}")]
pub struct ParseError(#[from] serde_yaml::Error);

/// Decode a YAML sequence of `{path, url}` records, preserving input order.
///
/// An empty or null document yields no rules; only the first document of a
/// multi-document stream is read. Missing or mistyped fields, or
/// a top level that is not a sequence, fail the whole decode.
pub fn parse_rules(bytes: &[u8]) -> Result<Vec<Rule>, ParseError> {
    // Input with no document at all (blank, comments only) has nothing to decode.
    let rules = match serde_yaml::Deserializer::from_slice(bytes).next() {
        Some(document) => Option::<Vec<Rule>>::deserialize(document)?.unwrap_or_default(),
        None => Vec::new(),
    };
    tracing::debug!(count = rules.len(), "Decoded redirect rules");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RULES: &str = "
- path: /google
  url: https://www.google.com
- path: /github
  url: https://www.github.com
";

    #[test]
    fn test_parse_preserves_order() {
        let rules = parse_rules(TWO_RULES.as_bytes()).unwrap();
        assert_eq!(
            rules,
            vec![
                Rule::new("/google", "https://www.google.com"),
                Rule::new("/github", "https://www.github.com"),
            ]
        );
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let yaml = "
- path: /a
  url: https://one.example
- path: /a
  url: https://two.example
";
        let rules = parse_rules(yaml.as_bytes()).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].target, "https://two.example");
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse_rules(b"").unwrap().is_empty());
        assert!(parse_rules(b"  \n# nothing here\n").unwrap().is_empty());
        assert!(parse_rules(b"[]").unwrap().is_empty());
        assert!(parse_rules(b"---\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_null_document() {
        assert!(parse_rules(b"~").unwrap().is_empty());
        assert!(parse_rules(b"null\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let yaml = "- path: /x\n  url: /y\n  note: internal\n";
        assert_eq!(parse_rules(yaml.as_bytes()).unwrap(), vec![Rule::new("/x", "/y")]);
    }

    #[test]
    fn test_parse_rejects_top_level_mapping() {
        let yaml = "path: /google\nurl: https://www.google.com\n";
        assert!(parse_rules(yaml.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_url() {
        let yaml = "- path: /google\n";
        let err = parse_rules(yaml.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("url"), "unexpected message: {}", err);
    }

    #[test]
    fn test_parse_rejects_malformed_syntax() {
        assert!(parse_rules(b"- path: [unclosed\n").is_err());
        assert!(parse_rules(b"- path: /a\n  url: {x: 1}\n").is_err());
    }
}
