//! Startup: turn configuration into a redirect table.
//!
//! Inline `[redirects]` from the config are folded first, then the rules
//! file, so a file rule replaces an inline one for the same path.

use std::fs;
use std::path::PathBuf;

use crate::config::{AppConfig, ConfigError};
use crate::rules::{parse_rules, validate_rules, ParseError, RedirectTable, Rule, RuleError};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read rules file {}: {source}", .path.display())]
    RulesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{} invalid redirect rule(s): {}", .0.len(), join(.0))]
    InvalidRules(Vec<RuleError>),
}

fn join(errors: &[RuleError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collect inline and file rules in fold order.
pub fn load_rules(config: &AppConfig) -> Result<Vec<Rule>, StartupError> {
    let mut rules: Vec<Rule> = config
        .redirects
        .iter()
        .map(|(path, url)| Rule::new(path.clone(), url.clone()))
        .collect();

    if let Some(path) = &config.rules.file {
        let bytes = fs::read(path).map_err(|source| StartupError::RulesFile {
            path: path.clone(),
            source,
        })?;
        let from_file = parse_rules(&bytes)?;
        tracing::info!(path = %path.display(), rules = from_file.len(), "Loaded rules file");
        rules.extend(from_file);
    }

    if config.rules.strict {
        validate_rules(&rules).map_err(StartupError::InvalidRules)?;
    }

    Ok(rules)
}

/// Load, optionally validate, and fold all configured rules.
pub fn build_table(config: &AppConfig) -> Result<RedirectTable, StartupError> {
    let rules = load_rules(config)?;
    let total = rules.len();
    let table = RedirectTable::from_rules(rules);

    if table.len() < total {
        tracing::warn!(
            rules = total,
            distinct_paths = table.len(),
            "Duplicate paths found; later rules replaced earlier ones"
        );
    }
    Ok(table)
}
