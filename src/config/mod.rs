use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::policy::Policy;

/// Top-level configuration from `.codats.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: Policy,
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# CODATS configuration

[policy]
# Minimum severity to fail the scan (low, medium, high, critical).
fail_on = "high"

# Rule IDs to ignore entirely.
# ignore_rules = ["CODATS-020"]

# Per-rule severity overrides.
# [policy.overrides]
# "CODATS-014" = "low"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;

    #[test]
    fn missing_file_yields_default() {
        let config = Config::load(Path::new("/nonexistent/.codats.toml")).unwrap();
        assert_eq!(config.policy.fail_on, Severity::High);
        assert!(config.policy.ignore_rules.is_empty());
    }

    #[test]
    fn starter_toml_round_trips() {
        let config: Config = toml::from_str(Config::starter_toml()).unwrap();
        assert_eq!(config.policy.fail_on, Severity::High);
    }

    #[test]
    fn parses_overrides_and_ignores() {
        let toml_src = r#"
[policy]
fail_on = "critical"
ignore_rules = ["CODATS-020"]

[policy.overrides]
"CODATS-014" = "low"
"#;
        let config: Config = toml::from_str(toml_src).unwrap();
        assert_eq!(config.policy.fail_on, Severity::Critical);
        assert!(config.policy.ignore_rules.contains("CODATS-020"));
        assert_eq!(
            config.policy.overrides.get("CODATS-014"),
            Some(&Severity::Low)
        );
    }
}
