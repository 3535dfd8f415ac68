pub mod builtin;
pub mod finding;
pub mod matcher;
pub mod policy;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Result, ScanError};

pub use finding::{Category, Finding, Severity, Summary};
pub use matcher::{Matcher, Span};

/// Source language of a scanned file, detected from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "py" => Self::Python,
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "ts" | "tsx" => Self::TypeScript,
            "java" => Self::Java,
            _ => Self::Unknown,
        }
    }
}

/// A named, declarative detection rule: pattern plus severity/category
/// metadata. Immutable once registered; rules are data, never code.
#[derive(Debug)]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub severity: Severity,
    pub description: String,
    pub remediation: Option<String>,
    /// Languages this rule applies to. Empty means all.
    pub languages: Vec<Language>,
    matcher: Box<dyn Matcher>,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        severity: Severity,
        description: impl Into<String>,
        matcher: Box<dyn Matcher>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            severity,
            description: description.into(),
            remediation: None,
            languages: Vec::new(),
            matcher,
        }
    }

    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }

    pub fn for_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.languages = languages.into_iter().collect();
        self
    }

    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }

    /// Whether this rule should run against a file in `lang`. Files with an
    /// unrecognized extension get every rule; textual patterns are not
    /// language-bound at match time.
    pub fn applies_to(&self, lang: Language) -> bool {
        self.languages.is_empty() || lang == Language::Unknown || self.languages.contains(&lang)
    }
}

/// Ordered set of detection rules, keyed by stable id.
///
/// Immutable after initialization in normal operation, so concurrent scans
/// can share a reference without locking.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
    by_id: HashMap<String, usize>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in rule set.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for rule in builtin::all_rules() {
            registry
                .register(rule)
                .expect("builtin rule ids are unique");
        }
        registry
    }

    /// Add a rule. Fails if the id is already registered; registry integrity
    /// errors are fatal to startup, not recoverable mid-scan.
    pub fn register(&mut self, rule: Rule) -> Result<()> {
        if self.by_id.contains_key(&rule.id) {
            return Err(ScanError::DuplicateRule {
                rule_id: rule.id.clone(),
            });
        }
        self.by_id.insert(rule.id.clone(), self.rules.len());
        self.rules.push(rule);
        Ok(())
    }

    /// Rules in registration order. Restartable: each call yields a fresh
    /// iterator.
    pub fn all(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.by_id.get(id).map(|&idx| &self.rules[idx])
    }

    /// Severity of a rule by id. Pure lookup; `UnknownRule` if absent.
    pub fn classify(&self, id: &str) -> Result<Severity> {
        self.get(id)
            .map(|r| r.severity)
            .ok_or_else(|| ScanError::UnknownRule {
                rule_id: id.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

static DEFAULT_REGISTRY: Lazy<RuleRegistry> = Lazy::new(RuleRegistry::builtin);

/// Process-wide read-only registry with the built-in rule set. Initialized
/// once on first use, never mutated afterwards.
pub fn default_registry() -> &'static RuleRegistry {
    &DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::matcher::SubstringMatcher;

    fn test_rule(id: &str) -> Rule {
        Rule::new(
            id,
            "Test Rule",
            Category::CodeExecution,
            Severity::High,
            "test",
            Box::new(SubstringMatcher::new("eval(")),
        )
    }

    #[test]
    fn register_rejects_duplicate_id() {
        let mut registry = RuleRegistry::new();
        registry.register(test_rule("CODATS-001")).unwrap();
        let err = registry.register(test_rule("CODATS-001")).unwrap_err();
        assert!(matches!(
            err,
            ScanError::DuplicateRule { rule_id } if rule_id == "CODATS-001"
        ));
    }

    #[test]
    fn all_preserves_registration_order_and_restarts() {
        let mut registry = RuleRegistry::new();
        registry.register(test_rule("CODATS-002")).unwrap();
        registry.register(test_rule("CODATS-001")).unwrap();

        let ids: Vec<&str> = registry.all().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["CODATS-002", "CODATS-001"]);
        // A second call restarts from the beginning.
        let again: Vec<&str> = registry.all().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn classify_unknown_rule_errors() {
        let registry = RuleRegistry::new();
        let err = registry.classify("CODATS-999").unwrap_err();
        assert!(matches!(err, ScanError::UnknownRule { .. }));
    }

    #[test]
    fn classify_returns_registered_severity() {
        let mut registry = RuleRegistry::new();
        registry.register(test_rule("CODATS-001")).unwrap();
        assert_eq!(registry.classify("CODATS-001").unwrap(), Severity::High);
    }

    #[test]
    fn builtin_registry_is_nonempty_and_unique() {
        let registry = RuleRegistry::builtin();
        assert!(registry.len() >= 20);
    }

    #[test]
    fn language_scoped_rule_skips_other_languages() {
        let rule = test_rule("CODATS-001").for_languages([Language::Python]);
        assert!(rule.applies_to(Language::Python));
        assert!(rule.applies_to(Language::Unknown));
        assert!(!rule.applies_to(Language::Java));
    }
}
