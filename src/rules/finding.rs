use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single located match of a rule against a source file.
///
/// Severity and category are stamped at detection time from the registry, so
/// a finding stays stable even if the rule set changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Rule identifier (e.g., "CODATS-001"). A weak reference by id, not an
    /// owning link to the rule.
    pub rule_id: String,
    /// Vulnerability category.
    pub category: Category,
    /// Severity level.
    pub severity: Severity,
    /// File the match was found in.
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column where the match starts.
    pub column: usize,
    /// 1-based column just past the end of the match.
    pub end_column: usize,
    /// Matched text, truncated to 50 characters.
    pub snippet: String,
    /// Human-readable description of the issue.
    pub message: String,
    /// Suggested remediation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" | "crit" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CodeExecution,
    HardcodedSecret,
    WeakCrypto,
    InsecureDeserialization,
    CommandInjection,
    InsecureRandom,
    SqlInjection,
    DefaultCredentials,
    PlaintextConnectionString,
    CrossSiteScripting,
    PathTraversal,
    InsecureTransport,
    SensitiveLogging,
    UnvalidatedRedirect,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CodeExecution => write!(f, "Code Execution"),
            Self::HardcodedSecret => write!(f, "Hardcoded Secret"),
            Self::WeakCrypto => write!(f, "Weak Cryptography"),
            Self::InsecureDeserialization => write!(f, "Insecure Deserialization"),
            Self::CommandInjection => write!(f, "Command Injection"),
            Self::InsecureRandom => write!(f, "Insecure Randomness"),
            Self::SqlInjection => write!(f, "SQL Injection"),
            Self::DefaultCredentials => write!(f, "Default Credentials"),
            Self::PlaintextConnectionString => write!(f, "Plaintext Connection String"),
            Self::CrossSiteScripting => write!(f, "Cross-Site Scripting"),
            Self::PathTraversal => write!(f, "Path Traversal"),
            Self::InsecureTransport => write!(f, "Insecure Transport"),
            Self::SensitiveLogging => write!(f, "Sensitive Data Logging"),
            Self::UnvalidatedRedirect => write!(f, "Unvalidated Redirect"),
        }
    }
}

/// Per-severity finding counts for one scanned file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }

    pub fn count(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }
}
