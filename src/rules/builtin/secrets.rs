use crate::rules::matcher::{CredentialAssignmentMatcher, RegexMatcher};
use crate::rules::{Category, Rule, Severity};

const CREDENTIAL_KEYWORDS: &[&str] = &[
    "password", "passwd", "pwd", "secret", "api_key", "apikey", "token", "auth",
];

/// CODATS-003 / CODATS-004: hardcoded credentials and API keys.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "CODATS-003",
            "Hardcoded credential",
            Category::HardcodedSecret,
            Severity::High,
            "A string literal is assigned to a credential-like variable. Secrets belong in \
             environment variables or a vault.",
            Box::new(CredentialAssignmentMatcher::new(
                CREDENTIAL_KEYWORDS.iter().copied(),
            )),
        )
        .with_remediation(
            "Fetch credentials from the environment (os.getenv, process.env) or a secrets manager.",
        ),
        Rule::new(
            "CODATS-004",
            "Hardcoded API key",
            Category::HardcodedSecret,
            Severity::High,
            "An API key shape is embedded in source. Credentials should never be hardcoded.",
            Box::new(
                RegexMatcher::new(
                    r#"(?i)(?:api[_-]?key|apikey|access[_-]?key)\s*[:=]\s*['"][\w\-]{20,}['"]"#,
                )
                .unwrap(),
            ),
        )
        .with_remediation("Move API keys to .env files or a secrets management system."),
    ]
}
