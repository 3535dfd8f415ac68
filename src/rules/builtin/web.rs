use crate::rules::matcher::RegexMatcher;
use crate::rules::{Category, Language, Rule, Severity};

/// CODATS-017..CODATS-021: web-facing weaknesses (XSS, path traversal,
/// disabled TLS verification, sensitive logging, unvalidated redirects).
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "CODATS-017",
            "innerHTML assignment",
            Category::CrossSiteScripting,
            Severity::High,
            "Assigning to innerHTML is vulnerable to XSS when content includes user input.",
            Box::new(RegexMatcher::new(r"\.\s*innerHTML\s*=").unwrap()),
        )
        .with_remediation("Use textContent for text, or sanitize HTML before assignment.")
        .for_languages([Language::JavaScript, Language::TypeScript]),
        Rule::new(
            "CODATS-018",
            "Path traversal",
            Category::PathTraversal,
            Severity::High,
            "Request input flows directly into a file operation.",
            Box::new(
                RegexMatcher::new(
                    r"(?i)(?:readFileSync|readFile|open|fopen)\s*\(\s*(?:req\.|request\.)(?:query|params|body)",
                )
                .unwrap(),
            ),
        )
        .with_remediation(
            "Normalize the path and reject anything escaping the base directory before opening.",
        ),
        Rule::new(
            "CODATS-019",
            "TLS verification disabled",
            Category::InsecureTransport,
            Severity::High,
            "Certificate verification is turned off, allowing man-in-the-middle attacks.",
            Box::new(
                RegexMatcher::new(
                    r"(?i)(?:sslVerify|verify_ssl|verifySSL|checkCertificate|SSL_VERIFYPEER|verify)\s*[:=]\s*(?:false|0|no|disable)",
                )
                .unwrap(),
            ),
        )
        .with_remediation("Enable certificate verification, or fix the trust store instead."),
        Rule::new(
            "CODATS-020",
            "Sensitive data logged",
            Category::SensitiveLogging,
            Severity::Medium,
            "Passwords, tokens, or credentials appear in a logging call.",
            Box::new(
                RegexMatcher::new(
                    r"(?i)(?:console\.log|print|logger\.\w+)\s*\(\s*[^)\n]*(?:password|secret|token|credential)",
                )
                .unwrap(),
            ),
        )
        .with_remediation("Strip secrets from log statements."),
        Rule::new(
            "CODATS-021",
            "Unvalidated redirect",
            Category::UnvalidatedRedirect,
            Severity::Medium,
            "Request input directly controls a redirect destination.",
            Box::new(
                RegexMatcher::new(
                    r"(?i)(?:redirect|location|window\.location)\s*=\s*(?:req\.|request\.)(?:query|params|body)",
                )
                .unwrap(),
            ),
        )
        .with_remediation("Validate the redirect target against an allowlist of hosts.")
        .for_languages([Language::JavaScript, Language::TypeScript, Language::Java]),
    ]
}
