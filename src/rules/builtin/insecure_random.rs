use crate::rules::matcher::RegexMatcher;
use crate::rules::{Category, Language, Rule, Severity};

/// CODATS-013 / CODATS-014: non-cryptographic randomness.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "CODATS-013",
            "Insecure random (random module)",
            Category::InsecureRandom,
            Severity::Medium,
            "The random module is not cryptographically secure.",
            Box::new(
                RegexMatcher::new(r"\brandom\s*\.\s*(?:random|choice|randint|randrange)\s*\(")
                    .unwrap(),
            ),
        )
        .with_remediation("Use secrets.randbelow(limit) or secrets.choice(seq).")
        .for_languages([Language::Python]),
        Rule::new(
            "CODATS-014",
            "Insecure random (Math.random)",
            Category::InsecureRandom,
            Severity::Medium,
            "Math.random() is not cryptographically secure.",
            Box::new(RegexMatcher::new(r"Math\.random\s*\(\s*\)").unwrap()),
        )
        .with_remediation("Use crypto.getRandomValues(new Uint8Array(32)).")
        .for_languages([Language::JavaScript, Language::TypeScript]),
    ]
}
