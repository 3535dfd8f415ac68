use crate::rules::matcher::RegexMatcher;
use crate::rules::{Category, Rule, Severity};

/// CODATS-011 / CODATS-012: broken hash functions.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "CODATS-011",
            "MD5 hashing",
            Category::WeakCrypto,
            Severity::High,
            "MD5 is cryptographically broken. Use SHA-256 or a password hash like bcrypt.",
            Box::new(RegexMatcher::new(r"(?i)\bmd5\s*\(").unwrap()),
        )
        .with_remediation(
            r#"Use hashlib.sha256() / crypto.createHash("sha256"), or bcrypt for passwords."#,
        ),
        Rule::new(
            "CODATS-012",
            "SHA-1 hashing",
            Category::WeakCrypto,
            Severity::High,
            "SHA-1 is deprecated for security use. Use SHA-256 or stronger.",
            Box::new(RegexMatcher::new(r"(?i)\bsha1\s*\(").unwrap()),
        )
        .with_remediation("Use SHA-256 or a modern hash algorithm."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_hashlib_md5() {
        let r = &rules()[0];
        assert_eq!(
            r.matcher()
                .find("password_hash = hashlib.md5(password).digest()")
                .len(),
            1
        );
    }

    #[test]
    fn sha256_passes() {
        let r = &rules()[0];
        assert!(r.matcher().find("hashlib.sha256(password)").is_empty());
        let r = &rules()[1];
        assert!(r.matcher().find("hashlib.sha256(password)").is_empty());
    }
}
