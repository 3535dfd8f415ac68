use crate::rules::matcher::RegexMatcher;
use crate::rules::{Category, Rule, Severity};

/// CODATS-015: well-known default username/password pairs.
///
/// Matches a default-looking username assignment followed within a short
/// window by a default-looking password assignment, so dict-style blocks
/// spanning lines are caught.
pub(super) fn rules() -> Vec<Rule> {
    vec![Rule::new(
        "CODATS-015",
        "Default credentials",
        Category::DefaultCredentials,
        Severity::High,
        "Default usernames and passwords are trivially guessable.",
        Box::new(
            RegexMatcher::new(
                r#"(?i)['"]?(?:username|user)['"]?\s*[:=]\s*['"](?:admin|root|test|demo|default|user)['"][\s\S]{0,120}?['"]?(?:password|passwd|pass)['"]?\s*[:=]\s*['"](?:admin|password\w*|123456|test|default)['"]"#,
            )
            .unwrap(),
        ),
    )
    .with_remediation("Use strong, unique credentials and rotate them regularly.")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_dict_style_defaults() {
        let r = &rules()[0];
        let text = "credentials = {\n    \"username\": \"admin\",\n    \"password\": \"password123\"\n}";
        assert_eq!(r.matcher().find(text).len(), 1);
    }

    #[test]
    fn strong_password_passes() {
        let r = &rules()[0];
        let text = "username = \"admin\"\npassword = \"c0rrect-h0rse-battery\"\n";
        assert!(r.matcher().find(text).is_empty());
    }

    #[test]
    fn username_alone_passes() {
        let r = &rules()[0];
        assert!(r.matcher().find(r#"username = "admin""#).is_empty());
    }
}
