use crate::rules::matcher::RegexMatcher;
use crate::rules::{Category, Language, Rule, Severity};

/// CODATS-009 / CODATS-010: unsafe deserialization of untrusted data.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "CODATS-009",
            "pickle deserialization",
            Category::InsecureDeserialization,
            Severity::Critical,
            "pickle.load/loads can execute arbitrary code during deserialization.",
            Box::new(RegexMatcher::new(r"pickle\s*\.\s*loads?\s*\(").unwrap()),
        )
        .with_remediation(
            "Use json.loads() for untrusted data, or validate serialized input thoroughly.",
        )
        .for_languages([Language::Python]),
        Rule::new(
            "CODATS-010",
            "JSON parse of evaluated input",
            Category::InsecureDeserialization,
            Severity::Critical,
            "JSON.parse wrapped around eval/Function defeats the point of safe parsing.",
            Box::new(
                RegexMatcher::new(r"(?i)JSON\s*\.\s*parse\s*\(\s*(?:eval|Function)\s*\(").unwrap(),
            ),
        )
        .with_remediation("Use plain JSON.parse() without an eval wrapper.")
        .for_languages([Language::JavaScript, Language::TypeScript]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_pickle_loads() {
        let r = &rules()[0];
        assert_eq!(
            r.matcher().find("user_data = pickle.loads(untrusted_data)").len(),
            1
        );
    }

    #[test]
    fn json_loads_passes() {
        let r = &rules()[0];
        assert!(r.matcher().find("data = json.loads(raw)").is_empty());
    }
}
