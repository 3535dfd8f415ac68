use crate::rules::matcher::RegexMatcher;
use crate::rules::{Category, Language, Rule, Severity};

/// CODATS-001 / CODATS-002: dynamic code execution.
///
/// `eval`/`exec` hand arbitrary strings to the interpreter. Flagged on the
/// call site regardless of the argument.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "CODATS-001",
            "eval() usage",
            Category::CodeExecution,
            Severity::Critical,
            "eval() executes arbitrary code. Use JSON parsing or explicit dispatch instead.",
            Box::new(RegexMatcher::new(r"\beval\s*\(").unwrap()),
        )
        .with_remediation(
            "Replace eval() with safer alternatives such as JSON parsing or ast.literal_eval().",
        )
        .for_languages([Language::Python, Language::JavaScript, Language::TypeScript]),
        Rule::new(
            "CODATS-002",
            "exec() usage",
            Category::CodeExecution,
            Severity::Critical,
            "exec() executes arbitrary code. Avoid dynamic code execution.",
            Box::new(RegexMatcher::new(r"\bexec\s*\(").unwrap()),
        )
        .with_remediation("Use specific, controlled function calls instead of exec().")
        .for_languages([Language::Python]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(rule: &Rule, text: &str) -> usize {
        rule.matcher().find(text).len()
    }

    #[test]
    fn flags_eval_call() {
        let rules = rules();
        assert_eq!(matches(&rules[0], "result = eval(user_input)"), 1);
    }

    #[test]
    fn ignores_identifier_containing_eval() {
        let rules = rules();
        assert_eq!(matches(&rules[0], "evaluate(user_input)"), 0);
        assert_eq!(matches(&rules[0], "retrieval(x)"), 0);
    }

    #[test]
    fn exec_does_not_match_execute() {
        let rules = rules();
        assert_eq!(matches(&rules[1], "cursor.execute(query)"), 0);
        assert_eq!(matches(&rules[1], r#"exec("malicious code here")"#), 1);
    }
}
