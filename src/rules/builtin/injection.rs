use crate::rules::matcher::RegexMatcher;
use crate::rules::{Category, Language, Rule, Severity};

/// CODATS-005..CODATS-008: SQL and shell command injection via string
/// concatenation or interpolation.
pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "CODATS-005",
            "SQL string concatenation",
            Category::SqlInjection,
            Severity::Critical,
            "A SQL query is built by string concatenation. Use parameterized queries.",
            Box::new(
                RegexMatcher::new(
                    r#"(?i)(?:query|execute|sql)\s*\(\s*['"][^'"\n]*['"]\s*\+|\bSELECT\s+.+\s+FROM\s+.+['"]\s*\+"#,
                )
                .unwrap(),
            ),
        )
        .with_remediation(
            r#"Use prepared statements: db.query("SELECT * FROM users WHERE id = ?", [user_id])"#,
        ),
        Rule::new(
            "CODATS-006",
            "SQL template interpolation",
            Category::SqlInjection,
            Severity::Critical,
            "A SQL query interpolates variables through a template literal.",
            Box::new(
                RegexMatcher::new(r#"(?i)(?:query|execute|sql)\s*\(\s*`[^`\n]*\$\{[^}]*\}"#)
                    .unwrap(),
            ),
        )
        .with_remediation(
            r#"Use prepared statements: db.query("SELECT * FROM users WHERE id = $1", [userId])"#,
        )
        .for_languages([Language::JavaScript, Language::TypeScript]),
        Rule::new(
            "CODATS-007",
            "Shell command with interpolated input",
            Category::CommandInjection,
            Severity::Critical,
            "A shell command is built from formatted or concatenated strings. Never splice \
             input into system commands.",
            Box::new(
                RegexMatcher::new(
                    r#"(?:os\.system|os\.popen|subprocess\.(?:call|run|Popen|check_call|check_output))\s*\(\s*(?:f['"]|['"][^'"\n]*['"]\s*\+)"#,
                )
                .unwrap(),
            ),
        )
        .with_remediation(
            r#"Use the subprocess module with list arguments: subprocess.run(["ls", "-la", dir], check=True)"#,
        )
        .for_languages([Language::Python]),
        Rule::new(
            "CODATS-008",
            "Child process with interpolated input",
            Category::CommandInjection,
            Severity::Critical,
            "A child process command interpolates or concatenates input.",
            Box::new(
                RegexMatcher::new(
                    r#"(?:execSync|exec|spawn)\s*\(\s*(?:`[^`\n]*\$\{|['"][^'"\n]*['"]\s*\+)"#,
                )
                .unwrap(),
            ),
        )
        .with_remediation(
            r#"Use execFile() with array arguments instead of shell execution: execFile("ls", ["-la", dir])"#,
        )
        .for_languages([Language::JavaScript, Language::TypeScript]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str) -> Rule {
        rules().into_iter().find(|r| r.id == id).unwrap()
    }

    #[test]
    fn flags_concatenated_select() {
        let r = rule("CODATS-005");
        let line = r#"query = "SELECT * FROM users WHERE id = " + str(user_id)"#;
        assert_eq!(r.matcher().find(line).len(), 1);
    }

    #[test]
    fn parameterized_query_passes() {
        let r = rule("CODATS-005");
        let line = r#"cursor.execute("SELECT * FROM users WHERE id = %s", (user_id,))"#;
        assert!(r.matcher().find(line).is_empty());
    }

    #[test]
    fn flags_os_system_fstring() {
        let r = rule("CODATS-007");
        let line = r#"os.system(f"ls -la {user_directory}")"#;
        assert_eq!(r.matcher().find(line).len(), 1);
    }

    #[test]
    fn literal_os_system_passes() {
        let r = rule("CODATS-007");
        assert!(r.matcher().find(r#"os.system("ls -la")"#).is_empty());
    }

    #[test]
    fn flags_template_literal_exec() {
        let r = rule("CODATS-008");
        let line = r#"execSync(`rm -rf ${target}`)"#;
        assert_eq!(r.matcher().find(line).len(), 1);
    }
}
