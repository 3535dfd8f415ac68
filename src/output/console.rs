use crate::loader::SkippedFile;
use crate::rules::policy::PolicyVerdict;
use crate::rules::Severity;
use crate::scanner::ScanResult;

/// Render results as plaintext console output: per-file finding listings
/// (already ordered by line, column) plus a verdict line.
pub fn render(results: &[ScanResult], skipped: &[SkippedFile], verdict: &PolicyVerdict) -> String {
    let mut output = String::new();

    let total: usize = results.iter().map(|r| r.findings.len()).sum();
    if total == 0 {
        output.push_str("\n  No security findings detected.\n");
    } else {
        output.push_str(&format!("\n  {} finding(s) detected:\n\n", total));

        for result in results {
            if result.findings.is_empty() {
                continue;
            }
            output.push_str(&format!("  {}\n", result.file.display()));
            for finding in &result.findings {
                let severity_tag = match finding.severity {
                    Severity::Critical => "[CRITICAL]",
                    Severity::High => "[HIGH]    ",
                    Severity::Medium => "[MEDIUM]  ",
                    Severity::Low => "[LOW]     ",
                };
                output.push_str(&format!(
                    "    {} {} {}:{} {}\n",
                    severity_tag, finding.rule_id, finding.line, finding.column, finding.message
                ));
                if let Some(remediation) = &finding.remediation {
                    output.push_str(&format!("               fix: {}\n", remediation));
                }
            }
            output.push('\n');
        }
    }

    if !skipped.is_empty() {
        output.push_str(&format!("\n  {} file(s) skipped:\n", skipped.len()));
        for skip in skipped {
            output.push_str(&format!("    {} ({})\n", skip.path.display(), skip.reason));
        }
    }

    let status = if verdict.pass { "PASS" } else { "FAIL" };
    output.push_str(&format!(
        "\n  Result: {} (threshold: {}, highest: {})\n\n",
        status,
        verdict.fail_threshold,
        verdict
            .highest_severity
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".into()),
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Category, Finding, Summary};
    use std::path::PathBuf;

    fn sample_result() -> ScanResult {
        ScanResult {
            file: PathBuf::from("app.py"),
            findings: vec![Finding {
                rule_id: "CODATS-001".into(),
                category: Category::CodeExecution,
                severity: Severity::Critical,
                file: PathBuf::from("app.py"),
                line: 9,
                column: 10,
                end_column: 15,
                snippet: "eval(".into(),
                message: "eval() executes arbitrary code.".into(),
                remediation: None,
            }],
            summary: Summary {
                critical: 1,
                ..Default::default()
            },
        }
    }

    fn verdict(pass: bool) -> PolicyVerdict {
        PolicyVerdict {
            pass,
            total_findings: 1,
            effective_findings: 1,
            highest_severity: Some(Severity::Critical),
            fail_threshold: Severity::High,
        }
    }

    #[test]
    fn lists_findings_with_location() {
        let out = render(&[sample_result()], &[], &verdict(false));
        assert!(out.contains("CODATS-001"));
        assert!(out.contains("9:10"));
        assert!(out.contains("Result: FAIL"));
    }

    #[test]
    fn clean_scan_reports_no_findings() {
        let out = render(&[], &[], &verdict(true));
        assert!(out.contains("No security findings detected"));
        assert!(out.contains("Result: PASS"));
    }

    #[test]
    fn skipped_files_are_listed() {
        let skipped = vec![SkippedFile {
            path: PathBuf::from("bin.dat"),
            reason: "Unreadable file".into(),
        }];
        let out = render(&[], &skipped, &verdict(true));
        assert!(out.contains("bin.dat"));
        assert!(out.contains("1 file(s) skipped"));
    }
}
