use serde_json::{json, Value};

use crate::error::Result;
use crate::rules::{Finding, Severity};
use crate::scanner::ScanResult;

/// Render results as SARIF 2.1.0.
///
/// Produces a self-contained SARIF log compatible with GitHub Code Scanning
/// and other SARIF consumers.
pub fn render(results: &[ScanResult], target_name: &str) -> Result<String> {
    let findings: Vec<&Finding> = results.iter().flat_map(|r| &r.findings).collect();

    let rules: Vec<Value> = findings
        .iter()
        .map(|f| &f.rule_id)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .map(|rule_id| {
            let finding = findings.iter().find(|f| &f.rule_id == rule_id).unwrap();
            json!({
                "id": finding.rule_id,
                "shortDescription": { "text": finding.message },
                "defaultConfiguration": {
                    "level": severity_to_sarif_level(finding.severity),
                },
                "properties": {
                    "tags": [finding.category.to_string()],
                },
            })
        })
        .collect();

    let sarif_results: Vec<Value> = findings
        .iter()
        .map(|f| {
            let mut result = json!({
                "ruleId": f.rule_id,
                "level": severity_to_sarif_level(f.severity),
                "message": { "text": f.message },
                "locations": [{
                    "physicalLocation": {
                        "artifactLocation": {
                            "uri": f.file.display().to_string(),
                        },
                        "region": {
                            "startLine": f.line,
                            "startColumn": f.column,
                            "endColumn": f.end_column,
                            "snippet": { "text": f.snippet },
                        },
                    },
                }],
            });

            if let Some(remediation) = &f.remediation {
                result["fixes"] = json!([{
                    "description": { "text": remediation },
                }]);
            }

            result
        })
        .collect();

    let sarif = json!({
        "$schema": "https://docs.oasis-open.org/sarif/sarif/v2.1.0/errata01/os/schemas/sarif-schema-2.1.0.json",
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "CODATS",
                    "informationUri": "https://github.com/codats/codats",
                    "version": env!("CARGO_PKG_VERSION"),
                    "semanticVersion": env!("CARGO_PKG_VERSION"),
                    "rules": rules,
                },
            },
            "results": sarif_results,
            "automationDetails": {
                "id": format!("codats/{}", target_name),
            },
        }],
    });

    let output = serde_json::to_string_pretty(&sarif)?;
    Ok(output)
}

fn severity_to_sarif_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "error",
        Severity::Medium => "warning",
        Severity::Low => "note",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Category, Summary};
    use std::path::PathBuf;

    #[test]
    fn sarif_log_has_rules_and_results() {
        let results = vec![ScanResult {
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
                remediation: Some("Use ast.literal_eval().".into()),
            }],
            summary: Summary {
                critical: 1,
                ..Default::default()
            },
        }];

        let rendered = render(&results, "demo").unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["version"], "2.1.0");
        let run = &value["runs"][0];
        assert_eq!(run["tool"]["driver"]["rules"][0]["id"], "CODATS-001");
        let result = &run["results"][0];
        assert_eq!(result["level"], "error");
        assert_eq!(
            result["locations"][0]["physicalLocation"]["region"]["startLine"],
            9
        );
        assert_eq!(run["automationDetails"]["id"], "codats/demo");
    }
}
