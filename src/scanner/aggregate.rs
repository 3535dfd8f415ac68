use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::rules::{Finding, Summary};

/// The complete set of findings for one scanned file, plus summary counts.
/// Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub file: PathBuf,
    pub findings: Vec<Finding>,
    pub summary: Summary,
}

/// Collapse raw matches into an ordered, deduplicated `ScanResult`.
///
/// Duplicate matches sharing (rule id, line, column) collapse to one
/// finding. Findings are ordered ascending by (line, column), with rule id
/// as a deterministic tiebreaker.
pub fn aggregate(file: &Path, raw_matches: Vec<Finding>) -> ScanResult {
    let mut findings = raw_matches;
    findings.sort_by(|a, b| {
        (a.line, a.column, a.rule_id.as_str()).cmp(&(b.line, b.column, b.rule_id.as_str()))
    });
    findings.dedup_by(|a, b| a.rule_id == b.rule_id && a.line == b.line && a.column == b.column);

    let mut summary = Summary::default();
    for finding in &findings {
        summary.count(finding.severity);
    }

    ScanResult {
        file: file.to_path_buf(),
        findings,
        summary,
    }
}
