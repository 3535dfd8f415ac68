use serde::Serialize;

use crate::error::Result;
use crate::loader::SkippedFile;
use crate::rules::policy::PolicyVerdict;
use crate::scanner::ScanResult;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    results: &'a [ScanResult],
    skipped: &'a [SkippedFile],
    verdict: &'a PolicyVerdict,
}

/// Render results as a JSON report.
pub fn render(
    results: &[ScanResult],
    skipped: &[SkippedFile],
    verdict: &PolicyVerdict,
) -> Result<String> {
    let report = JsonReport {
        generated_at: chrono::Utc::now(),
        results,
        skipped,
        verdict,
    };
    let json = serde_json::to_string_pretty(&report)?;
    Ok(json)
}
