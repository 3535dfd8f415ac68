pub mod console;
pub mod json;
pub mod sarif;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loader::SkippedFile;
use crate::rules::policy::PolicyVerdict;
use crate::scanner::ScanResult;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Sarif,
}

impl OutputFormat {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "console" | "text" => Some(Self::Console),
            "json" => Some(Self::Json),
            "sarif" => Some(Self::Sarif),
            _ => None,
        }
    }
}

/// Render per-file scan results into the specified format.
pub fn render(
    results: &[ScanResult],
    skipped: &[SkippedFile],
    verdict: &PolicyVerdict,
    format: OutputFormat,
    target_name: &str,
) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render(results, skipped, verdict)),
        OutputFormat::Json => json::render(results, skipped, verdict),
        OutputFormat::Sarif => sarif::render(results, target_name),
    }
}
