//! Textual scanning pipeline: registry → matcher spans → located findings.
//!
//! Stateless per invocation. Scanning never executes or interprets the
//! file's contents; that is the central safety invariant of the whole tool.

pub mod aggregate;

use std::path::Path;

use crate::error::Result;
use crate::rules::{Finding, Language, RuleRegistry};

pub use aggregate::ScanResult;

/// Precomputed line-start offsets, so match offsets resolve to (line,
/// column) without rescanning the text per match.
struct LineIndex<'a> {
    text: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(text: &'a str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, starts }
    }

    /// 1-based (line, column) of a byte offset.
    fn locate(&self, offset: usize) -> (usize, usize) {
        let line = match self.starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        (line + 1, offset - self.starts[line] + 1)
    }

    /// Text of a 1-based line, without the trailing newline.
    fn line_text(&self, line: usize) -> &'a str {
        let start = self.starts[line - 1];
        let end = self
            .starts
            .get(line)
            .map(|&next| next - 1)
            .unwrap_or(self.text.len());
        &self.text[start..end]
    }
}

/// Whether a line is a comment and its matches should be discarded.
fn is_comment(line: &str, language: Language) -> bool {
    let trimmed = line.trim_start();
    match language {
        Language::Python => trimmed.starts_with('#'),
        Language::JavaScript | Language::TypeScript | Language::Java => {
            trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
        }
        // Unrecognized files get both comment styles.
        Language::Unknown => {
            trimmed.starts_with('#')
                || trimmed.starts_with("//")
                || trimmed.starts_with("/*")
                || trimmed.starts_with('*')
        }
    }
}

const SNIPPET_MAX_CHARS: usize = 50;

/// Scan one file's text against every applicable rule in the registry.
///
/// Each match span is resolved to a 1-based (line, column); matches that
/// start on comment lines are dropped. Severity is stamped from the
/// registry at detection time, so later rule-set changes cannot alter the
/// result. Read-only; no side effects.
pub fn scan_source(registry: &RuleRegistry, file: &Path, contents: &str) -> Result<ScanResult> {
    let language = file
        .extension()
        .map(|e| Language::from_extension(&e.to_string_lossy()))
        .unwrap_or(Language::Unknown);

    let index = LineIndex::new(contents);
    let mut raw = Vec::new();

    for rule in registry.all() {
        if !rule.applies_to(language) {
            continue;
        }
        for span in rule.matcher().find(contents) {
            let (line, column) = index.locate(span.start);
            if is_comment(index.line_text(line), language) {
                continue;
            }
            let (_, end_column) = index.locate(span.end);
            let snippet: String = contents[span.start..span.end]
                .chars()
                .take(SNIPPET_MAX_CHARS)
                .collect();
            let severity = registry.classify(&rule.id)?;

            raw.push(Finding {
                rule_id: rule.id.clone(),
                category: rule.category,
                severity,
                file: file.to_path_buf(),
                line,
                column,
                end_column,
                snippet,
                message: rule.description.clone(),
                remediation: rule.remediation.clone(),
            });
        }
    }

    tracing::debug!(
        file = %file.display(),
        findings = raw.len(),
        "scanned file"
    );

    Ok(aggregate::aggregate(file, raw))
}
