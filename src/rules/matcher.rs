use once_cell::sync::Lazy;
use regex::Regex;

/// Byte-offset range of a match within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A declarative match capability. Rules hold one of these; the scanner only
/// ever calls `find`, so new matcher kinds slot in without touching scanner
/// control flow.
///
/// Matchers never execute or interpret the text they are given.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// All non-overlapping matches in `text`, as byte spans.
    fn find(&self, text: &str) -> Vec<Span>;
}

/// Plain substring match (e.g. `eval(`).
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    needle: String,
}

impl SubstringMatcher {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }
}

impl Matcher for SubstringMatcher {
    fn find(&self, text: &str) -> Vec<Span> {
        text.match_indices(&self.needle)
            .map(|(start, m)| Span {
                start,
                end: start + m.len(),
            })
            .collect()
    }
}

/// Regular-expression match.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Matcher for RegexMatcher {
    fn find(&self, text: &str) -> Vec<Span> {
        self.regex
            .find_iter(text)
            .map(|m| Span {
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }
}

// Identifier assigned a quoted literal: `NAME = "..."`, `name: '...'`, or a
// quoted key as in `"password": "hunter2"`.
static ASSIGNMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)['"]?([A-Za-z_][A-Za-z0-9_]*)['"]?\s*[:=]\s*('[^']+'|"[^"]+")"#).unwrap()
});

/// Structural heuristic: a non-empty string literal assigned to a variable
/// whose name looks like a credential (`API_KEY = "sk-..."`).
#[derive(Debug, Clone)]
pub struct CredentialAssignmentMatcher {
    keywords: Vec<String>,
}

impl CredentialAssignmentMatcher {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(|k| k.into().to_lowercase()).collect(),
        }
    }

    fn name_is_sensitive(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.keywords.iter().any(|k| name.contains(k.as_str()))
    }
}

impl Matcher for CredentialAssignmentMatcher {
    fn find(&self, text: &str) -> Vec<Span> {
        ASSIGNMENT_RE
            .captures_iter(text)
            .filter(|cap| self.name_is_sensitive(&cap[1]))
            .map(|cap| {
                let m = cap.get(0).unwrap();
                Span {
                    start: m.start(),
                    end: m.end(),
                }
            })
            .collect()
    }
}
