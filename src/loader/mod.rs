//! File access for the scanning core: bounded reads, UTF-8 validation,
//! gitignore-aware directory walking.
//!
//! Per-file failures never abort a run; they are reported as skipped files
//! and the walk continues.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::error::{Result, ScanError};
use crate::rules::Language;

/// Default per-file size cap: 1 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 1_048_576;

/// Default wall-clock budget for reading a single file.
pub const DEFAULT_READ_DEADLINE: Duration = Duration::from_secs(5);

const READ_CHUNK_BYTES: usize = 64 * 1024;
const MAX_WALK_DEPTH: usize = 5;

/// A source file read into memory, ready to scan.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub language: Language,
    pub contents: String,
    pub size_bytes: u64,
    pub content_hash: String,
}

/// A file the run skipped, with the diagnostic explaining why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Reads files under a size cap and a read deadline, failing with
/// `FileTooLarge` / `ReadTimeout` / `UnreadableFile` rather than hanging.
#[derive(Debug, Clone)]
pub struct SourceLoader {
    max_bytes: u64,
    deadline: Duration,
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            deadline: DEFAULT_READ_DEADLINE,
        }
    }
}

impl SourceLoader {
    pub fn new(max_bytes: u64, deadline: Duration) -> Self {
        Self {
            max_bytes,
            deadline,
        }
    }

    /// Read one file. Size is checked both up front (metadata) and while
    /// reading, so growing files cannot slip past the cap.
    pub fn load(&self, path: &Path) -> Result<LoadedFile> {
        let metadata = std::fs::metadata(path)?;
        if metadata.len() > self.max_bytes {
            return Err(ScanError::FileTooLarge {
                file: path.to_path_buf(),
                size: metadata.len(),
                limit: self.max_bytes,
            });
        }

        let mut file = std::fs::File::open(path)?;
        let started = Instant::now();
        let mut buf = Vec::with_capacity(metadata.len() as usize);
        let mut chunk = [0u8; READ_CHUNK_BYTES];
        loop {
            if started.elapsed() > self.deadline {
                return Err(ScanError::ReadTimeout {
                    file: path.to_path_buf(),
                });
            }
            let n = file.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if buf.len() as u64 > self.max_bytes {
                return Err(ScanError::FileTooLarge {
                    file: path.to_path_buf(),
                    size: buf.len() as u64,
                    limit: self.max_bytes,
                });
            }
        }

        let size_bytes = buf.len() as u64;
        let contents = String::from_utf8(buf).map_err(|e| ScanError::UnreadableFile {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let content_hash = hex::encode(sha2::Sha256::digest(contents.as_bytes()));
        let language = language_of(path);

        Ok(LoadedFile {
            path: path.to_path_buf(),
            language,
            contents,
            size_bytes,
            content_hash,
        })
    }

    /// Collect scannable files under `root`. A single-file root is loaded
    /// as-is regardless of extension; directory walks are gitignore-aware,
    /// depth-capped, and keep only recognized source extensions.
    pub fn collect(&self, root: &Path) -> Result<(Vec<LoadedFile>, Vec<SkippedFile>)> {
        let mut loaded = Vec::new();
        let mut skipped = Vec::new();

        if root.is_file() {
            match self.load(root) {
                Ok(file) => loaded.push(file),
                Err(e) if e.is_per_file() => skip(&mut skipped, root, e),
                Err(e) => return Err(e),
            }
            return Ok((loaded, skipped));
        }

        let walker = ignore::WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .max_depth(Some(MAX_WALK_DEPTH))
            .build();

        for entry in walker.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if language_of(path) == Language::Unknown {
                continue;
            }
            match self.load(path) {
                Ok(file) => loaded.push(file),
                Err(e) if e.is_per_file() => skip(&mut skipped, path, e),
                Err(e) => return Err(e),
            }
        }

        // Walk order is filesystem-dependent; fix it for reproducible runs.
        loaded.sort_by(|a, b| a.path.cmp(&b.path));

        Ok((loaded, skipped))
    }
}

fn language_of(path: &Path) -> Language {
    path.extension()
        .map(|e| Language::from_extension(&e.to_string_lossy()))
        .unwrap_or(Language::Unknown)
}

fn skip(skipped: &mut Vec<SkippedFile>, path: &Path, error: ScanError) {
    tracing::warn!(file = %path.display(), error = %error, "skipping file");
    skipped.push(SkippedFile {
        path: path.to_path_buf(),
        reason: error.to_string(),
    });
}
