use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Duplicate rule id: {rule_id}")]
    DuplicateRule { rule_id: String },

    #[error("Unknown rule id: {rule_id}")]
    UnknownRule { rule_id: String },

    #[error("Unreadable file {file}: {message}")]
    UnreadableFile { file: PathBuf, message: String },

    #[error("File too large: {file} ({size} bytes, limit {limit})")]
    FileTooLarge {
        file: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("Read timed out: {file}")]
    ReadTimeout { file: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ScanError {
    pub fn exit_code(&self) -> i32 {
        2
    }

    /// Whether this error should skip the file and let the run continue.
    ///
    /// Registry integrity errors (`DuplicateRule`, `UnknownRule`) are never
    /// recoverable mid-scan.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::UnreadableFile { .. } | Self::FileTooLarge { .. } | Self::ReadTimeout { .. }
        )
    }
}
