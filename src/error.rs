use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillmapError {
    #[error("invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid {key} timestamp {value:?} (expected RFC 3339 or YYYY-MM-DD[THH:MM:SS])")]
    InvalidTimestamp { key: &'static str, value: String },

    #[error("invalid regex rule {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("path '{}' is not inside a git repository", .0.display())]
    NotARepository(PathBuf),

    #[error("history traversal failed: {0}")]
    Traversal(#[from] git2::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read scan file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Usage(String),
}

impl SkillmapError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillmapError>;
