//! Error type shared by every fallible operation in the crate.

use std::path::PathBuf;

/// Errors produced while loading input documents, editing a form session,
/// or talking to a clipboard backend.
///
/// Malformed markup is never an error: unmatched `**` or broken link
/// brackets pass through as literal text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing an input document failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A YAML input document could not be parsed or serialized.
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON input document could not be parsed or serialized.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// An edit addressed an FAQ entry that does not exist.
    #[error("FAQ {index} does not exist (list has {len} entries)")]
    FaqIndex { index: usize, len: usize },

    /// The clipboard backend rejected the write.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// The copied acknowledgement reset needs a Tokio runtime to schedule on.
    #[error("no Tokio runtime available to schedule the acknowledgement reset")]
    NoRuntime,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
