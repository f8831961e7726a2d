//! Error types for git-commit-msg modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the commit-msg hook file wrapper.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to read commit message file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write commit message file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace commit message file {path}: {source}")]
    PersistFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the external emoji lookups used by auto-suggestion.
///
/// These never abort the pipeline; a failing lookup means "no suggestion".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Emoji suggestion lookup unavailable: {0}")]
    SuggestionUnavailable(String),

    #[error("Emoji metadata lookup unavailable: {0}")]
    MetadataUnavailable(String),
}
