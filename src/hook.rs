//! Commit-msg hook file handling.
//!
//! Git passes the path of the message file; the transformed text is written
//! back only when it differs, through a temp file in the same directory.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::HookError;
use crate::pipeline::Pipeline;

/// Result of running the hook on one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    Rewritten,
    Unchanged,
}

/// Transform the commit-message file at `path` in place.
pub fn run_hook(path: &Path, pipeline: &Pipeline<'_>) -> Result<HookOutcome, HookError> {
    let original = std::fs::read_to_string(path).map_err(|source| HookError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let transformed = pipeline.transform(&original);
    if transformed == original {
        debug!("Commit message unchanged");
        return Ok(HookOutcome::Unchanged);
    }

    write_atomically(path, &transformed)?;
    debug!("Rewrote commit message at {}", path.display());
    Ok(HookOutcome::Rewritten)
}

fn write_atomically(path: &Path, content: &str) -> Result<(), HookError> {
    let write_failed = |source| HookError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    tmp.write_all(content.as_bytes()).map_err(write_failed)?;
    tmp.flush().map_err(write_failed)?;
    tmp.persist(path).map_err(|e| HookError::PersistFailed {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::emoji::{NoSuggestions, UnicodeCatalog};

    fn pipeline() -> Pipeline<'static> {
        Pipeline::with_lookups(Config::default(), &NoSuggestions, &UnicodeCatalog)
    }

    #[test]
    fn test_rewrites_changed_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "feat: my msg").unwrap();

        assert_eq!(run_hook(&path, &pipeline()).unwrap(), HookOutcome::Rewritten);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "⭐ feat: my msg");
    }

    #[test]
    fn test_leaves_unchanged_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "plain message").unwrap();

        assert_eq!(run_hook(&path, &pipeline()).unwrap(), HookOutcome::Unchanged);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "plain message");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_hook(&dir.path().join("missing"), &pipeline()).unwrap_err();
        assert!(matches!(err, HookError::ReadFailed { .. }));
    }
}
