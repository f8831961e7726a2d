//! Staged-changes block extraction.
//!
//! Works on the block Git writes into the message template when committing:
//! ```text
//! # Changes to be committed:
//! #	modified:   src/foo.rs
//! #	renamed:    old.rs -> new.rs
//! #
//! ```

use std::sync::LazyLock;

use regex_lite::Regex;

/// Line that opens the staged-changes block.
pub const STAGED_MARKER: &str = "# Changes to be committed:";

/// Line that closes a block.
const BLOCK_TERMINATOR: &str = "#";

/// Prefix of a file line inside the block.
const FILE_LINE_PREFIX: &str = "#\t";

/// `#<tab><change type>:<spaces><path>`
static FILE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\t\s*[A-Za-z][A-Za-z ]*:\s+(.+)$").unwrap());

/// Whether the message carries a staged-changes block.
pub fn has_staged_block(message: &str) -> bool {
    message.lines().any(|line| line.trim_end() == STAGED_MARKER)
}

/// Lines between the marker and the next terminator, exclusive.
pub fn staged_block(message: &str) -> Vec<&str> {
    message
        .lines()
        .skip_while(|line| line.trim_end() != STAGED_MARKER)
        .skip(1)
        .take_while(|line| line.trim_end() != BLOCK_TERMINATOR)
        .collect()
}

/// File paths listed in the staged-changes block, in listing order.
///
/// Renames contribute their new path. Lines of any other shape are ignored.
pub fn staged_paths(message: &str) -> Vec<String> {
    staged_block(message)
        .into_iter()
        .filter(|line| line.starts_with(FILE_LINE_PREFIX))
        .filter_map(|line| FILE_LINE.captures(line.trim_end()))
        .filter_map(|caps| caps.get(1).map(|m| clean_path(m.as_str())))
        .filter(|path| !path.is_empty())
        .collect()
}

fn clean_path(raw: &str) -> String {
    let path = raw.rsplit(" -> ").next().unwrap_or(raw).trim();
    path.strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path)
        .to_string()
}
