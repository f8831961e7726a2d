//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use git_commit_msg::emoji::UnicodeCatalog;
use git_commit_msg::{Config, EmojiCatalog, EmojiCategory, EmojiSuggester, LookupError, Pipeline};

/// Suggests a fixed emoji for one exact word.
pub struct WordSuggester {
    pub word: &'static str,
    pub emoji: &'static str,
}

impl EmojiSuggester for WordSuggester {
    fn suggest(&self, word: &str) -> Result<Vec<String>, LookupError> {
        if word == self.word {
            Ok(vec![self.emoji.to_string()])
        } else {
            Ok(Vec::new())
        }
    }
}

/// Puts every emoji in one category.
pub struct FixedCatalog(pub EmojiCategory);

impl EmojiCatalog for FixedCatalog {
    fn category_of(&self, _emoji: &str) -> Result<Option<EmojiCategory>, LookupError> {
        Ok(Some(self.0))
    }
}

/// Lookup that is always down.
pub struct Offline;

impl EmojiSuggester for Offline {
    fn suggest(&self, _word: &str) -> Result<Vec<String>, LookupError> {
        Err(LookupError::SuggestionUnavailable("offline".to_string()))
    }
}

pub const WAVE: &str = "👋";
pub static FOO_SUGGESTER: WordSuggester = WordSuggester {
    word: "FOO",
    emoji: WAVE,
};
pub static PEOPLE: FixedCatalog = FixedCatalog(EmojiCategory::People);

/// Default pipeline with auto-suggestion for the word `FOO` only.
pub fn foo_pipeline() -> Pipeline<'static> {
    Pipeline::with_lookups(Config::default(), &FOO_SUGGESTER, &PEOPLE)
}

/// Pipeline with the given config that never suggests.
pub fn pipeline_without_suggestions(config: Config) -> Pipeline<'static> {
    Pipeline::with_lookups(config, &git_commit_msg::emoji::NoSuggestions, &UnicodeCatalog)
}

/// Git's verbose commit template around `headline`.
pub fn git_template(headline: &str, branch: &str, staged: &[(&str, &str)]) -> String {
    let mut lines = vec![
        headline.to_string(),
        "# Please enter the commit message for your changes. Lines starting".to_string(),
        "# with '#' will be ignored, and an empty message aborts the commit.".to_string(),
        "#".to_string(),
        format!("# On branch {branch}"),
        format!("# Your branch is up to date with 'origin/{branch}'."),
        "#".to_string(),
        "# Changes to be committed:".to_string(),
    ];
    for (change, path) in staged {
        lines.push(format!("#\t{change}:   {path}"));
    }
    lines.extend(
        [
            "#",
            "# Changes not staged for commit:",
            "#\tdeleted:    deleted-not-staged.txt",
            "#\tmodified:   modified-not-staged.txt",
            "#",
            "# Untracked files:",
            "#\tuntracked.txt",
            "#",
        ]
        .map(String::from),
    );
    lines.join("\n")
}

/// The three staged files most tests use.
pub const THREE_FILES: &[(&str, &str)] = &[
    ("modified", "modified-file.txt"),
    ("deleted", "deleted-file.txt"),
    ("new file", "new-file.txt"),
];

/// First line of a message.
pub fn headline(message: &str) -> &str {
    message.split('\n').next().unwrap_or("")
}

/// The inserted context report, without the cheat-sheet line.
pub fn context_report(message: &str) -> String {
    message
        .lines()
        .skip_while(|line| !line.starts_with("# Found "))
        .take_while(|line| line.starts_with("# Found ") || line.starts_with("#     * "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Message with the inserted report and cheat-sheet lines removed.
pub fn without_report(message: &str) -> String {
    message
        .split('\n')
        .filter(|line| {
            !line.starts_with("# Found ")
                && !line.starts_with("#     * ")
                && !line.starts_with("# TYPES: ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
