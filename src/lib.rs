//! git-commit-msg - A commit-msg hook that annotates commit messages.
//!
//! # Overview
//!
//! The hook rewrites the commit-message file Git hands it: the headline gets
//! emojis for its conventional commit type and notable verbs, the comment
//! block gets a report of contexts inferred from the staged files, and the
//! ticket id from the branch name is prepended to the headline.
//!
//! ```
//! use git_commit_msg::{Config, transform};
//!
//! let config = Config { skip_emoji_annotation: false, skip_auto_suggest: true };
//! assert_eq!(transform("feat: my msg", &config), "⭐ feat: my msg");
//! ```

pub mod config;
pub mod context;
pub mod emoji;
pub mod error;
pub mod hook;
pub mod message;
pub mod pipeline;
pub mod ticket;

// Re-export commonly used types
pub use config::{Config, ConfigOverrides};
pub use emoji::{EmojiCatalog, EmojiCategory, EmojiSuggester};
pub use error::{HookError, LookupError};
pub use hook::{HookOutcome, run_hook};
pub use pipeline::{Pipeline, Stage, transform};
pub use ticket::Ticket;
