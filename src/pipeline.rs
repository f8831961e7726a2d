//! Commit-message transformation pipeline.
//!
//! Stages run in a fixed order, each taking the previous stage's full output:
//! type emoji, auto-suggested emojis, keyword emojis, context report, ticket.
//! Merge commits pass through untouched.

use tracing::debug;

use crate::config::Config;
use crate::context::infer_context;
use crate::emoji::{
    EmojiCatalog, EmojiSuggester, ShortcodeSuggester, SuggestionAnnotator, UnicodeCatalog,
    annotate_commit_type, annotate_keywords,
};
use crate::message::is_merge_commit;
use crate::ticket::prepend_ticket;

/// One pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    TypeEmoji,
    AutoSuggest,
    KeywordEmoji,
    Context,
    Ticket,
}

impl Stage {
    /// All stages in application order.
    pub const ORDER: [Stage; 5] = [
        Stage::TypeEmoji,
        Stage::AutoSuggest,
        Stage::KeywordEmoji,
        Stage::Context,
        Stage::Ticket,
    ];

    fn is_emoji(self) -> bool {
        matches!(self, Stage::TypeEmoji | Stage::AutoSuggest | Stage::KeywordEmoji)
    }
}

/// Pipeline with its configuration and emoji lookups.
pub struct Pipeline<'a> {
    config: Config,
    suggester: &'a dyn EmojiSuggester,
    catalog: &'a dyn EmojiCatalog,
}

impl Pipeline<'static> {
    /// Pipeline using the built-in emoji lookups.
    pub fn new(config: Config) -> Self {
        Self::with_lookups(config, &ShortcodeSuggester, &UnicodeCatalog)
    }
}

impl<'a> Pipeline<'a> {
    /// Pipeline using the given emoji lookups.
    pub fn with_lookups(
        config: Config,
        suggester: &'a dyn EmojiSuggester,
        catalog: &'a dyn EmojiCatalog,
    ) -> Self {
        Self {
            config,
            suggester,
            catalog,
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Stages enabled by the configuration, in application order.
    pub fn stages(&self) -> Vec<Stage> {
        Stage::ORDER
            .into_iter()
            .filter(|stage| !(self.config.skip_emoji_annotation && stage.is_emoji()))
            .filter(|stage| !(*stage == Stage::AutoSuggest && !self.config.auto_suggest_enabled()))
            .collect()
    }

    /// Transform a commit message.
    pub fn transform(&self, message: &str) -> String {
        if is_merge_commit(message) {
            debug!("Merge commit detected, leaving message unchanged");
            return message.to_string();
        }

        self.stages()
            .into_iter()
            .fold(message.to_string(), |current, stage| {
                let next = self.apply(stage, &current);
                if next != current {
                    debug!("Stage {:?} changed the message", stage);
                }
                next
            })
    }

    fn apply(&self, stage: Stage, message: &str) -> String {
        match stage {
            Stage::TypeEmoji => annotate_commit_type(message),
            Stage::AutoSuggest => {
                SuggestionAnnotator::new(self.suggester, self.catalog).annotate(message)
            }
            Stage::KeywordEmoji => annotate_keywords(message),
            Stage::Context => infer_context(message),
            Stage::Ticket => prepend_ticket(message),
        }
    }
}

/// Transform a commit message with the built-in emoji lookups.
pub fn transform(message: &str, config: &Config) -> String {
    Pipeline::new(*config).transform(message)
}
