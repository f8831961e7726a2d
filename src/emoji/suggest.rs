//! Auto-suggested emojis for free-text words in the headline.
//!
//! The suggestion and metadata lookups are injected so the annotation logic
//! does not depend on any particular emoji dataset.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::message::{is_editable_headline, split_headline, with_headline};

use super::tables::{TYPE_EMOJIS, is_keyword};

/// Emoji categories, after the Unicode emoji groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmojiCategory {
    SmileysAndEmotion,
    People,
    AnimalsAndNature,
    FoodAndDrink,
    TravelAndPlaces,
    Activities,
    Objects,
    Symbols,
    Flags,
}

/// Categories whose emojis may be auto-suggested.
pub const ALLOWED_CATEGORIES: &[EmojiCategory] = &[
    EmojiCategory::People,
    EmojiCategory::AnimalsAndNature,
    EmojiCategory::Objects,
    EmojiCategory::Symbols,
];

/// Suggests candidate emojis for a word.
#[cfg_attr(test, mockall::automock)]
pub trait EmojiSuggester {
    /// Candidate emojis for `word`, best first. Empty when nothing fits.
    fn suggest(&self, word: &str) -> Result<Vec<String>, LookupError>;
}

/// Looks up emoji metadata.
#[cfg_attr(test, mockall::automock)]
pub trait EmojiCatalog {
    /// Category of `emoji`, or `None` when it is unknown.
    fn category_of(&self, emoji: &str) -> Result<Option<EmojiCategory>, LookupError>;
}

/// Suggester that never suggests anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSuggestions;

impl EmojiSuggester for NoSuggestions {
    fn suggest(&self, _word: &str) -> Result<Vec<String>, LookupError> {
        Ok(Vec::new())
    }
}

/// `TICKET-1: ` and `<emoji> type(context): ` prefixes, which are not free text.
static HEADLINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let emojis: Vec<String> = TYPE_EMOJIS
        .iter()
        .map(|(_, emoji)| regex_lite::escape(emoji))
        .collect();
    Regex::new(&format!(
        r"^(?:[A-Za-z]+-[0-9]+: )?(?:(?:(?:{}) )?\w+(?:\([^)]*\))?: )?",
        emojis.join("|")
    ))
    .unwrap()
});

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Annotates free-text words using injected lookups.
pub struct SuggestionAnnotator<'a> {
    suggester: &'a dyn EmojiSuggester,
    catalog: &'a dyn EmojiCatalog,
}

impl<'a> SuggestionAnnotator<'a> {
    pub fn new(suggester: &'a dyn EmojiSuggester, catalog: &'a dyn EmojiCatalog) -> Self {
        Self { suggester, catalog }
    }

    /// Insert a suggested emoji before each free-text word that has one.
    ///
    /// Hardcoded keywords are never looked up. Words already preceded by the
    /// suggested emoji and a space are left alone.
    pub fn annotate(&self, message: &str) -> String {
        let (headline, _) = split_headline(message);
        if !is_editable_headline(headline) {
            return message.to_string();
        }

        let prefix_len = HEADLINE_PREFIX.find(headline).map_or(0, |m| m.end());
        let free_text = &headline[prefix_len..];

        let mut annotated = String::with_capacity(headline.len());
        annotated.push_str(&headline[..prefix_len]);
        let mut last = 0;
        let mut changed = false;

        for word in WORD.find_iter(free_text) {
            if is_keyword(word.as_str()) {
                continue;
            }
            let Some(emoji) = self.pick(word.as_str()) else {
                continue;
            };
            let marker = format!("{emoji} ");
            if free_text[..word.start()].ends_with(&marker) {
                continue;
            }

            debug!("Suggested {} for '{}'", emoji, word.as_str());
            annotated.push_str(&free_text[last..word.start()]);
            annotated.push_str(&marker);
            last = word.start();
            changed = true;
        }

        if !changed {
            return message.to_string();
        }
        annotated.push_str(&free_text[last..]);
        with_headline(message, &annotated)
    }

    /// First candidate in an allowed category. Lookup failures mean no emoji.
    fn pick(&self, word: &str) -> Option<String> {
        let candidates = match self.suggester.suggest(word) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("{}; leaving '{}' unannotated", e, word);
                return None;
            }
        };

        candidates.into_iter().find(|emoji| {
            match self.catalog.category_of(emoji) {
                Ok(Some(category)) => ALLOWED_CATEGORIES.contains(&category),
                Ok(None) => false,
                Err(e) => {
                    debug!("{}; skipping candidate {}", e, emoji);
                    false
                }
            }
        })
    }
}
