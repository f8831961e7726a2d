//! Default emoji lookups backed by the `emojis` crate.

use emojis::{Group, SubGroup};

use crate::error::LookupError;

use super::suggest::{EmojiCatalog, EmojiCategory, EmojiSuggester};

/// Shorter words (`a`, `on`, `up`, `ok`, `x`) are never looked up.
pub const MIN_SUGGESTED_WORD_LEN: usize = 3;

/// Letter and keycap emojis spell words rather than illustrate them
/// (`new` is 🆕, `top` is 🔝).
const EXCLUDED_SUBGROUPS: &[SubGroup] = &[SubGroup::Alphanum, SubGroup::Keycap];

/// Suggests the emoji whose GitHub shortcode equals the lower-cased word,
/// so `bug` suggests 🐛 and `rocket` suggests 🚀.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortcodeSuggester;

impl EmojiSuggester for ShortcodeSuggester {
    fn suggest(&self, word: &str) -> Result<Vec<String>, LookupError> {
        if word.chars().count() < MIN_SUGGESTED_WORD_LEN {
            return Ok(Vec::new());
        }

        Ok(emojis::get_by_shortcode(&word.to_lowercase())
            .filter(|emoji| !EXCLUDED_SUBGROUPS.contains(&emoji.subgroup()))
            .map(|emoji| vec![emoji.as_str().to_string()])
            .unwrap_or_default())
    }
}

/// Categories from the Unicode emoji groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeCatalog;

impl EmojiCatalog for UnicodeCatalog {
    fn category_of(&self, emoji: &str) -> Result<Option<EmojiCategory>, LookupError> {
        Ok(emojis::get(emoji).and_then(|e| category_from_group(e.group())))
    }
}

/// Category for a Unicode group. Groups without a category are unknown.
#[allow(unreachable_patterns)]
fn category_from_group(group: Group) -> Option<EmojiCategory> {
    match group {
        Group::SmileysAndEmotion => Some(EmojiCategory::SmileysAndEmotion),
        Group::PeopleAndBody => Some(EmojiCategory::People),
        Group::AnimalsAndNature => Some(EmojiCategory::AnimalsAndNature),
        Group::FoodAndDrink => Some(EmojiCategory::FoodAndDrink),
        Group::TravelAndPlaces => Some(EmojiCategory::TravelAndPlaces),
        Group::Activities => Some(EmojiCategory::Activities),
        Group::Objects => Some(EmojiCategory::Objects),
        Group::Symbols => Some(EmojiCategory::Symbols),
        Group::Flags => Some(EmojiCategory::Flags),
        _ => None,
    }
}
