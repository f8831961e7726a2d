//! Emoji annotation stages for the headline.

pub mod catalog;
pub mod commit_type;
pub mod keyword;
pub mod suggest;
pub mod tables;

pub use catalog::{ShortcodeSuggester, UnicodeCatalog};
pub use commit_type::annotate_commit_type;
pub use keyword::annotate_keywords;
pub use suggest::{
    ALLOWED_CATEGORIES, EmojiCatalog, EmojiCategory, EmojiSuggester, NoSuggestions,
    SuggestionAnnotator,
};
pub use tables::{KEYWORD_EMOJIS, TYPE_EMOJIS};
