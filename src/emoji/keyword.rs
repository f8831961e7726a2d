//! Keyword-emoji annotation: `bump deps update` becomes `bump deps ⬆  update`.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::message::{is_editable_headline, split_headline, with_headline};

use super::tables::{KEYWORD_EMOJIS, keyword_emoji};

/// Whole-word alternation of every keyword. A word is bounded by whitespace,
/// `.`, `,` or the ends of the headline.
static KEYWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let words: Vec<String> = KEYWORD_EMOJIS
        .iter()
        .map(|(word, _)| regex_lite::escape(word))
        .collect();
    Regex::new(&format!(r"(?:^|[\s.,])({})(?:[\s.,]|$)", words.join("|"))).unwrap()
});

/// Insert the keyword emoji before the first keyword in the headline.
///
/// Only the first keyword occurrence is considered. If it already carries
/// its emoji the message is returned unchanged, which keeps the stage
/// idempotent.
pub fn annotate_keywords(message: &str) -> String {
    let (headline, _) = split_headline(message);
    if !is_editable_headline(headline) {
        return message.to_string();
    }

    let Some(word) = KEYWORD_PATTERN.captures(headline).and_then(|c| c.get(1)) else {
        return message.to_string();
    };
    let Some(emoji) = keyword_emoji(word.as_str()) else {
        return message.to_string();
    };

    let marker = format!("{emoji} ");
    if headline[..word.start()].ends_with(&marker) {
        return message.to_string();
    }

    debug!("Marking keyword '{}' with {}", word.as_str(), emoji.trim());
    let mut annotated = String::with_capacity(headline.len() + marker.len());
    annotated.push_str(&headline[..word.start()]);
    annotated.push_str(&marker);
    annotated.push_str(&headline[word.start()..]);
    with_headline(message, &annotated)
}
