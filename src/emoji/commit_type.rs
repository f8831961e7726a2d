//! Type-emoji annotation: `feat: msg` becomes `⭐ feat: msg`.

use tracing::debug;

use crate::message::{is_editable_headline, split_headline, with_headline};
use crate::ticket::ticket_prefix_len;

use super::tables::TYPE_EMOJIS;

/// State of the headline with respect to its commit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeMark {
    /// Headline starts with `<type>(` or `<type>:` and no emoji.
    Bare { offset: usize, emoji: &'static str },
    /// Headline already starts with `<emoji> <type>`.
    Annotated,
    None,
}

/// Prefix the headline's commit type with its emoji.
///
/// The type must open the headline, optionally after a `TICKET-1: ` prefix,
/// and be followed by `(` or `:`. Already annotated headlines are returned
/// unchanged.
pub fn annotate_commit_type(message: &str) -> String {
    let (headline, _) = split_headline(message);
    if !is_editable_headline(headline) {
        return message.to_string();
    }

    match classify(headline) {
        TypeMark::Bare { offset, emoji } => {
            debug!("Annotating commit type with {}", emoji);
            let mut annotated = String::with_capacity(headline.len() + emoji.len() + 1);
            annotated.push_str(&headline[..offset]);
            annotated.push_str(emoji);
            annotated.push(' ');
            annotated.push_str(&headline[offset..]);
            with_headline(message, &annotated)
        }
        TypeMark::Annotated | TypeMark::None => message.to_string(),
    }
}

fn classify(headline: &str) -> TypeMark {
    let offset = ticket_prefix_len(headline);
    let rest = &headline[offset..];

    for &(commit_type, emoji) in TYPE_EMOJIS {
        if let Some(after_emoji) = rest
            .strip_prefix(emoji)
            .and_then(|r| r.strip_prefix(' '))
        {
            if opens_type(after_emoji, commit_type) {
                return TypeMark::Annotated;
            }
        }
    }

    TYPE_EMOJIS
        .iter()
        .find(|(commit_type, _)| opens_type(rest, commit_type))
        .map_or(TypeMark::None, |&(_, emoji)| TypeMark::Bare { offset, emoji })
}

/// `text` starts with `commit_type` immediately followed by `(` or `:`.
fn opens_type(text: &str, commit_type: &str) -> bool {
    text.strip_prefix(commit_type)
        .is_some_and(|r| r.starts_with('(') || r.starts_with(':'))
}
