//! Lexical helpers over the raw commit-message text.
//!
//! A message has a headline (everything before the first `\n`) and a tail
//! (the first `\n` and everything after it, including Git's comment block).

/// Signature Git puts in the subject of merge commits.
pub const MERGE_SIGNATURE: &str = "Merge branch";

/// Split a message into `(headline, tail)`.
///
/// The tail keeps its leading `\n` so `headline + tail == message` always holds.
pub fn split_headline(message: &str) -> (&str, &str) {
    match message.find('\n') {
        Some(pos) => message.split_at(pos),
        None => (message, ""),
    }
}

/// Replace the headline, keeping the tail byte-for-byte.
pub fn with_headline(message: &str, headline: &str) -> String {
    let (_, tail) = split_headline(message);
    let mut out = String::with_capacity(headline.len() + tail.len());
    out.push_str(headline);
    out.push_str(tail);
    out
}

/// Whether the message is a merge commit and must pass through untouched.
pub fn is_merge_commit(message: &str) -> bool {
    message.contains(MERGE_SIGNATURE)
}

/// Whether a line is a Git comment line.
pub fn is_comment_line(line: &str) -> bool {
    line.starts_with('#')
}

/// Whether the headline carries user text the headline morphs may touch.
///
/// Blank headlines and headlines that are themselves comments are left alone
/// so Git still aborts on an empty message.
pub fn is_editable_headline(headline: &str) -> bool {
    !headline.trim().is_empty() && !is_comment_line(headline)
}

/// Byte offset of the first comment line, if any.
pub fn first_comment_line_offset(message: &str) -> Option<usize> {
    let mut offset = 0;
    for line in message.split_inclusive('\n') {
        if is_comment_line(line) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}
