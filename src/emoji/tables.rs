//! Fixed emoji tables.

/// Conventional commit types and their emojis, in cheat-sheet order.
pub const TYPE_EMOJIS: &[(&str, &str)] = &[
    ("chore", "😒"),
    ("docs", "📝"),
    ("feat", "⭐"),
    ("fix", "🛠"),
    ("refactor", "♻"),
    ("style", "💄"),
    ("test", "🔍"),
    ("type", "🏷"),
    ("perf", "⚡"),
    ("ci", "🤖"),
];

/// Notable verbs marked with an emoji.
///
/// Some glyphs carry a leading or trailing space; it is part of the glyph and
/// is emitted verbatim.
pub const KEYWORD_EMOJIS: &[(&str, &str)] = &[
    ("update", "⬆ "),
    ("add", "➕"),
    ("remove", "➖"),
    ("change", "🔁"),
    ("rename", "🔁"),
    ("package", "📦"),
    ("deploy", "📦"),
    ("fix", "🛠"),
    ("webpack", " 🎁"),
    ("increase", "📈 "),
    ("decrease", " 📉"),
    ("copy", " 📋"),
    ("config", "⚙️"),
    ("configure", "⚙️"),
    ("optimize", " 🚀"),
    ("typo", " 📝"),
    ("initial", " 🌀"),
];

/// Emoji for a commit type keyword.
pub fn type_emoji(commit_type: &str) -> Option<&'static str> {
    lookup(TYPE_EMOJIS, commit_type)
}

/// Emoji for a notable verb.
pub fn keyword_emoji(word: &str) -> Option<&'static str> {
    lookup(KEYWORD_EMOJIS, word)
}

/// Whether `word` is a hardcoded keyword. Hardcoded keywords are never sent
/// to the suggestion lookup.
pub fn is_keyword(word: &str) -> bool {
    keyword_emoji(word).is_some()
}

/// `TYPES: chore, docs, ...` cheat-sheet body.
pub fn types_cheat_sheet() -> String {
    let types: Vec<&str> = TYPE_EMOJIS.iter().map(|(ty, _)| *ty).collect();
    format!("TYPES: {}", types.join(", "))
}

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, emoji)| *emoji)
}
