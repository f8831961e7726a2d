//! Issue-ticket detection from the branch name.
//!
//! A branch such as `foobar-123`, `[FOO 7]` or `#abc:42` yields the ticket
//! `FOOBAR-123`, `FOO-7` or `ABC-42`, which is prepended to the headline.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::message::{is_editable_headline, split_headline, with_headline};

/// `[`/`#`, letters, a separator, digits, `]`, then an optional `: body`.
static TICKET_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\[#]?([A-Za-z]+)[ :\-]([0-9]+)\]?(?::.*)?$").unwrap()
});

/// A ticket opening a headline, followed by `:`, whitespace or the end.
static LEADING_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\[#]?[A-Za-z]+[ :\-][0-9]+\]?(?:[:\s]|$)").unwrap());

/// A ticket already prepended in normalized form.
static NORMALIZED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+-[0-9]+: ").unwrap());

static BRANCH_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# On branch (.+)$").unwrap());

/// A normalized `PREFIX-NUMBER` ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub prefix: String,
    pub number: String,
}

impl Ticket {
    /// Parse text with the ticket grammar. The prefix is upper-cased.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = TICKET_GRAMMAR.captures(text.trim())?;
        Some(Self {
            prefix: caps[1].to_uppercase(),
            number: caps[2].to_string(),
        })
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.number)
    }
}

/// Branch name from the `# On branch <name>` line, if present.
pub fn branch_name(message: &str) -> Option<&str> {
    BRANCH_LINE
        .captures(message)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Whether the headline already opens with a ticket in any accepted form,
/// e.g. `FOO-1: msg`, `[FOO-1] msg` or `FOO 1 msg`.
pub fn starts_with_ticket(headline: &str) -> bool {
    LEADING_TICKET.is_match(headline)
}

/// Length of a leading `TICKET-1: ` prefix, or 0.
pub fn ticket_prefix_len(headline: &str) -> usize {
    NORMALIZED_PREFIX.find(headline).map_or(0, |m| m.end())
}

/// Prepend the branch ticket to the headline.
///
/// No-op when there is no branch line, the branch is not a ticket, or the
/// headline already starts with any ticket.
pub fn prepend_ticket(message: &str) -> String {
    let (headline, tail) = split_headline(message);
    if !is_editable_headline(headline) {
        return message.to_string();
    }

    let Some(ticket) = branch_name(tail).and_then(Ticket::parse) else {
        return message.to_string();
    };

    if starts_with_ticket(headline) {
        return message.to_string();
    }

    debug!("Prepending ticket {}", ticket);
    with_headline(message, &format!("{ticket}: {headline}"))
}
