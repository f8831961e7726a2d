//! Context inference from the staged-changes block.

pub mod infer;
pub mod staged;

pub use infer::{MAX_CONTEXTS_PER_PATH, infer_contexts, infer_path_contexts};
pub use staged::{STAGED_MARKER, has_staged_block, staged_paths};

use tracing::debug;

use crate::emoji::tables::types_cheat_sheet;
use crate::message::first_comment_line_offset;

/// Opening of every context report line.
const REPORT_PREFIX: &str = "# Found ";

/// Render the context report, one `\n`-terminated comment line each.
///
/// ```text
/// # Found 2 contexts
/// #     * api
/// #     * auth
/// ```
pub fn render_report(contexts: &[String]) -> String {
    let headline = match contexts.len() {
        0 => "Found no contexts".to_string(),
        1 => "Found 1 context".to_string(),
        n => format!("Found {n} contexts"),
    };

    let mut report = format!("# {headline}\n");
    for context in contexts {
        report.push_str(&format!("#     * {context}\n"));
    }
    report
}

/// Whether a context report was already inserted.
fn has_report(message: &str) -> bool {
    message.lines().any(|line| {
        line.strip_prefix(REPORT_PREFIX).is_some_and(|rest| {
            rest == "no contexts"
                || rest
                    .strip_suffix(" contexts")
                    .or_else(|| rest.strip_suffix(" context"))
                    .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        })
    })
}

/// Insert the context report and type cheat-sheet above Git's comment block.
///
/// No-op without a staged-changes block or when a report is already present.
/// Existing bytes are never altered; the report is only inserted.
pub fn infer_context(message: &str) -> String {
    if !has_staged_block(message) || has_report(message) {
        return message.to_string();
    }
    let Some(offset) = first_comment_line_offset(message) else {
        return message.to_string();
    };

    let contexts = infer_contexts(&staged_paths(message));
    debug!("Inferred {} context(s): {:?}", contexts.len(), contexts);

    let mut report = render_report(&contexts);
    report.push_str(&format!("# {}\n", types_cheat_sheet()));

    let mut out = String::with_capacity(message.len() + report.len());
    out.push_str(&message[..offset]);
    out.push_str(&report);
    out.push_str(&message[offset..]);
    out
}
