//! Turning hand-typed text into a parsed recurrence.

use rec_parser::{ensure_lhs, insert_missing_plus};
use rec_session::SolverSession;
use tracing::debug;

/// Parse `input` into `session`, adding the `T(n) =` prefix when missing and
/// retrying once with dropped `+` signs restored.
///
/// Returns `false` when the text is not a recurrence; the session step log
/// then records the failure.
pub fn load_recurrence(session: &mut SolverSession, input: &str) -> bool {
    let text = ensure_lhs(input.trim());
    if rec_parser::parse(&text).is_err() {
        if let Some(repaired) = insert_missing_plus(&text) {
            if rec_parser::parse(&repaired).is_ok() {
                debug!(original = %text, repaired = %repaired, "repaired input");
                return session.parse(&repaired).is_some();
            }
        }
    }
    session.parse(&text).is_some()
}
