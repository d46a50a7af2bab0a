//! Forgiving rewrites for hand-typed recurrences.

use std::borrow::Cow;

const LHS_PREFIX: &str = "T(n) = ";

/// Prefix `T(n) = ` when the text does not already start with `t(n)`.
pub fn ensure_lhs(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim_start();
    let has_lhs = trimmed
        .get(..4)
        .map(|head| head.eq_ignore_ascii_case("t(n)"))
        .unwrap_or(false);
    if has_lhs {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{}{}", LHS_PREFIX, trimmed))
    }
}

/// Insert the `+` users tend to drop between adjacent recursive calls:
/// `T(n/2)T(n/3)` becomes `T(n/2)+T(n/3)`.
///
/// Returns `None` when the text needed no repair.
pub fn insert_missing_plus(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len() + 4);
    let mut changed = false;
    let mut rest = text;

    while let Some(pos) = rest.find(')') {
        let (head, tail) = rest.split_at(pos + 1);
        out.push_str(head);
        let after_ws = tail.trim_start();
        let ws = &tail[..tail.len() - after_ws.len()];
        out.push_str(ws);
        if after_ws.starts_with('T') {
            out.push('+');
            changed = true;
        }
        rest = after_ws;
    }
    out.push_str(rest);

    if changed {
        Some(out)
    } else {
        None
    }
}
