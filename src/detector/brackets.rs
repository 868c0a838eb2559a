//! Template placeholder extraction
//!
//! Search keys coming out of the query engine may embed `{{...}}` placeholders
//! whose content contains dots, equals signs or further placeholders, e.g.
//! `resource.aws_s3_bucket[{{my.bucket}}].acl` or `FROM={{node:{{tag}}}}`.
//! Before a key is split into parts, every placeholder is pulled out and
//! replaced by a positional reference `{{N}}` into the extracted list.

use super::constants::{CLOSE_BRACKETS, MAX_NESTING_DEPTH, OPEN_BRACKETS};
use crate::error::DetectionIssue;
use crate::models::BracketValue;

/// Collects every placeholder of `expr` in discovery order
///
/// Nested placeholders come before the placeholder enclosing them, and
/// placeholders further left come before those to their right.
///
/// # Example
/// ```
/// use iac_line_locator::detector::get_bracket_values;
///
/// let values = get_bracket_values("FROM={{node:{{tag}}}}.RUN");
/// assert_eq!(values[0].inner, "tag");
/// assert_eq!(values[1].inner, "node:{{tag}}");
/// ```
pub fn get_bracket_values(expr: &str) -> Vec<BracketValue> {
    let mut values = Vec::new();
    collect_bracket_values(expr, &mut values, 0);
    values
}

/// Appends the placeholders of `expr` to `values`
///
/// Recursion only happens into placeholder bodies, so its depth follows the
/// nesting of the template and is capped at [`MAX_NESTING_DEPTH`].
pub fn collect_bracket_values(expr: &str, values: &mut Vec<BracketValue>, depth: usize) {
    let mut rest = expr;

    while let Some(open) = rest.find(OPEN_BRACKETS) {
        let body_start = open + OPEN_BRACKETS.len();
        let Some(close) = find_close(rest, body_start) else {
            log::debug!(
                "[brackets] {}",
                DetectionIssue::MalformedBracketExpression(rest[open..].to_string())
            );
            return;
        };

        let inner = &rest[body_start..close];
        if !inner.is_empty() {
            if depth < MAX_NESTING_DEPTH {
                collect_bracket_values(inner, values, depth + 1);
            } else {
                log::debug!(
                    "[brackets] nesting deeper than {} levels, not descending into '{}'",
                    MAX_NESTING_DEPTH,
                    inner
                );
            }
            values.push(BracketValue::from_inner(inner));
        }

        rest = &rest[close + CLOSE_BRACKETS.len()..];
    }
}

/// Rewrites every top-level placeholder of `search_key` as `{{N}}`
///
/// `N` is the position of that placeholder in `values`. Placeholders that are
/// not in `values` (empty ones, for instance) are kept as written.
pub fn sanitize_search_key(search_key: &str, values: &[BracketValue]) -> String {
    let mut sanitized = String::with_capacity(search_key.len());
    let mut rest = search_key;

    while let Some(open) = rest.find(OPEN_BRACKETS) {
        let Some(close) = find_close(rest, open + OPEN_BRACKETS.len()) else {
            break;
        };
        let full = &rest[open..close + CLOSE_BRACKETS.len()];

        sanitized.push_str(&rest[..open]);
        match values.iter().position(|value| value.full == full) {
            Some(idx) => sanitized.push_str(&format!("{{{{{}}}}}", idx)),
            None => sanitized.push_str(full),
        }

        rest = &rest[close + CLOSE_BRACKETS.len()..];
    }

    sanitized.push_str(rest);
    sanitized
}

/// Finds the `}}` closing a placeholder whose body starts at `from`
///
/// Returns the byte offset of that `}}`. Closers appearing before `from` are
/// never considered, so a stray `}}` ahead of the opening is skipped. When the
/// braces are unbalanced the first closer after the opening is used.
fn find_close(s: &str, from: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut i = from;

    while i + 1 < bytes.len() {
        if bytes[i] == b'{' && bytes[i + 1] == b'{' {
            depth += 1;
            i += 2;
        } else if bytes[i] == b'}' && bytes[i + 1] == b'}' {
            if depth == 0 {
                return Some(absorb_extra_closers(bytes, i));
            }
            depth -= 1;
            i += 2;
        } else {
            i += 1;
        }
    }

    let first_close = s.get(from..)?.find(CLOSE_BRACKETS)?;
    log::debug!(
        "[brackets] {}",
        DetectionIssue::MalformedBracketExpression(s.to_string())
    );
    Some(absorb_extra_closers(bytes, from + first_close))
}

/// Slides a `}}` match right over a run like `}}}`, leaving the extra braces in the body
fn absorb_extra_closers(bytes: &[u8], mut close: usize) -> usize {
    while close + 2 < bytes.len() && bytes[close + 2] == b'}' {
        close += 1;
    }
    close
}
