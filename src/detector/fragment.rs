//! Token extraction around a substring occurrence
//!
//! The values coming from the parsed document are idealized (`value`) while
//! the source line carries its concrete syntax (`  name: "value"`). The token
//! around the occurrence is cleaned of that syntax before it is compared.

/// Extracts the word containing the first occurrence of `substr` in `line`
///
/// The occurrence is widened to the nearest spaces, then one trailing `:`,
/// one trailing `"` and one leading `"` are dropped. Returns an empty string
/// when `substr` is empty or absent.
pub fn extract_line_fragment<'a>(line: &'a str, substr: &str) -> &'a str {
    if substr.is_empty() {
        return "";
    }
    let Some(found) = line.find(substr) else {
        return "";
    };

    let bytes = line.as_bytes();
    let substr_end = found + substr.len();

    let start = bytes[..=found]
        .iter()
        .rposition(|&b| b == b' ')
        .map_or(0, |space| space + 1);
    let end = bytes[substr_end..]
        .iter()
        .position(|&b| b == b' ')
        .map_or(bytes.len(), |space| substr_end + space);

    remove_extras(line, start, end)
}

/// Text before the first `:` of `line`, used when matching on keys only
pub fn extract_key_fragment(line: &str) -> &str {
    match line.find(':') {
        Some(colon) => &line[..colon],
        None => line,
    }
}

fn remove_extras(line: &str, mut start: usize, mut end: usize) -> &str {
    let bytes = line.as_bytes();

    // yaml keys end with a colon
    if end > start && bytes[end - 1] == b':' {
        end -= 1;
    }
    if end > start && bytes[end - 1] == b'"' {
        end -= 1;
    }
    if start < end && bytes[start] == b'"' {
        start += 1;
    }

    &line[start..end]
}
