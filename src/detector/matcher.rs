//! Line matching by edit distance
//!
//! Every line from the cursor to the end of the file that contains the search
//! substrings becomes a candidate, scored by how far the tokens around the
//! occurrences are from the substrings themselves. The closest candidate wins.

use std::collections::BTreeMap;

use super::distance::levenshtein_distance;
use super::fragment::extract_line_fragment;
use crate::error::DetectionIssue;

/// Outcome of one matching attempt
///
/// `found` and `line` are threaded into the next attempt on the same file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch {
    /// A line has been matched, by this attempt or an earlier one
    pub found: bool,
    /// 0-based index of the matched line, or the unchanged cursor when `stop` is set
    pub line: usize,
    /// Nothing matched from the cursor on; the caller should stop advancing
    pub stop: bool,
}

/// Finds the line closest to `substr1` (and `substr2`, when non-empty) at or after `cur_line`
///
/// Only the first occurrence of `substr1` in a line is considered, and
/// `substr2` must appear after it. When no line qualifies, `found_one` and
/// `cur_line` are returned unchanged with `stop` set.
pub fn detect_current_line<S: AsRef<str>>(
    lines: &[S],
    substr1: &str,
    substr2: &str,
    cur_line: usize,
    found_one: bool,
) -> LineMatch {
    let distances: BTreeMap<usize, usize> = lines
        .iter()
        .enumerate()
        .skip(cur_line)
        .filter_map(|(idx, line)| score_line(line.as_ref(), substr1, substr2).map(|d| (idx, d)))
        .collect();

    if distances.is_empty() {
        log::debug!(
            "[matcher] {}",
            DetectionIssue::NoMatchFound {
                substr1: substr1.to_string(),
                substr2: substr2.to_string(),
                cursor: cur_line,
            }
        );
        return LineMatch {
            found: found_one,
            line: cur_line,
            stop: true,
        };
    }

    LineMatch {
        found: true,
        line: select_line_with_minimum_distance(&distances, cur_line),
        stop: false,
    }
}

/// Picks the line with the smallest distance, the lowest line on ties
///
/// `starting_from` is returned only when `distances` is empty.
pub fn select_line_with_minimum_distance(
    distances: &BTreeMap<usize, usize>,
    starting_from: usize,
) -> usize {
    let mut min_distance = usize::MAX;
    let mut line_of_min_distance = starting_from;

    for (&line, &distance) in distances {
        if distance < min_distance || (distance == min_distance && line < line_of_min_distance) {
            min_distance = distance;
            line_of_min_distance = line;
        }
    }

    line_of_min_distance
}

/// Distance score of a qualifying line, `None` when the line does not qualify
fn score_line(line: &str, substr1: &str, substr2: &str) -> Option<usize> {
    if substr1.is_empty() {
        return None;
    }
    let found = line.find(substr1)?;
    let mut distance = levenshtein_distance(extract_line_fragment(line, substr1), substr1);

    if !substr2.is_empty() {
        let rest = &line[found + substr1.len()..];
        if !rest.contains(substr2) {
            return None;
        }
        distance += levenshtein_distance(extract_line_fragment(rest, substr2), substr2);
    }

    Some(distance)
}
