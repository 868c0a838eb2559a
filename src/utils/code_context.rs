//! Code context extraction utilities
//!
//! Builds the window of lines shown around a detected finding

use crate::models::CodeLine;

/// Get the lines adjacent to the line that contains the vulnerability
///
/// # Arguments
/// * `idx` - The detected line (0-indexed)
/// * `adj` - The number of lines wanted in the window
/// * `lines` - All lines of the file
///
/// # Returns
/// Up to `adj` lines with their 1-based positions. The window is centered on
/// `idx` with `(adj - 1) / 2` lines before it, so an even `adj` takes one more
/// line after the finding than before. Near the start or end of the file the
/// window slides to stay inside the file and keeps `adj` lines.
///
/// # Example
/// ```
/// use iac_line_locator::utils::get_adjacent_vuln_lines;
///
/// let lines = ["a", "b", "c", "d", "e"];
/// let window = get_adjacent_vuln_lines(0, 3, &lines);
/// let positions: Vec<usize> = window.iter().map(|l| l.position).collect();
/// assert_eq!(positions, vec![1, 2, 3]);
/// ```
pub fn get_adjacent_vuln_lines<S: AsRef<str>>(idx: usize, adj: usize, lines: &[S]) -> Vec<CodeLine> {
    let total_lines = lines.len();
    if total_lines == 0 || adj == 0 {
        return Vec::new();
    }

    // Window bigger than the file
    if adj >= total_lines {
        return create_vuln_lines(0, lines);
    }

    let idx = idx.min(total_lines - 1);
    let lines_before = (adj - 1) / 2;
    let start_idx = idx.saturating_sub(lines_before).min(total_lines - adj);

    create_vuln_lines(start_idx, &lines[start_idx..start_idx + adj])
}

/// Numbers `lines` starting at the 0-indexed `start_idx`
fn create_vuln_lines<S: AsRef<str>>(start_idx: usize, lines: &[S]) -> Vec<CodeLine> {
    lines
        .iter()
        .enumerate()
        .map(|(offset, line)| {
            let line: &str = line.as_ref();
            CodeLine::new(start_idx + offset + 1, line)
        })
        .collect()
}

/// Render a context window as a numbered snippet
///
/// The line at `highlight` (1-indexed) is marked with `>`.
///
/// # Example
/// ```
/// use iac_line_locator::models::CodeLine;
/// use iac_line_locator::utils::format_code_lines;
///
/// let snippet = format_code_lines(&[CodeLine::new(9, "acl = \"public-read\"")], 9);
/// assert_eq!(snippet, ">   9 | acl = \"public-read\"");
/// ```
pub fn format_code_lines(code_lines: &[CodeLine], highlight: usize) -> String {
    code_lines
        .iter()
        .map(|code_line| {
            let marker = if code_line.position == highlight { '>' } else { ' ' };
            format!("{}{:4} | {}", marker, code_line.position, code_line.line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<String> {
        (1..=count).map(|n| format!("line {}", n)).collect()
    }

    fn positions(window: &[CodeLine]) -> Vec<usize> {
        window.iter().map(|l| l.position).collect()
    }

    #[test]
    fn test_window_at_file_start() {
        let lines = numbered(10);
        let window = get_adjacent_vuln_lines(0, 3, &lines);

        assert_eq!(positions(&window), vec![1, 2, 3]);
        assert_eq!(window[0].line, "line 1");
    }

    #[test]
    fn test_window_at_file_end() {
        let lines = numbered(10);
        let window = get_adjacent_vuln_lines(9, 3, &lines);

        assert_eq!(positions(&window), vec![8, 9, 10]);
        assert_eq!(window[2].line, "line 10");
    }

    #[test]
    fn test_window_centered_odd() {
        let lines = numbered(10);
        let window = get_adjacent_vuln_lines(4, 3, &lines);

        // Line 5 is the middle of the window
        assert_eq!(positions(&window), vec![4, 5, 6]);
    }

    #[test]
    fn test_window_centered_even_takes_one_less_before() {
        let lines = numbered(10);
        let window = get_adjacent_vuln_lines(4, 4, &lines);

        assert_eq!(positions(&window), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_window_near_start_slides_to_keep_size() {
        let lines = numbered(10);
        let window = get_adjacent_vuln_lines(1, 5, &lines);

        assert_eq!(positions(&window), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_near_end_slides_to_keep_size() {
        let lines = numbered(10);
        let window = get_adjacent_vuln_lines(8, 6, &lines);

        assert_eq!(positions(&window), vec![5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_larger_than_file() {
        let lines = numbered(2);
        let window = get_adjacent_vuln_lines(1, 5, &lines);

        assert_eq!(positions(&window), vec![1, 2]);
    }

    #[test]
    fn test_window_size_matches_request() {
        let lines = numbered(7);
        for adj in 1..=7 {
            for idx in 0..7 {
                let window = get_adjacent_vuln_lines(idx, adj, &lines);
                assert_eq!(window.len(), adj, "idx {idx} adj {adj}");
                assert!(positions(&window).contains(&(idx + 1)));
            }
        }
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Vec<String> = Vec::new();
        assert!(get_adjacent_vuln_lines(0, 3, &empty).is_empty());
        assert!(get_adjacent_vuln_lines(0, 0, &numbered(3)).is_empty());
    }

    #[test]
    fn test_index_past_end_is_clamped() {
        let lines = numbered(5);
        let window = get_adjacent_vuln_lines(42, 3, &lines);

        assert_eq!(positions(&window), vec![3, 4, 5]);
    }

    #[test]
    fn test_format_marks_detected_line() {
        let lines = numbered(3);
        let window = get_adjacent_vuln_lines(1, 3, &lines);
        let snippet = format_code_lines(&window, 2);

        assert_eq!(snippet, "    1 | line 1\n>   2 | line 2\n    3 | line 3");
        assert!(!format_code_lines(&[], 1).contains('|'));
    }
}
