//! Describe-report parsing for p4sweep.
//!
//! Parses the saved output of `p4 describe -S -dw <changelist>` (shelf
//! diff, whitespace ignored) into a per-file count of non-trivial changed
//! lines, and selects the files whose count is zero.
//!
//! The parsing is deterministic:
//! - Section headers look like `==== //depot/path/file.txt#3 ====`; the
//!   file identifier is everything between the `==== ` marker and the next
//!   `#`.
//! - Content lines are attributed to the most recent header's file.
//! - A `BTreeMap` keeps counter iteration (and therefore selection and
//!   logging order) stable across runs.

use std::collections::BTreeMap;

/// Leading marker of a section header line.
const HEADER_PREFIX: &str = "==== ";

/// Trailing marker of a section header line.
const HEADER_SUFFIX: &str = "====";

/// Parse describe output into a map from file identifier to the number of
/// non-trivial changed lines in that file's section(s).
///
/// A file first seen in a header starts at 0; every subsequent non-header
/// line with trimmed length greater than 1 increments it until the next
/// header. Re-encountering a header for a known file does not reset its
/// count. Lines before the first header are ignored, as is a header line
/// with no `#` after the marker. Input with no headers at all yields an
/// empty map, not an error.
pub fn parse_describe(text: &str) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut current_file: Option<String> = None;

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with(HEADER_PREFIX) && trimmed.ends_with(HEADER_SUFFIX) {
            // A header-shaped line with no `#` is skipped entirely: it
            // creates no entry, counts as no content, and leaves the
            // cursor on the previous file.
            if let Some(file) = header_file(line) {
                counts.entry(file.clone()).or_insert(0);
                current_file = Some(file);
            }
            continue;
        }

        if trimmed.len() > 1
            && let Some(file) = &current_file
            && let Some(count) = counts.get_mut(file)
        {
            *count += 1;
        }
    }

    counts
}

/// Select the files with zero changed lines, in counter (sorted) order.
pub fn unchanged_files(counts: &BTreeMap<String, u64>) -> Vec<String> {
    counts
        .iter()
        .filter(|&(_, &count)| count < 1)
        .map(|(file, _)| file.clone())
        .collect()
}

/// Extract the file identifier from a header-shaped line: the substring
/// between the `==== ` marker and the next `#`. `None` when there is no
/// `#` after the marker.
fn header_file(line: &str) -> Option<String> {
    let start = line.find(HEADER_PREFIX)? + HEADER_PREFIX.len();
    let hash = line[start..].find('#')? + start;
    Some(line[start..hash].to_string())
}
