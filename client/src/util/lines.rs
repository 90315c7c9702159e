//! Newline-delimited textarea helpers.

#[cfg(test)]
#[path = "lines_test.rs"]
mod lines_test;

/// Split a textarea value into trimmed, non-blank entries.
pub fn split_lines(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Number of entries [`split_lines`] would return.
pub fn count_lines(value: &str) -> usize {
    value.lines().filter(|line| !line.trim().is_empty()).count()
}
