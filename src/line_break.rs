//! Wrapping display text at punctuation boundaries.

use crate::script::{break_points, display_width};

/// A leading fragment narrower than this is merged with the next clause when possible.
const MIN_FRAGMENT_WIDTH: usize = 10;

/// Split `text` into lines no wider than `limit`, breaking only after punctuation.
///
/// The returned slices always concatenate back to `text`. A remainder with no usable break
/// point is returned whole, even when it is wider than `limit`.
pub fn break_line_by_punctuation(text: &str, limit: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    loop {
        match next_break(rest, limit) {
            Some(at) => {
                let (line, tail) = rest.split_at(at);
                lines.push(line);
                rest = tail;
            }
            None => {
                lines.push(rest);
                return lines;
            }
        }
    }
}

/// Byte offset at which the first line of `text` should end, if it needs breaking at all.
fn next_break(text: &str, limit: usize) -> Option<usize> {
    if display_width(text) <= limit {
        return None;
    }

    let points = break_points(text);
    for (i, &at) in points.iter().enumerate().rev() {
        let width = display_width(&text[..at]);
        if width > limit {
            continue;
        }
        if width >= MIN_FRAGMENT_WIDTH {
            return Some(at);
        }
        // Too short to stand alone: extend to the next clause unless that ends the text.
        return points.get(i + 1).copied().filter(|&next| next < text.len());
    }

    None
}
