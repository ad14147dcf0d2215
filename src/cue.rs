//! Turning segments into timed, displayable cues.

use std::time::Duration;

use serde::Serialize;

use crate::line_break::break_line_by_punctuation;
use crate::segments::Segment;

/// One timed subtitle entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cue {
    pub start: Duration,
    pub end: Duration,
    /// Display lines, never empty.
    pub lines: Vec<String>,
    /// Id of the style this cue is drawn with.
    pub style: String,
    pub layer: i32,
}

impl Cue {
    /// The cue's lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Per-language rendering settings, resolved from [`crate::opts::SubtitleOpts`].
#[derive(Debug, Clone)]
pub(crate) struct CueLayout<'a> {
    pub lang: &'a str,
    /// Line width budget; `None` keeps each segment on a single cue.
    pub max_width: Option<usize>,
    pub style: &'a str,
    pub layer: i32,
}

impl Segment {
    /// Build the cues for this segment in one language.
    ///
    /// With a width budget the text is wrapped at punctuation and each piece gets its own cue.
    /// Piece timing is interpolated by character position across the segment; the last piece
    /// always ends exactly at the segment's end.
    pub(crate) fn cues(&self, layout: &CueLayout<'_>) -> Vec<Cue> {
        let text = self.text_for(layout.lang);
        let pieces = match layout.max_width {
            Some(limit) => break_line_by_punctuation(text, limit),
            None => vec![text],
        };

        let total_chars = text.chars().count();
        let duration = self.end - self.start;
        let mut offset = 0;
        let mut start_at = seconds_to_duration(self.start);
        let mut cues = Vec::with_capacity(pieces.len());

        for piece in pieces {
            offset += piece.chars().count();
            let end_at = if offset >= total_chars {
                seconds_to_duration(self.end)
            } else {
                seconds_to_duration(self.start + duration * offset as f64 / total_chars as f64)
            };

            cues.push(Cue {
                start: start_at,
                end: end_at,
                lines: vec![piece.to_owned()],
                style: layout.style.to_owned(),
                layer: layout.layer,
            });
            start_at = end_at;
        }

        cues
    }
}

/// Convert seconds to a `Duration`, rounded to the millisecond and clamped at zero.
pub(crate) fn seconds_to_duration(seconds: f64) -> Duration {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_millis((seconds * 1000.0).round() as u64)
}
