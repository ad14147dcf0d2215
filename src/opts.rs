//! Options for resegmenting, rendering and translating a transcript.
//!
//! These are *library-level configuration* types, not CLI flags directly.
//! The CLI maps user input into them so other frontends (services, tests, batch jobs)
//! can construct the same options programmatically.

use tokio_util::sync::CancellationToken;

use crate::style::Style;

/// Options for rebuilding segments from the flat word list.
#[derive(Debug, Clone)]
pub struct ResegmentOpts {
    /// Maximum silence, in seconds, across which two sentences may still be merged.
    pub max_interval: f64,

    /// Maximum combined length, in characters, of two merged sentences.
    pub max_text_len: usize,
}

impl Default for ResegmentOpts {
    fn default() -> Self {
        Self {
            max_interval: 0.5,
            max_text_len: 200,
        }
    }
}

/// Options for merging short neighboring segments.
#[derive(Debug, Clone)]
pub struct MergeOpts {
    /// Language whose text is measured. `None` measures the source text.
    pub lang: Option<String>,

    /// Maximum silence, in seconds, across which two segments may be merged.
    pub max_interval: f64,

    /// Maximum display width of a merged segment.
    ///
    /// `None` picks the default for the measured language (narrower for CJK).
    pub max_width: Option<usize>,
}

impl Default for MergeOpts {
    fn default() -> Self {
        Self {
            lang: None,
            max_interval: 0.5,
            max_width: None,
        }
    }
}

/// How one language is rendered into cues.
#[derive(Debug, Clone)]
pub struct SubtitleOpts {
    /// Language to render; must be the source language or an existing translation.
    pub lang: String,

    /// Whether to wrap long text at punctuation into several timed cues.
    pub line_break: bool,

    /// Display width budget when `line_break` is set. `None` picks the language default.
    pub max_width: Option<usize>,

    /// Visual layer handed to the renderer.
    pub layer: i32,

    /// Style for these cues. `None` uses [`Style::primary`].
    pub style: Option<Style>,
}

impl SubtitleOpts {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            line_break: false,
            max_width: None,
            layer: 0,
            style: None,
        }
    }

    pub fn with_line_break(mut self, line_break: bool) -> Self {
        self.line_break = line_break;
        self
    }
}

/// Options for a translation batch.
#[derive(Debug, Clone, Default)]
pub struct TranslateOpts {
    /// Re-translate segments that already have a translation for the target language.
    pub override_existing: bool,

    /// Rebuild segments from words before translating.
    ///
    /// Warning: this drops every existing translation, for all languages.
    pub resegment_by_words: bool,

    /// Aborts the batch at the next translation call once cancelled.
    pub cancel: Option<CancellationToken>,
}
