//! The transcript aggregate: source language, segments and the flat word list.
//!
//! Every mutating operation lives in its own module as an `impl Transcript` block:
//! - `resegment` rebuilds or merges segments
//! - `split` splits one segment on line breaks
//! - `translate` fills per-segment translations
//!
//! Shared access goes through [`crate::store::TranscriptStore`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::segments::Segment;
use crate::word::Word;

/// A word-timed transcript as produced by whisperX.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transcript {
    pub segments: Vec<Segment>,
    #[serde(rename = "word_segments")]
    pub words: Vec<Word>,
    pub language: String,
}

impl Transcript {
    /// Languages cues can be generated for.
    ///
    /// Translated languages come first in sorted order; the source language is always last.
    pub fn available_langs(&self) -> Vec<String> {
        let translated: BTreeSet<&str> = self
            .segments
            .iter()
            .flat_map(|s| s.translations.keys())
            .map(String::as_str)
            .filter(|lang| *lang != self.language)
            .collect();

        translated
            .into_iter()
            .map(str::to_owned)
            .chain(std::iter::once(self.language.clone()))
            .collect()
    }

    pub fn is_available(&self, lang: &str) -> bool {
        lang == self.language || self.segments.iter().any(|s| s.translations.contains_key(lang))
    }
}
