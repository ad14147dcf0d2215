use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::script::word_joiner;
use crate::word::{CharSpan, Word};

/// A contiguous span of source text with its timing, words and translations.
///
/// `start` and `end` track the first word's start and the last word's end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chars: Option<Vec<CharSpan>>,
    /// Translated text keyed by language code.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,
}

impl Segment {
    /// The text to show for `lang`: its translation when present, otherwise the source text.
    pub fn text_for(&self, lang: &str) -> &str {
        self.translations
            .get(lang)
            .map_or(self.text.as_str(), String::as_str)
    }

    /// Append a word, extending the text with `joiner` and moving `end` forward.
    pub(crate) fn push_word(&mut self, word: Word, joiner: &str) {
        let token = word.word.trim();
        if self.words.is_empty() {
            self.start = word.start;
        } else {
            self.text.push_str(joiner);
        }
        self.text.push_str(token);
        self.end = word.end;
        self.words.push(word);
    }

    /// Fold `other` into this segment.
    ///
    /// Source text is joined with the source language's joiner and every translation with its
    /// own language's joiner. A translation present on only one side is kept as is.
    pub(crate) fn merge(&mut self, other: Segment, source_lang: &str) {
        self.text = join_trimmed(&self.text, &other.text, word_joiner(source_lang));
        self.end = other.words.last().map_or(other.end, |w| w.end);
        self.words.extend(other.words);

        for (lang, theirs) in other.translations {
            let merged = match self.translations.get(&lang) {
                Some(ours) => join_trimmed(ours, &theirs, word_joiner(&lang)),
                None => theirs,
            };
            self.translations.insert(lang, merged);
        }
    }
}

fn join_trimmed(left: &str, right: &str, joiner: &str) -> String {
    let right = right.trim();
    if left.is_empty() {
        return right.to_owned();
    }
    if right.is_empty() {
        return left.to_owned();
    }
    format!("{left}{joiner}{right}")
}
