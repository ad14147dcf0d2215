//! Rebuilding segment boundaries, either from the raw word stream or by merging neighbors.

use tracing::debug;

use crate::opts::{MergeOpts, ResegmentOpts};
use crate::script::{default_max_width, display_width, is_sentence_final, word_joiner};
use crate::segments::Segment;
use crate::transcript::Transcript;
use crate::{Error, Result};

impl Transcript {
    /// Rebuild segments from the flat word list, one per sentence.
    ///
    /// A sentence closes on a word ending in sentence-final punctuation. A closed sentence is
    /// folded into the previous one when the silence between them is under
    /// `opts.max_interval` and their combined length is under `opts.max_text_len`.
    ///
    /// Every existing translation is lost, so run this before translating. On
    /// [`Error::MissingTiming`] the transcript is left as it was.
    pub fn resegment_by_words(&mut self, opts: &ResegmentOpts) -> Result<()> {
        let joiner = word_joiner(&self.language);
        let mut segments: Vec<Segment> = Vec::new();
        let mut pending = Segment::default();

        for word in &self.words {
            if word.timing_missing() {
                return Err(Error::MissingTiming(word.word.clone()));
            }

            let closes = is_sentence_final(&word.word);
            pending.push_word(word.clone(), joiner);
            if !closes {
                continue;
            }

            let sentence = std::mem::take(&mut pending);
            match segments.last_mut() {
                Some(prev)
                    if sentence.start - prev.end < opts.max_interval
                        && sentence.text.chars().count() + prev.text.chars().count()
                            < opts.max_text_len =>
                {
                    prev.merge(sentence, &self.language);
                }
                _ => segments.push(sentence),
            }
        }

        // Words after the last sentence-final mark.
        if !pending.words.is_empty() {
            segments.push(pending);
        }

        debug!(
            words = self.words.len(),
            segments = segments.len(),
            "resegmented by words"
        );
        self.segments = segments;
        Ok(())
    }

    /// Merge short neighboring segments and return the resulting list.
    ///
    /// Two neighbors merge when the silence between them is under `opts.max_interval` and
    /// their texts fit within `opts.max_width` columns together. With `opts.lang` naming a
    /// translated language, widths are measured on that translation where both segments
    /// have it.
    pub fn merge_segments(&mut self, opts: &MergeOpts) -> Vec<Segment> {
        let lang = opts
            .lang
            .as_deref()
            .unwrap_or(self.language.as_str())
            .to_owned();
        let max_width = opts.max_width.unwrap_or_else(|| default_max_width(&lang));
        let before = self.segments.len();

        let mut merged: Vec<Segment> = Vec::with_capacity(before);
        for segment in std::mem::take(&mut self.segments) {
            match merged.last_mut() {
                Some(prev)
                    if segment.start - prev.end < opts.max_interval
                        && fits(prev, &segment, &lang, &self.language, max_width) =>
                {
                    prev.merge(segment, &self.language);
                }
                _ => merged.push(segment),
            }
        }

        debug!(
            before,
            after = merged.len(),
            lang = %lang,
            max_width,
            "merged segments"
        );
        self.segments = merged;
        self.segments.clone()
    }
}

fn fits(prev: &Segment, next: &Segment, lang: &str, source_lang: &str, max_width: usize) -> bool {
    let mut texts = (prev.text.as_str(), next.text.as_str());
    let mut joiner = word_joiner(source_lang);
    if lang != source_lang {
        if let (Some(a), Some(b)) = (prev.translations.get(lang), next.translations.get(lang)) {
            texts = (a.as_str(), b.as_str());
            joiner = word_joiner(lang);
        }
    }
    // Measured as joined, so the merged text itself stays within the budget.
    display_width(texts.0) + display_width(joiner) + display_width(texts.1) <= max_width
}
