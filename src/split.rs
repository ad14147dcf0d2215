//! Splitting one segment into several at the line breaks of its text.

use std::collections::BTreeMap;

use tracing::debug;

use crate::script::word_joiner;
use crate::segments::Segment;
use crate::transcript::Transcript;
use crate::{Error, Result};

impl Transcript {
    /// Split the segment at `index` into one segment per `\n`-separated line of its text.
    ///
    /// Words are handed out greedily: each line takes words until their joined text is at
    /// least as long as the line, and the last line takes whatever is left. Every translation
    /// must have exactly as many lines as the source text; line `i` of each translation goes
    /// to the `i`-th new segment.
    ///
    /// Nothing is modified unless the whole split succeeds.
    pub fn split_segment(&mut self, index: usize) -> Result<()> {
        let segment = self.segments.get(index).ok_or(Error::OutOfRange(index))?;
        let lines: Vec<&str> = segment.text.split('\n').collect();

        let mut translated: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (lang, text) in &segment.translations {
            let split: Vec<&str> = text.split('\n').collect();
            if split.len() != lines.len() {
                return Err(Error::LineCountMismatch {
                    lang: lang.clone(),
                    expected: lines.len(),
                    actual: split.len(),
                });
            }
            translated.insert(lang, split);
        }

        let joiner = word_joiner(&self.language);
        let words = &segment.words;
        let mut next_word = 0;
        let mut children = Vec::with_capacity(lines.len());

        for (i, line) in lines.iter().enumerate() {
            if next_word >= words.len() {
                return Err(Error::SplitWordsExhausted { index, line: i });
            }

            let is_last = i + 1 == lines.len();
            let target_len = line.trim().chars().count();
            let mut taken_len = 0;
            let mut end = next_word;
            while end < words.len() {
                let token_len = words[end].word.trim().chars().count();
                if end > next_word {
                    taken_len += joiner.chars().count();
                }
                taken_len += token_len;
                end += 1;
                if !is_last && taken_len + 1 > target_len {
                    break;
                }
            }

            let child_words = words[next_word..end].to_vec();
            let translations = translated
                .iter()
                .map(|(lang, split)| ((*lang).to_owned(), split[i].to_owned()))
                .collect();
            children.push(Segment {
                start: child_words[0].start,
                end: child_words[child_words.len() - 1].end,
                text: (*line).to_owned(),
                words: child_words,
                speaker: segment.speaker.clone(),
                chars: None,
                translations,
            });
            next_word = end;
        }

        debug!(index, parts = children.len(), "split segment");
        self.segments.splice(index..=index, children);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    fn word(text: &str, start: f64, end: f64) -> Word {
        Word {
            word: text.to_owned(),
            start,
            end,
            score: 0.9,
            speaker: None,
        }
    }

    fn transcript() -> Transcript {
        let words = vec![
            word("Hello", 0.0, 0.4),
            word("there,", 0.5, 0.9),
            word("general", 1.0, 1.5),
            word("Kenobi.", 1.6, 2.2),
        ];
        let two_lines = Segment {
            start: 0.0,
            end: 2.2,
            text: "Hello there,\ngeneral Kenobi.".to_owned(),
            words: words.clone(),
            speaker: Some("SPEAKER_00".to_owned()),
            chars: None,
            translations: BTreeMap::from([(
                "zh".to_owned(),
                "你好，\n克诺比将军。".to_owned(),
            )]),
        };
        let after = Segment {
            start: 3.0,
            end: 3.5,
            text: "Bye.".to_owned(),
            words: vec![word("Bye.", 3.0, 3.5)],
            ..Segment::default()
        };
        Transcript {
            segments: vec![two_lines, after],
            words,
            language: "en".to_owned(),
        }
    }

    #[test]
    fn splits_words_and_translations_by_line() -> anyhow::Result<()> {
        let mut t = transcript();
        t.split_segment(0)?;

        assert_eq!(t.segments.len(), 3);
        let first = &t.segments[0];
        assert_eq!(first.text, "Hello there,");
        assert_eq!((first.start, first.end), (0.0, 0.9));
        assert_eq!(first.words.len(), 2);
        assert_eq!(first.translations["zh"], "你好，");
        assert_eq!(first.speaker.as_deref(), Some("SPEAKER_00"));

        let second = &t.segments[1];
        assert_eq!(second.text, "general Kenobi.");
        assert_eq!((second.start, second.end), (1.0, 2.2));
        assert_eq!(second.translations["zh"], "克诺比将军。");

        assert_eq!(t.segments[2].text, "Bye.");
        Ok(())
    }

    #[test]
    fn last_line_keeps_every_remaining_word() -> anyhow::Result<()> {
        let mut t = transcript();
        t.segments[0].text = "Hello there,\ngeneral".to_owned();
        t.segments[0].translations.clear();
        t.split_segment(0)?;
        assert_eq!(t.segments[1].words.len(), 2);
        assert_eq!(t.segments[1].end, 2.2);
        Ok(())
    }

    #[test]
    fn mismatched_translation_leaves_transcript_unchanged() {
        let mut t = transcript();
        t.segments[0]
            .translations
            .insert("fr".to_owned(), "Bonjour, général Kenobi.".to_owned());
        let before = t.clone();

        let err = t.split_segment(0).unwrap_err();
        assert!(matches!(
            err,
            Error::LineCountMismatch { ref lang, expected: 2, actual: 1 } if lang == "fr"
        ));
        assert_eq!(t, before);
    }

    #[test]
    fn out_of_range_index_fails() {
        let mut t = transcript();
        let before = t.clone();
        assert!(matches!(t.split_segment(2), Err(Error::OutOfRange(2))));
        assert_eq!(t, before);
    }

    #[test]
    fn running_out_of_words_fails_without_mutation() {
        let mut t = transcript();
        t.segments[1].text = "Bye.\nagain\nand again".to_owned();
        let before = t.clone();
        assert!(matches!(
            t.split_segment(1),
            Err(Error::SplitWordsExhausted { index: 1, line: 1 })
        ));
        assert_eq!(t, before);
    }

    #[test]
    fn segment_without_words_cannot_be_split() {
        let mut t = transcript();
        t.segments[1].words.clear();
        let before = t.clone();
        assert!(matches!(
            t.split_segment(1),
            Err(Error::SplitWordsExhausted { index: 1, line: 0 })
        ));
        assert_eq!(t, before);
    }

    #[test]
    fn single_line_segment_is_kept_as_is() -> anyhow::Result<()> {
        let mut t = transcript();
        let before = t.segments[1].clone();
        t.split_segment(1)?;
        assert_eq!(t.segments.len(), 2);
        assert_eq!(t.segments[1].text, before.text);
        assert_eq!(t.segments[1].words, before.words);
        Ok(())
    }
}
