use serde::{Deserialize, Serialize};

/// A single recognized word with its own timing.
///
/// whisperX leaves `start`, `end` and `score` out for words it could not align, so they
/// default to zero when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Word {
    /// Token text, possibly with surrounding whitespace.
    pub word: String,
    /// Start time in seconds.
    #[serde(default)]
    pub start: f64,
    /// End time in seconds.
    #[serde(default)]
    pub end: f64,
    /// Alignment confidence.
    #[serde(default)]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Word {
    /// Whether this word carries no timing at all.
    ///
    /// A word that genuinely starts and ends at zero looks the same; the two cases cannot be
    /// told apart.
    pub fn timing_missing(&self) -> bool {
        self.start == 0.0 && self.end == 0.0
    }
}

/// Character-level alignment, carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharSpan {
    pub char: String,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unaligned_word_decodes_with_missing_timing() -> anyhow::Result<()> {
        let word: Word = serde_json::from_str(r#"{"word": "1984"}"#)?;
        assert!(word.timing_missing());
        assert_eq!(word.score, 0.0);
        Ok(())
    }

    #[test]
    fn aligned_word_has_timing() -> anyhow::Result<()> {
        let word: Word =
            serde_json::from_str(r#"{"word": "hi", "start": 0.0, "end": 0.4, "score": 0.9}"#)?;
        assert!(!word.timing_missing());
        Ok(())
    }
}
