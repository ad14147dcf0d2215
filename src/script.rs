//! Per-script text rules: punctuation classes, word joiners and display width.
//!
//! Latin and CJK punctuation are kept in separate tables because they break differently:
//! a Latin mark only ends a clause when a space follows it, while a CJK mark stands alone.

use unicode_width::UnicodeWidthStr;

/// Default display width for one subtitle line in scripts other than CJK.
pub const DEFAULT_MAX_LINE_WIDTH: usize = 72;

/// Default display width for one subtitle line in Chinese, Japanese and Korean.
pub const DEFAULT_CJK_MAX_LINE_WIDTH: usize = 42;

const CJK_LANGS: &[&str] = &["zh", "ja", "ko"];

const LATIN_SENTENCE_FINAL: &[char] = &['.', '!', '?'];
const CJK_SENTENCE_FINAL: &[char] = &['。', '！', '？'];

const LATIN_BREAK: &[char] = &['.', '!', '?', ',', ':', ';'];
const CJK_BREAK: &[char] = &['。', '！', '？', '，', '：', '；'];

const EM_DASH: char = '—';

/// Whether a language code names a script written without spaces between words.
pub fn is_cjk(lang: &str) -> bool {
    CJK_LANGS.contains(&lang)
}

/// The string placed between two words (or two merged texts) of a language.
pub fn word_joiner(lang: &str) -> &'static str {
    if is_cjk(lang) { "" } else { " " }
}

/// Default line width budget for a language.
pub fn default_max_width(lang: &str) -> usize {
    if is_cjk(lang) {
        DEFAULT_CJK_MAX_LINE_WIDTH
    } else {
        DEFAULT_MAX_LINE_WIDTH
    }
}

/// Column count of `text`, with East-Asian wide characters taking two columns.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Whether `token` ends a sentence: a sentence-final mark, optionally followed by whitespace.
pub fn is_sentence_final(token: &str) -> bool {
    token
        .trim_end()
        .chars()
        .next_back()
        .is_some_and(|c| LATIN_SENTENCE_FINAL.contains(&c) || CJK_SENTENCE_FINAL.contains(&c))
}

/// Byte offsets just past every break candidate in `text`, left to right.
///
/// A Latin mark counts only when a space follows, and that space belongs to the candidate.
/// `——` is one candidate; a lone `—` is one too.
pub fn break_points(text: &str) -> Vec<usize> {
    let mut points = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let after = idx + c.len_utf8();
        if CJK_BREAK.contains(&c) {
            points.push(after);
        } else if LATIN_BREAK.contains(&c) {
            if let Some(&(_, ' ')) = chars.peek() {
                chars.next();
                points.push(after + 1);
            }
        } else if c == EM_DASH {
            if let Some(&(_, EM_DASH)) = chars.peek() {
                chars.next();
                points.push(after + EM_DASH.len_utf8());
            } else {
                points.push(after);
            }
        }
    }

    points
}
