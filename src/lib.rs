//! `transcue` — turn word-timed ASR transcripts into timed, translated subtitle cues.
//!
//! This crate provides:
//! - whisperX transcript decoding
//! - Resegmentation from raw words, merging and splitting of segments
//! - Punctuation-aware line breaking by display width
//! - Cue construction with proportional sub-line timing and gap smoothing
//! - Resumable per-segment translation through a pluggable backend
//! - Pluggable cue encoders (JSON, VTT)
//!
//! Most consumers load a [`Transcript`], wrap it in a [`TranscriptStore`], and call
//! [`TranscriptStore::subtitles`].

// Transcript model and shared access.
pub mod segments;
pub mod store;
pub mod transcript;
pub mod word;

// Reading and writing transcript documents.
pub mod decode;

// Segment rebuilding.
pub mod resegment;
pub mod split;

// Text rules and line wrapping.
pub mod line_break;
pub mod script;

// Cue construction.
pub mod cue;
pub mod gap;
pub mod style;
pub mod subtitles;

// Translation orchestration.
pub mod translate;

// Library-level options.
pub mod opts;

// Output selection and encoder interfaces.
pub mod cue_encoder;
pub mod output_type;

// Output encoders that serialize cues into various formats.
pub mod json_array_encoder;
pub mod vtt_encoder;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

mod error;

pub use cue::Cue;
pub use decode::{load_transcript, read_transcript};
pub use error::{BoxError, Error, Result};
pub use opts::{MergeOpts, ResegmentOpts, SubtitleOpts, TranslateOpts};
pub use output_type::OutputType;
pub use segments::Segment;
pub use store::TranscriptStore;
pub use style::{Color, Metadata, Style};
pub use subtitles::Subtitles;
pub use transcript::Transcript;
pub use translate::Translator;
pub use word::{CharSpan, Word};

#[cfg(feature = "logging")]
pub use logging::init as init_logging;
