//! Reading and writing whisperX transcript documents.
//!
//! Only the whisperX JSON shape is supported for now: a document with `language`,
//! `segments` and `word_segments`, and nothing else.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::transcript::Transcript;
use crate::{Error, Result};

/// Decode a transcript from a reader.
///
/// Fails with [`Error::FormatNotSupported`] on malformed JSON, unknown fields, or a document
/// missing its language, segments or words.
pub fn read_transcript<R: Read>(r: R) -> Result<Transcript> {
    let transcript: Transcript = serde_json::from_reader(r)
        .map_err(|err| Error::FormatNotSupported(err.to_string()))?;

    if transcript.language.is_empty() {
        return Err(Error::FormatNotSupported("missing language".to_owned()));
    }
    if transcript.segments.is_empty() {
        return Err(Error::FormatNotSupported("no segments".to_owned()));
    }
    if transcript.words.is_empty() {
        return Err(Error::FormatNotSupported("no word segments".to_owned()));
    }

    debug!(
        language = %transcript.language,
        segments = transcript.segments.len(),
        words = transcript.words.len(),
        "transcript decoded"
    );
    Ok(transcript)
}

/// Decode a transcript from a file on disk.
pub fn load_transcript(path: impl AsRef<Path>) -> Result<Transcript> {
    let file = File::open(path.as_ref())?;
    read_transcript(BufReader::new(file))
}

impl Transcript {
    /// Serialize back to whisperX JSON, translations included.
    ///
    /// Saving a partially translated transcript and loading it later lets a translation batch
    /// resume where it stopped.
    pub fn write_json<W: Write>(&self, mut w: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, self)?;
        w.flush()?;
        Ok(())
    }
}
