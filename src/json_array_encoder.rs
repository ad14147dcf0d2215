use std::io::Write;

use serde::Serialize;

use crate::Result;
use crate::cue::Cue;
use crate::cue_encoder::CueEncoder;

/// A `CueEncoder` that writes cues as a single JSON array.
///
/// Design:
/// - We stream output directly to a `Write` implementation to avoid buffering
///   all cues in memory.
/// - The encoder is stateful so we can emit a well-formed JSON array incrementally.
///
/// Example output:
/// ```json
/// [
///   { "start": 0.0, "end": 1.2, "lines": ["hello"], "style": "Default", "layer": 0 },
///   { "start": 1.2, "end": 2.5, "lines": ["world"], "style": "Default", "layer": 0 }
/// ]
/// ```
pub struct JsonArrayEncoder<W: Write> {
    /// The underlying writer we stream JSON into.
    w: W,

    /// Whether we have written the opening `[` of the JSON array.
    started: bool,

    /// Whether the next element will be the first element in the array.
    /// This lets us correctly place commas between elements.
    first: bool,

    /// Whether the encoder has been closed.
    /// Once closed, no further writes are allowed.
    closed: bool,
}

/// Wire shape of one cue: times in seconds rather than `Duration`'s secs/nanos pair.
#[derive(Serialize)]
struct JsonCue<'a> {
    start: f64,
    end: f64,
    lines: &'a [String],
    style: &'a str,
    layer: i32,
}

impl<'a> From<&'a Cue> for JsonCue<'a> {
    fn from(cue: &'a Cue) -> Self {
        Self {
            start: cue.start.as_secs_f64(),
            end: cue.end.as_secs_f64(),
            lines: &cue.lines,
            style: &cue.style,
            layer: cue.layer,
        }
    }
}

impl<W: Write> JsonArrayEncoder<W> {
    /// Create a new JSON array encoder that writes to the given writer.
    ///
    /// The JSON array is opened lazily on the first write or on close.
    pub fn new(w: W) -> Self {
        Self {
            w,
            started: false,
            first: true,
            closed: false,
        }
    }

    /// Write the opening `[` of the JSON array if we have not already done so.
    ///
    /// Deferring it means empty output is still valid JSON (`[]`).
    fn start_if_needed(&mut self) -> Result<()> {
        if !self.started {
            self.w.write_all(b"[")?;
            self.started = true;
        }
        Ok(())
    }
}

impl<W: Write> CueEncoder for JsonArrayEncoder<W> {
    /// Serialize a single cue and append it to the JSON array.
    fn write_cue(&mut self, cue: &Cue) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write cue: encoder is already closed",
            ));
        }

        self.start_if_needed()?;

        if !self.first {
            self.w.write_all(b",")?;
        }
        self.first = false;

        serde_json::to_writer(&mut self.w, &JsonCue::from(cue))?;

        // Flush so streaming consumers (stdout, pipes, sockets) see output promptly.
        self.w.flush()?;

        Ok(())
    }

    /// Finalize the JSON array and flush the underlying writer.
    ///
    /// Calling `close()` multiple times is safe; after closing, no further cues may be written.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.start_if_needed()?;

        self.w.write_all(b"]")?;
        self.w.flush()?;

        self.closed = true;
        Ok(())
    }
}
