use std::io::Write;
use std::time::Duration;

use crate::Result;
use crate::cue::Cue;
use crate::cue_encoder::CueEncoder;

/// A `CueEncoder` that writes cues in WebVTT format.
///
/// Design:
/// - We stream output directly to a `Write` implementation.
/// - We write the WebVTT header lazily on the first cue so that:
///   - callers can construct the encoder without immediately writing output
///   - even "no cues" runs still behave predictably (close just flushes)
///
/// Styles and layers are not expressed; WebVTT has no equivalent for them.
pub struct VttEncoder<W: Write> {
    /// The underlying writer we stream VTT into.
    w: W,

    /// Whether we've written the `WEBVTT` header.
    started: bool,

    /// Whether the encoder has been closed.
    closed: bool,
}

impl<W: Write> VttEncoder<W> {
    /// Create a new VTT encoder that writes to the provided writer.
    pub fn new(w: W) -> Self {
        Self {
            w,
            started: false,
            closed: false,
        }
    }

    /// Write the WebVTT header if we haven't written it yet.
    fn start_if_needed(&mut self) -> Result<()> {
        if !self.started {
            // WebVTT files begin with a mandatory header line followed by a blank line.
            self.w.write_all(b"WEBVTT\n\n")?;
            self.started = true;
        }
        Ok(())
    }
}

impl<W: Write> CueEncoder for VttEncoder<W> {
    /// Write a single cue in WebVTT format.
    fn write_cue(&mut self, cue: &Cue) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write cue: encoder is already closed",
            ));
        }

        self.start_if_needed()?;

        let start = format_timestamp_vtt(cue.start);
        let end = format_timestamp_vtt(cue.end);
        writeln!(&mut self.w, "{start} --> {end}")?;

        // A blank line would end the cue early, so lines are trimmed of trailing whitespace
        // and empty ones dropped.
        for line in &cue.lines {
            let line = line.trim_end();
            if !line.is_empty() {
                writeln!(&mut self.w, "{line}")?;
            }
        }

        // Blank line separates cues.
        writeln!(&mut self.w)?;

        // Flush so streaming consumers (stdout, pipes, sockets) see output promptly.
        self.w.flush()?;

        Ok(())
    }

    /// Flush the underlying writer. This is idempotent.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.w.flush()?;
        self.closed = true;

        Ok(())
    }
}

/// Format a cue time as a WebVTT timestamp (`HH:MM:SS.mmm`).
fn format_timestamp_vtt(at: Duration) -> String {
    let total_ms = at.as_millis();

    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;

    let s = total_s % 60;
    let total_m = total_s / 60;

    let m = total_m % 60;
    let h = total_m / 60;

    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}
