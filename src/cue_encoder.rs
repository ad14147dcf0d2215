use crate::Result;
use crate::cue::Cue;
use crate::subtitles::Subtitles;

/// A sink that receives cues one at a time, in order.
pub trait CueEncoder {
    fn write_cue(&mut self, cue: &Cue) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

/// Stream every cue of `subs` into `encoder`, then close it.
///
/// The close error is still reported when writing failed first, chained after it.
pub fn write_subtitles(encoder: &mut dyn CueEncoder, subs: &Subtitles) -> Result<()> {
    let run_res = subs.cues.iter().try_for_each(|cue| encoder.write_cue(cue));
    match (run_res, encoder.close()) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(close_err)) => Err(close_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => Err(crate::Error::msg(format!(
            "{err}; additionally failed to close encoder: {close_err}"
        ))),
    }
}
