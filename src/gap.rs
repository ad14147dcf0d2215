//! Smoothing the silences between consecutive cues.

use std::time::Duration;

use crate::cue::Cue;

/// Gaps up to this long are closed completely.
const CLOSE_GAP: Duration = Duration::from_millis(500);

/// Gaps up to this long are bridged by pulling the next cue earlier.
const BRIDGE_GAP: Duration = Duration::from_millis(1800);

/// How much earlier the next cue starts for gaps longer than [`CLOSE_GAP`].
const LEAD_IN: Duration = Duration::from_millis(300);

/// How long the previous cue lingers into a gap longer than [`BRIDGE_GAP`].
const LINGER: Duration = Duration::from_millis(1500);

/// Adjust cue timing so short pauses don't flicker and long ones don't cut off abruptly.
///
/// Cues must be sorted by start time. Applying this twice moves cues again.
pub fn optimize_gaps(cues: &mut [Cue]) {
    for i in 1..cues.len() {
        let (head, tail) = cues.split_at_mut(i);
        let prev = &mut head[i - 1];
        let cur = &mut tail[0];

        if cur.start == prev.end {
            continue;
        }
        if cur.start < prev.end {
            // Overlap counts as a short gap: trim the previous cue back.
            prev.end = cur.start.max(prev.start);
            continue;
        }

        let gap = cur.start - prev.end;
        if gap <= CLOSE_GAP {
            prev.end = cur.start;
        } else if gap <= BRIDGE_GAP {
            cur.start = cur.start.saturating_sub(LEAD_IN);
            prev.end = cur.start;
        } else {
            cur.start = cur.start.saturating_sub(LEAD_IN);
            prev.end += LINGER;
        }
    }
}
