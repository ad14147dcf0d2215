//! Assembling a subtitle document from a transcript.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::cue::{Cue, CueLayout};
use crate::gap::optimize_gaps;
use crate::opts::SubtitleOpts;
use crate::script::default_max_width;
use crate::style::{Metadata, Style};
use crate::transcript::Transcript;
use crate::{Error, Result};

/// Ordered cues plus the style table and metadata a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subtitles {
    pub metadata: Metadata,
    /// Styles keyed by id; every cue's `style` is a key here.
    pub styles: BTreeMap<String, Style>,
    pub cues: Vec<Cue>,
}

impl Transcript {
    /// Build the subtitle document for one or more languages.
    ///
    /// Cues are emitted language by language, in the order of `langs`. With `optimize`, gap
    /// smoothing runs over each language's cues separately so one track never bleeds into
    /// another.
    pub fn subtitles(&self, title: &str, langs: &[SubtitleOpts], optimize: bool) -> Result<Subtitles> {
        if let Some(missing) = langs.iter().find(|opts| !self.is_available(&opts.lang)) {
            return Err(Error::LangNotAvailable(missing.lang.clone()));
        }

        let mut styles = BTreeMap::new();
        let mut cues = Vec::new();

        for opts in langs {
            let style = opts.style.as_ref().unwrap_or(Style::primary());
            styles.insert(style.id.clone(), style.clone());

            let layout = CueLayout {
                lang: &opts.lang,
                max_width: opts
                    .line_break
                    .then(|| opts.max_width.unwrap_or_else(|| default_max_width(&opts.lang))),
                style: &style.id,
                layer: opts.layer,
            };

            let first = cues.len();
            for segment in &self.segments {
                cues.extend(segment.cues(&layout));
            }
            if optimize {
                optimize_gaps(&mut cues[first..]);
            }
            debug!(lang = %opts.lang, cues = cues.len() - first, "built cues");
        }

        Ok(Subtitles {
            metadata: Metadata::ssa_default().with_title(title),
            styles,
            cues,
        })
    }
}

impl Subtitles {
    /// Reorder cues by start time, keeping the request order among cues that start together.
    ///
    /// Formats without tracks, such as WebVTT, need cues in time order; the per-cue style and
    /// layer still tell the languages apart.
    pub fn sort_by_start(&mut self) {
        self.cues.sort_by_key(|cue| cue.start);
    }
}
