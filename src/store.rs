//! Shared, lock-guarded access to a [`Transcript`].
//!
//! Reads (language listing, cue generation) share the lock. Every mutation holds the
//! exclusive lock for its whole run, so an in-flight translation batch blocks all other
//! readers and writers until it finishes or fails.

use tokio::sync::RwLock;

use crate::opts::{MergeOpts, ResegmentOpts, SubtitleOpts, TranslateOpts};
use crate::segments::Segment;
use crate::subtitles::Subtitles;
use crate::transcript::Transcript;
use crate::translate::{Progress, Translator};
use crate::Result;

/// A transcript behind a single reader/writer lock.
#[derive(Debug)]
pub struct TranscriptStore {
    inner: RwLock<Transcript>,
}

impl TranscriptStore {
    pub fn new(transcript: Transcript) -> Self {
        Self {
            inner: RwLock::new(transcript),
        }
    }

    /// Languages cues can be generated for; the source language is last.
    pub async fn available_langs(&self) -> Vec<String> {
        self.inner.read().await.available_langs()
    }

    /// Build the subtitle document for the requested languages.
    pub async fn subtitles(
        &self,
        title: &str,
        langs: &[SubtitleOpts],
        optimize: bool,
    ) -> Result<Subtitles> {
        self.inner.read().await.subtitles(title, langs, optimize)
    }

    /// A copy of the current segments.
    pub async fn segments(&self) -> Vec<Segment> {
        self.inner.read().await.segments.clone()
    }

    /// See [`Transcript::resegment_by_words`].
    pub async fn resegment_by_words(&self, opts: &ResegmentOpts) -> Result<()> {
        self.inner.write().await.resegment_by_words(opts)
    }

    /// See [`Transcript::merge_segments`].
    pub async fn merge_segments(&self, opts: &MergeOpts) -> Vec<Segment> {
        self.inner.write().await.merge_segments(opts)
    }

    /// See [`Transcript::split_segment`].
    pub async fn split_segment(&self, index: usize) -> Result<()> {
        self.inner.write().await.split_segment(index)
    }

    /// See [`Transcript::translate`]. Holds the exclusive lock until the batch ends.
    pub async fn translate(
        &self,
        translator: &dyn Translator,
        target_lang: &str,
        opts: &TranslateOpts,
        progress: Option<Progress<'_>>,
    ) -> Result<()> {
        let mut transcript = self.inner.write().await;
        transcript
            .translate(translator, target_lang, opts, progress)
            .await
    }

    pub fn into_inner(self) -> Transcript {
        self.inner.into_inner()
    }
}

impl From<Transcript> for TranscriptStore {
    fn from(transcript: Transcript) -> Self {
        Self::new(transcript)
    }
}
