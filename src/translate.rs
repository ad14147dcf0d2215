//! Filling per-segment translations through an external translation capability.

use async_trait::async_trait;
use tracing::{debug, info, trace};

use crate::error::BoxError;
use crate::opts::{ResegmentOpts, TranslateOpts};
use crate::transcript::Transcript;
use crate::{Error, Result};

/// Pluggable text translation backend.
///
/// Calls are issued one at a time, each awaited before the next. Implementations that want
/// throughput must parallelize internally.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_lang` into `target_lang`.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> std::result::Result<String, BoxError>;
}

/// Progress callback receiving `(segment position, total segments)`.
pub type Progress<'a> = &'a mut (dyn FnMut(usize, usize) + Send);

impl Transcript {
    /// Translate every segment into `target_lang`.
    ///
    /// Does nothing when `target_lang` is the source language. Segments that already carry a
    /// translation are skipped unless `opts.override_existing` is set, so an interrupted batch
    /// can be resumed by running it again. The first failing call aborts the batch; every
    /// translation committed before it stays in place.
    ///
    /// `progress`, if given, is called after each newly committed translation.
    pub async fn translate(
        &mut self,
        translator: &dyn Translator,
        target_lang: &str,
        opts: &TranslateOpts,
        mut progress: Option<Progress<'_>>,
    ) -> Result<()> {
        if target_lang == self.language {
            debug!(lang = %target_lang, "target is the source language; nothing to translate");
            return Ok(());
        }

        if opts.resegment_by_words {
            self.resegment_by_words(&ResegmentOpts::default())?;
        }

        let total = self.segments.len();
        info!(
            from = %self.language,
            to = %target_lang,
            segments = total,
            "translation started"
        );

        let mut committed = 0;
        for index in 0..total {
            let segment = &self.segments[index];
            if !opts.override_existing && segment.translations.contains_key(target_lang) {
                trace!(index, "already translated; skipping");
                continue;
            }

            let call = translator.translate(&segment.text, &self.language, target_lang);
            let result = match &opts.cancel {
                Some(token) => tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(Error::Cancelled),
                    res = call => res.map_err(|source| Error::Translation { index, source }),
                },
                None => call
                    .await
                    .map_err(|source| Error::Translation { index, source }),
            };
            let translation = match result {
                Ok(text) => text,
                Err(err) => {
                    info!(committed, index, error = %err, "translation aborted");
                    return Err(err);
                }
            };

            self.segments[index]
                .translations
                .insert(target_lang.to_owned(), translation);
            committed += 1;
            trace!(index, "translation committed");

            if let Some(cb) = progress.as_mut() {
                cb(index + 1, total);
            }
        }

        info!(to = %target_lang, committed, "translation finished");
        Ok(())
    }
}
