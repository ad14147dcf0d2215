use anyhow::{Context, Result};
use clap::Parser;

use std::io::{self, BufWriter};

use transcue::cue_encoder::{CueEncoder, write_subtitles};
use transcue::json_array_encoder::JsonArrayEncoder;
use transcue::vtt_encoder::VttEncoder;
use transcue::{
    MergeOpts, OutputType, ResegmentOpts, Style, SubtitleOpts, TranscriptStore, load_transcript,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    transcue::init_logging();
    let params = get_params()?;

    let transcript = load_transcript(&params.transcript_path)
        .with_context(|| format!("failed to load transcript from '{}'", params.transcript_path))?;
    let store = TranscriptStore::new(transcript);

    if params.resegment_by_words {
        store
            .resegment_by_words(&ResegmentOpts::default())
            .await
            .context("failed to resegment by words")?;
    }

    if params.merge {
        store
            .merge_segments(&MergeOpts {
                max_width: params.max_width,
                ..MergeOpts::default()
            })
            .await;
    }

    let langs = subtitle_opts(&params, store.available_langs().await);
    let mut subs = store
        .subtitles(&params.title, &langs, params.optimize)
        .await
        .context("failed to build subtitles")?;
    if params.output_type == OutputType::Vtt {
        // WebVTT cues must not start earlier than the cue before them.
        subs.sort_by_start();
    }

    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());

    let mut encoder: Box<dyn CueEncoder> = match params.output_type {
        OutputType::Json => Box::new(JsonArrayEncoder::new(writer)),
        OutputType::Vtt => Box::new(VttEncoder::new(writer)),
    };

    write_subtitles(&mut *encoder, &subs)?;
    Ok(())
}

/// One option per requested language; the second and later ones use the secondary style
/// on their own layer, for bilingual output.
fn subtitle_opts(params: &Params, available: Vec<String>) -> Vec<SubtitleOpts> {
    let requested = if params.langs.is_empty() {
        // The source language is always last.
        available.into_iter().last().into_iter().collect()
    } else {
        params.langs.clone()
    };

    requested
        .into_iter()
        .enumerate()
        .map(|(i, lang)| SubtitleOpts {
            line_break: params.line_break,
            max_width: params.max_width,
            layer: i as i32,
            style: (i > 0).then(|| Style::secondary().clone()),
            ..SubtitleOpts::new(lang)
        })
        .collect()
}

#[derive(Parser, Debug)]
#[command(name = "transcue")]
#[command(about = "Turn a whisperX transcript into subtitles")]
struct Params {
    /// Path to a whisperX JSON transcript.
    #[arg(short = 'i', long = "input")]
    pub transcript_path: String,

    /// Language(s) to render, in order. Defaults to the source language.
    #[arg(short = 'l', long = "lang")]
    pub langs: Vec<String>,

    #[arg(
        short = 'o',
        long = "output-type",
        value_enum,
        default_value_t = OutputType::Vtt
    )]
    pub output_type: OutputType,

    /// Document title passed through to the renderer.
    #[arg(long = "title", default_value = "")]
    pub title: String,

    /// Wrap long segments at punctuation into several cues.
    #[arg(long = "line-break", default_value_t = false)]
    pub line_break: bool,

    /// Display width budget for line breaking and merging.
    #[arg(long = "max-width")]
    pub max_width: Option<usize>,

    /// Rebuild segments from word timings before rendering.
    #[arg(long = "resegment", default_value_t = false)]
    pub resegment_by_words: bool,

    /// Merge short neighboring segments before rendering.
    #[arg(long = "merge", default_value_t = false)]
    pub merge: bool,

    /// Smooth the gaps between consecutive cues.
    #[arg(long = "optimize", default_value_t = false)]
    pub optimize: bool,
}

fn get_params() -> Result<Params> {
    Ok(Params::parse())
}
