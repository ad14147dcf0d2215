use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use transcue::cue_encoder::write_subtitles;
use transcue::vtt_encoder::VttEncoder;
use transcue::{
    BoxError, SubtitleOpts, Transcript, TranscriptStore, TranslateOpts, Translator,
    load_transcript,
};

/// Canned English to Chinese lookups for the fixture's sentences.
struct Lookup {
    table: HashMap<&'static str, &'static str>,
    calls: AtomicUsize,
}

impl Lookup {
    fn to_zh() -> Self {
        let table = HashMap::from([
            (
                "The Honorable Charles Smith, Miss Sarah's brother, was walking swiftly uptown from Mr. Easterly's Wall Street office and his face was pale.",
                "查尔斯-史密斯阁下，莎拉小姐的哥哥，正从伊斯特里先生的华尔街办公室快步向市区走来，脸色苍白。",
            ),
            (
                "At last the cotton combine was to all appearances an assured fact and he was slated for the Senate.",
                "终于，棉花联合的事情看起来已经稳妥了，他也被提名为参议员。",
            ),
            (
                "Why should he not be as other men?",
                "他为什么不能像其他人一样呢？",
            ),
            (
                "She was not herself a notably intelligent woman, she greatly admired intelligence or whatever looked to her like intelligence in others.",
                "她自己并不是一个特别聪明的女人，但她非常欣赏别人的聪明才智，或者在她看来像聪明才智的东西。",
            ),
            (
                "So persuasive were her entreaties, and so strong her assurances that no harm whatever could result to them, from the information she sought.",
                "她的恳求如此有说服力，她的保证如此有力，她所寻求的信息不会对他们造成任何伤害。",
            ),
            (
                "They were induced to confess that one summer's night, the same she had mentioned, themselves and another friend being out on a stroll with Rodolfo, they had been concerned in the adduction of a girl whom Rodolfo carried off, whilst the rest of them detained her family, who made a great outcry and would have defended her if they could.",
                "在她的诱导下，他们承认，就在她提到的那个夏夜，他们和另一个朋友与鲁道夫一起出去散步，他们参与了绑架一个女孩，鲁道夫把她带走了，而其他人则拦住了她的家人，她的家人大吵大闹，如果可以的话，他们会保护她的。",
            ),
        ]);
        Self {
            table,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Translator for Lookup {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        target_lang: &str,
    ) -> Result<String, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if target_lang != "zh" {
            return Err(format!("language not supported: {target_lang}").into());
        }
        self.table
            .get(text.trim())
            .map(|s| (*s).to_owned())
            .ok_or_else(|| format!("text not found: {text}").into())
    }
}

fn libri() -> anyhow::Result<Transcript> {
    Ok(load_transcript("tests/fixtures/libri.json")?)
}

/// The fixture with its last sentence stored as a single segment.
fn libri_one_segment_per_sentence() -> anyhow::Result<Transcript> {
    let mut transcript = libri()?;
    let tail = transcript.segments.pop().expect("fixture has segments");
    let last = transcript.segments.last_mut().expect("fixture has segments");
    last.text = format!("{} {}", last.text, tail.text);
    last.end = tail.end;
    last.words.extend(tail.words);
    Ok(transcript)
}

fn by_sentence() -> TranslateOpts {
    TranslateOpts {
        resegment_by_words: true,
        ..TranslateOpts::default()
    }
}

#[tokio::test]
async fn translated_cues_break_at_chinese_punctuation() -> anyhow::Result<()> {
    let store = TranscriptStore::new(libri()?);
    let backend = Lookup::to_zh();

    store.translate(&backend, "zh", &by_sentence(), None).await?;
    assert_eq!(backend.calls.load(Ordering::SeqCst), 6);
    assert_eq!(store.available_langs().await, vec!["zh", "en"]);

    let subs = store
        .subtitles(
            "from libri",
            &[SubtitleOpts::new("zh").with_line_break(true)],
            false,
        )
        .await?;

    let n = subs.cues.len();
    assert_eq!(subs.cues[n - 2].text(), "她的家人大吵大闹，如果可以的话，");
    assert_eq!(subs.cues[n - 1].text(), "他们会保护她的。");
    Ok(())
}

#[tokio::test]
async fn plain_translation_of_whole_sentences() -> anyhow::Result<()> {
    let store = TranscriptStore::new(libri_one_segment_per_sentence()?);
    let backend = Lookup::to_zh();

    store
        .translate(&backend, "zh", &TranslateOpts::default(), None)
        .await?;
    assert_eq!(backend.calls.load(Ordering::SeqCst), 6);

    let subs = store
        .subtitles(
            "from libri",
            &[SubtitleOpts::new("zh").with_line_break(true)],
            false,
        )
        .await?;

    let n = subs.cues.len();
    assert_eq!(subs.cues[n - 2].text(), "她的家人大吵大闹，如果可以的话，");
    assert_eq!(subs.cues[n - 1].text(), "他们会保护她的。");
    Ok(())
}

#[tokio::test]
async fn same_language_translation_leaves_transcript_alone() -> anyhow::Result<()> {
    let store = TranscriptStore::new(libri()?);
    let before = store.segments().await;
    let backend = Lookup::to_zh();

    store.translate(&backend, "en", &by_sentence(), None).await?;

    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.segments().await, before);
    assert_eq!(store.available_langs().await, vec!["en"]);
    Ok(())
}

#[tokio::test]
async fn unresegmented_halves_fail_on_the_first_unknown_text() -> anyhow::Result<()> {
    let store = TranscriptStore::new(libri()?);
    let backend = Lookup::to_zh();
    let mut seen = Vec::new();
    let mut record = |done: usize, total: usize| seen.push((done, total));

    let err = store
        .translate(&backend, "zh", &TranslateOpts::default(), Some(&mut record))
        .await
        .unwrap_err();

    // The last sentence is stored in two halves and neither is in the table.
    assert!(matches!(err, transcue::Error::Translation { index: 5, .. }));
    assert_eq!(seen.len(), 5);
    assert_eq!(seen.last(), Some(&(5, 7)));

    let transcript = store.into_inner();
    assert!(transcript.segments[4].translations.contains_key("zh"));
    assert!(transcript.segments[5].translations.is_empty());
    Ok(())
}

#[tokio::test]
async fn bilingual_document_orders_tracks_by_request() -> anyhow::Result<()> {
    let store = TranscriptStore::new(libri()?);
    store
        .translate(&Lookup::to_zh(), "zh", &by_sentence(), None)
        .await?;

    let secondary = SubtitleOpts {
        layer: 1,
        style: Some(transcue::Style::secondary().clone()),
        ..SubtitleOpts::new("en")
    };
    let subs = store
        .subtitles("from libri", &[SubtitleOpts::new("zh"), secondary], true)
        .await?;

    assert_eq!(subs.cues.len(), 12);
    assert!(subs.cues[..6].iter().all(|c| c.style == "Default"));
    assert!(subs.cues[6..].iter().all(|c| c.style == "Secondary" && c.layer == 1));
    assert_eq!(subs.styles.len(), 2);
    assert_eq!(subs.cues[2].text(), "他为什么不能像其他人一样呢？");
    Ok(())
}

#[tokio::test]
async fn bilingual_vtt_is_in_time_order() -> anyhow::Result<()> {
    let store = TranscriptStore::new(libri_one_segment_per_sentence()?);
    store
        .translate(&Lookup::to_zh(), "zh", &TranslateOpts::default(), None)
        .await?;

    let mut subs = store
        .subtitles(
            "from libri",
            &[SubtitleOpts::new("zh"), SubtitleOpts::new("en")],
            false,
        )
        .await?;
    subs.sort_by_start();

    let mut out = Vec::new();
    write_subtitles(&mut VttEncoder::new(&mut out), &subs)?;
    let vtt = String::from_utf8(out)?;

    let starts: Vec<&str> = vtt
        .lines()
        .filter_map(|line| line.split_once(" --> ").map(|(start, _)| start))
        .collect();
    assert_eq!(starts.len(), 12);
    assert!(starts.windows(2).all(|pair| pair[0] <= pair[1]), "{starts:?}");
    assert!(vtt.contains("00:00:00.520 --> 00:00:08.170\n查尔斯-史密斯阁下"));
    Ok(())
}
