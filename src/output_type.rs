/// The supported output formats for encoded cues.
///
/// Each variant maps to a concrete `CueEncoder` implementation. With the `cli` feature the
/// enum doubles as a `clap` flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputType {
    /// Output cues as a JSON array.
    Json,

    /// Output cues in WebVTT subtitle format.
    Vtt,
}
