//! Style and document metadata handed through to the subtitle renderer.
//!
//! These values are never interpreted here; cues only reference a style by id.
//! The presets are built once and shared as `&'static` references.

use std::sync::OnceLock;

use serde::Serialize;

/// An RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 0,
        }
    }
}

/// A named style (SSA/ASS attribute set).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    pub id: String,
    pub font_name: String,
    pub font_size: f64,
    pub primary_colour: Color,
    pub secondary_colour: Color,
    pub outline_colour: Color,
    pub back_colour: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
    pub scale_x: f64,
    pub scale_y: f64,
    pub angle: f64,
    pub shadow: f64,
    pub spacing: f64,
    pub border_style: i32,
    pub outline: f64,
    pub alignment: i32,
    pub margin_left: i32,
    pub margin_right: i32,
    pub margin_vertical: i32,
    pub encoding: i32,
}

impl Style {
    /// Default style for the main language: 20pt yellow Arial, bottom centered.
    pub fn primary() -> &'static Style {
        static STYLE: OnceLock<Style> = OnceLock::new();
        STYLE.get_or_init(|| Style {
            id: "Default".to_owned(),
            font_size: 20.0,
            primary_colour: Color::rgb(255, 252, 3),
            spacing: 1.0,
            ..base_style()
        })
    }

    /// Style for the second language of a bilingual export: smaller white text.
    pub fn secondary() -> &'static Style {
        static STYLE: OnceLock<Style> = OnceLock::new();
        STYLE.get_or_init(|| Style {
            id: "Secondary".to_owned(),
            font_size: 12.0,
            primary_colour: Color::WHITE,
            spacing: 0.0,
            ..base_style()
        })
    }
}

fn base_style() -> Style {
    Style {
        id: String::new(),
        font_name: "Arial".to_owned(),
        font_size: 20.0,
        primary_colour: Color::WHITE,
        secondary_colour: Color::BLACK,
        outline_colour: Color::BLACK,
        back_colour: Color::BLACK,
        bold: false,
        italic: false,
        underline: false,
        strikeout: false,
        scale_x: 100.0,
        scale_y: 100.0,
        angle: 0.0,
        shadow: 0.0,
        spacing: 0.0,
        border_style: 1,
        outline: 0.5,
        alignment: 2,
        margin_left: 80,
        margin_right: 80,
        margin_vertical: 16,
        encoding: 1,
    }
}

/// Document-level settings for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub play_res_x: u32,
    pub play_res_y: u32,
    pub collisions: String,
    pub wrap_style: String,
    pub script_type: String,
}

impl Metadata {
    /// 16:9 canvas at 640x360; margins in the style presets are sized for it.
    pub fn ssa_default() -> &'static Metadata {
        static METADATA: OnceLock<Metadata> = OnceLock::new();
        METADATA.get_or_init(|| Metadata {
            title: String::new(),
            play_res_x: 640,
            play_res_y: 360,
            collisions: "Reverse".to_owned(),
            wrap_style: "0".to_owned(),
            script_type: "v4.00+".to_owned(),
        })
    }

    pub fn with_title(&self, title: impl Into<String>) -> Metadata {
        Metadata {
            title: title.into(),
            ..self.clone()
        }
    }
}
