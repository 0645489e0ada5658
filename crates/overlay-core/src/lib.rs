//! Overlay Core: the vocabulary shared by every stage
//!
//! Text goes in, a stroked caption on a canvas comes out. The stages
//! in between all speak the types defined here:
//!
//! 1. **Preprocessing** - Raw lines become display-ready [`types::ShapedLine`]s
//! 2. **Layout** - Lines are wrapped and sized into a [`types::FittedLayout`]
//! 3. **Placement** - The block is anchored into a [`types::PositionedLayout`]
//! 4. **Rendering** - Each line is drawn with a contrasting stroke
//! 5. **Export** - The canvas becomes a PNG
//!
//! Style and canvas descriptions ([`StyleSpec`], [`CanvasSpec`]) are plain
//! values so the layout engine never learns about widgets or files.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub mod error;
pub mod traits;

pub use error::{OverlayError, Result};
pub use traits::{Exporter, FontRef};

/// The data structures that flow between stages
pub mod types {
    /// Unique identifier for a glyph within a font
    pub type GlyphId = u32;

    /// Ordered logical lines captured from user input
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct TextBlock {
        lines: Vec<String>,
    }

    impl TextBlock {
        /// Split on explicit line breaks (`\n` or `\r\n`)
        pub fn from_text(text: &str) -> Self {
            Self {
                lines: text.lines().map(str::to_string).collect(),
            }
        }

        pub fn lines(&self) -> &[String] {
            &self.lines
        }

        pub fn is_empty(&self) -> bool {
            self.lines.iter().all(|line| line.trim().is_empty())
        }
    }

    /// One line in visual order, ready to be measured and drawn
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct ShapedLine {
        text: String,
    }

    impl ShapedLine {
        pub fn new(text: impl Into<String>) -> Self {
            Self { text: text.into() }
        }

        pub fn as_str(&self) -> &str {
            &self.text
        }

        /// Whitespace-delimited tokens; each one is unbreakable
        pub fn tokens(&self) -> impl Iterator<Item = &str> {
            self.text.split_whitespace()
        }

        pub fn is_blank(&self) -> bool {
            self.text.trim().is_empty()
        }
    }

    impl From<&str> for ShapedLine {
        fn from(text: &str) -> Self {
            Self::new(text)
        }
    }

    /// A wrapped line together with its size at the layout's font size
    #[derive(Debug, Clone, PartialEq)]
    pub struct MeasuredLine {
        pub line: ShapedLine,
        pub width: f32,
        pub height: f32,
    }

    /// Font size, wrapped lines, and the block they occupy
    #[derive(Debug, Clone, PartialEq)]
    pub struct FittedLayout {
        pub font_size: f32,
        pub lines: Vec<MeasuredLine>,
        /// Widest line
        pub width: f32,
        /// Sum of every line's own height
        pub height: f32,
    }

    impl FittedLayout {
        pub fn new(font_size: f32, lines: Vec<MeasuredLine>) -> Self {
            let width = lines.iter().map(|l| l.width).fold(0.0, f32::max);
            let height = lines.iter().map(|l| l.height).sum();
            Self {
                font_size,
                lines,
                width,
                height,
            }
        }

        pub fn is_empty(&self) -> bool {
            self.lines.is_empty()
        }
    }

    /// Top-left pixel coordinate; may be negative when text overflows
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Position {
        pub x: i32,
        pub y: i32,
    }

    impl Position {
        pub const fn new(x: i32, y: i32) -> Self {
            Self { x, y }
        }
    }

    /// A line with its final drawing origin (top of the line box)
    #[derive(Debug, Clone, PartialEq)]
    pub struct PlacedLine {
        pub line: ShapedLine,
        pub position: Position,
        pub width: f32,
        pub height: f32,
    }

    /// Everything the renderer needs to draw a block
    #[derive(Debug, Clone, PartialEq)]
    pub struct PositionedLayout {
        pub font_size: f32,
        /// Top-left of the whole block
        pub origin: Position,
        pub width: f32,
        pub height: f32,
        pub lines: Vec<PlacedLine>,
    }

    impl PositionedLayout {
        pub fn is_empty(&self) -> bool {
            self.lines.is_empty()
        }
    }

    /// Raw pixel data leaving the renderer
    #[derive(Debug, Clone)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub format: BitmapFormat,
        pub data: Vec<u8>,
    }

    /// How pixels are arranged in the bitmap
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BitmapFormat {
        Rgba8,
        Rgb8,
    }
}

/// Simple RGBA color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Text colors offered to users, in menu order
pub const TEXT_COLORS: [(&str, Color); 8] = [
    ("White", Color::white()),
    ("Black", Color::black()),
    ("Red", Color::rgb(255, 0, 0)),
    ("Blue", Color::rgb(0, 0, 255)),
    ("Green", Color::rgb(0, 128, 0)),
    ("Yellow", Color::rgb(255, 255, 0)),
    ("Orange", Color::rgb(255, 165, 0)),
    ("Purple", Color::rgb(128, 0, 128)),
];

/// Solid background colors offered to users, in menu order
pub const BACKGROUND_COLORS: [(&str, Color); 5] = [
    ("White", Color::white()),
    ("Black", Color::black()),
    ("Gray", Color::rgb(128, 128, 128)),
    ("Light Blue", Color::rgb(173, 216, 230)),
    ("Light Green", Color::rgb(144, 238, 144)),
];

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    pub const fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Outline color for a fill: white around black, black around anything else
    pub const fn stroke_contrast(&self) -> Self {
        if self.is_black() {
            Self::white()
        } else {
            Self::black()
        }
    }

    /// Look up a menu color by name, ignoring case, spaces, `-` and `_`
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        TEXT_COLORS
            .iter()
            .chain(BACKGROUND_COLORS.iter())
            .find(|(label, _)| normalize_name(label) == wanted)
            .map(|(_, color)| *color)
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl FromStr for Color {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
            .or_else(|| Self::from_hex(s))
            .ok_or_else(|| OverlayError::ConfigError(format!("unknown color '{}'", s)))
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Horizontal rule of an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical rule of an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// One of the nine grid placements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub vertical: VAlign,
    pub horizontal: HAlign,
}

impl Anchor {
    pub const CENTER: Anchor = Anchor::new(VAlign::Middle, HAlign::Center);

    /// Every keyword with its anchor, in menu order
    pub const ALL: [(&'static str, Anchor); 9] = [
        ("Top Left", Anchor::new(VAlign::Top, HAlign::Left)),
        ("Top Center", Anchor::new(VAlign::Top, HAlign::Center)),
        ("Top Right", Anchor::new(VAlign::Top, HAlign::Right)),
        ("Middle Left", Anchor::new(VAlign::Middle, HAlign::Left)),
        ("Center", Anchor::CENTER),
        ("Middle Right", Anchor::new(VAlign::Middle, HAlign::Right)),
        ("Bottom Left", Anchor::new(VAlign::Bottom, HAlign::Left)),
        ("Bottom Center", Anchor::new(VAlign::Bottom, HAlign::Center)),
        ("Bottom Right", Anchor::new(VAlign::Bottom, HAlign::Right)),
    ];

    pub const fn new(vertical: VAlign, horizontal: HAlign) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub fn keyword(&self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(_, anchor)| anchor == self)
            .map(|(keyword, _)| *keyword)
            .unwrap_or("Center")
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::CENTER
    }
}

impl FromStr for Anchor {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_name(s);
        if wanted == "middlecenter" {
            return Ok(Self::CENTER);
        }
        Self::ALL
            .iter()
            .find(|(keyword, _)| normalize_name(keyword) == wanted)
            .map(|(_, anchor)| *anchor)
            .ok_or_else(|| OverlayError::ConfigError(format!("unknown position '{}'", s)))
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Which face of the family draws the text
///
/// Exactly one variant is active at a time; combining style switches is
/// resolved by whoever builds the [`StyleSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontVariant {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
    /// Decorative face used for Quranic text
    Special,
}

impl FontVariant {
    pub const ALL: [FontVariant; 5] = [
        FontVariant::Regular,
        FontVariant::Bold,
        FontVariant::Italic,
        FontVariant::BoldItalic,
        FontVariant::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold-italic",
            Self::Special => "special",
        }
    }
}

impl FromStr for FontVariant {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "regular" => Ok(Self::Regular),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "bolditalic" => Ok(Self::BoldItalic),
            "special" | "quran" => Ok(Self::Special),
            _ => Err(OverlayError::ConfigError(format!(
                "unknown font variant '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for FontVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the text block is sized and placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Largest size whose wrapped text fits the margin box, centered
    FitToWidth,
    /// Height-derived size at a grid anchor
    Fixed(Anchor),
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::FitToWidth
    }
}

/// How the text should look
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSpec {
    pub color: Color,
    pub variant: FontVariant,
    pub mode: LayoutMode,
}

impl StyleSpec {
    /// Outline color, always the opposite polarity of the fill
    pub fn stroke_color(&self) -> Color {
        self.color.stroke_contrast()
    }
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            color: Color::white(),
            variant: FontVariant::Regular,
            mode: LayoutMode::FitToWidth,
        }
    }
}

/// What the canvas starts out as
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Transparent,
    Solid(Color),
    /// An existing image, resized to the canvas dimensions
    Image(PathBuf),
}

impl FromStr for Background {
    type Err = OverlayError;

    /// `transparent`, `image:<path>`, or any color accepted by [`Color`]
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }
        if let Some(path) = trimmed.strip_prefix("image:") {
            if path.is_empty() {
                return Err(OverlayError::ConfigError(
                    "image background needs a path".to_string(),
                ));
            }
            return Ok(Self::Image(PathBuf::from(path)));
        }
        trimmed.parse().map(Self::Solid)
    }
}

/// Channel layout of the finished image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgba,
    Rgb,
}

/// Target canvas: size, margin, and starting pixels
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub background: Background,
}

impl CanvasSpec {
    pub fn new(width: u32, height: u32, margin: u32) -> Self {
        Self {
            width,
            height,
            margin,
            background: Background::Transparent,
        }
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Only a transparent canvas keeps its alpha channel
    pub fn color_mode(&self) -> ColorMode {
        match self.background {
            Background::Transparent => ColorMode::Rgba,
            Background::Solid(_) | Background::Image(_) => ColorMode::Rgb,
        }
    }

    /// Width available to text once both side margins are removed
    pub fn content_width(&self) -> f32 {
        self.width as f32 - 2.0 * self.margin as f32
    }

    /// Height available to text once top and bottom margins are removed
    pub fn content_height(&self) -> f32 {
        self.height as f32 - 2.0 * self.margin as f32
    }
}
