//! CLI argument definitions using Clap v4

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use overlay::prelude::{Anchor, Background, Color, FontVariant, LayoutMode, OverlayError};

/// Overlay - auto-fitted, outlined text on images
#[derive(Parser, Debug)]
#[command(name = "overlay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug logging (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List colors, positions, font variants and fit settings
    #[command(alias = "i")]
    Info(InfoArgs),

    /// Draw text onto one image
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// Render every job of a JSONL file
    Batch(BatchArgs),
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// List text and background colors
    #[arg(long)]
    pub colors: bool,

    /// List position keywords
    #[arg(long)]
    pub positions: bool,

    /// List font variants
    #[arg(long)]
    pub variants: bool,
}

/// Font file for each variant
#[derive(Args, Debug, Clone, Default)]
pub struct FontArgs {
    /// Regular font (.ttf, .otf); defaults to a system font
    #[arg(short = 'f', long = "font")]
    pub font: Option<PathBuf>,

    /// Bold font
    #[arg(long = "font-bold")]
    pub font_bold: Option<PathBuf>,

    /// Italic font
    #[arg(long = "font-italic")]
    pub font_italic: Option<PathBuf>,

    /// Bold italic font
    #[arg(long = "font-bold-italic")]
    pub font_bold_italic: Option<PathBuf>,

    /// Decorative font used by the `special` variant
    #[arg(long = "font-special")]
    pub font_special: Option<PathBuf>,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Text to draw (reads --text-file or stdin if omitted)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text")]
    pub text_file: Option<PathBuf>,

    #[command(flatten)]
    pub fonts: FontArgs,

    /// Font variant: regular, bold, italic, bold-italic, special
    #[arg(long = "variant", default_value = "regular")]
    pub variant: FontVariant,

    /// Canvas size as <width>x<height>
    #[arg(short = 's', long = "size", default_value = "1200x675")]
    pub size: CanvasSize,

    /// Margin on every side, in pixels
    #[arg(short = 'm', long = "margin", default_value = "60")]
    pub margin: u32,

    /// Largest font size whose wrapped text fits, centered (the default)
    #[arg(long = "fit", conflicts_with = "position")]
    pub fit: bool,

    /// Fixed size at a grid position, e.g. "Bottom Left"
    #[arg(short = 'p', long = "position")]
    pub position: Option<Anchor>,

    /// Text color: a name from `overlay info` or RRGGBB[AA]
    #[arg(short = 'c', long = "color", default_value = "white")]
    pub color: Color,

    /// transparent, a color, or image:<path>
    #[arg(short = 'b', long = "background", default_value = "transparent")]
    pub background: Background,

    /// Output PNG file
    #[arg(short = 'o', long = "output", default_value = "overlay.png")]
    pub output: PathBuf,
}

impl RenderArgs {
    pub fn mode(&self) -> LayoutMode {
        match self.position {
            Some(anchor) if !self.fit => LayoutMode::Fixed(anchor),
            _ => LayoutMode::FitToWidth,
        }
    }
}

/// Arguments for the batch command
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input JSONL file (one job per line); stdin if omitted
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output directory for rendered files
    #[arg(short = 'o', long = "output", default_value = ".")]
    pub output: PathBuf,

    /// Output filename pattern with {} placeholder for the job number
    #[arg(short = 'P', long = "pattern", default_value = "overlay_{}.png")]
    pub pattern: String,

    #[command(flatten)]
    pub fonts: FontArgs,
}

/// Canvas dimensions given as `WIDTHxHEIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for CanvasSize {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OverlayError::ConfigError(format!("size must look like 1200x675, got '{}'", s));
        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: u32 = width.trim().parse().map_err(|_| invalid())?;
        let height: u32 = height.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}
