//! Batch jobs: JSON in, JSON out
//!
//! Each input line describes one image, the way a saved template would.
//! Everything except `text` is optional. Each processed job yields one
//! [`JobResult`] line on stdout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use overlay::prelude::{
    Anchor, Background, CanvasSpec, Color, FontVariant, LayoutMode, LayoutSummary, OverlayError,
    Result, StyleSpec,
};

/// One image to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchJob {
    /// How to identify this job in the results (defaults to its number)
    #[serde(default)]
    pub id: Option<String>,
    /// What to draw; line breaks are kept
    pub text: String,
    /// Output file name, relative to the output directory
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_margin")]
    pub margin: u32,
    /// Position keyword; omitted means fit to width
    #[serde(default)]
    pub position: Option<String>,
    /// Text color name or hex
    #[serde(default)]
    pub color: Option<String>,
    /// `transparent`, a color, or `image:<path>`
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
    /// Font file for this job only, drawing the job's variant
    #[serde(default)]
    pub font: Option<PathBuf>,
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    675
}

fn default_margin() -> u32 {
    60
}

impl BatchJob {
    pub fn canvas(&self) -> Result<CanvasSpec> {
        let background = match &self.background {
            Some(spec) => spec.parse()?,
            None => Background::Transparent,
        };
        if self.width == 0 || self.height == 0 {
            return Err(OverlayError::ConfigError(format!(
                "canvas must not be empty ({}x{})",
                self.width, self.height
            )));
        }
        Ok(CanvasSpec::new(self.width, self.height, self.margin).with_background(background))
    }

    pub fn style(&self) -> Result<StyleSpec> {
        let color: Color = match &self.color {
            Some(color) => color.parse()?,
            None => Color::white(),
        };
        let variant: FontVariant = match &self.variant {
            Some(variant) => variant.parse()?,
            None => FontVariant::Regular,
        };
        let mode = match &self.position {
            Some(position) => LayoutMode::Fixed(position.parse::<Anchor>()?),
            None => LayoutMode::FitToWidth,
        };
        Ok(StyleSpec {
            color,
            variant,
            mode,
        })
    }
}

/// What came out of one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    /// Matches the input job id
    pub id: String,
    /// `ok` or `error`
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    /// Top-left of the text block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<[i32; 2]>,
    /// Variant that actually drew the text, after any fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobResult {
    pub fn success(
        id: impl Into<String>,
        output: &std::path::Path,
        summary: &LayoutSummary,
        variant: FontVariant,
    ) -> Self {
        Self {
            id: id.into(),
            status: "ok".to_string(),
            output: Some(output.display().to_string()),
            font_size: Some(summary.font_size),
            lines: Some(summary.line_count),
            position: Some([summary.position.x, summary.position.y]),
            variant: Some(variant.to_string()),
            error: None,
        }
    }

    /// Create error result for a failed job
    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: "error".to_string(),
            output: None,
            font_size: None,
            lines: None,
            position: None,
            variant: None,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
