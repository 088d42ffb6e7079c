//! Chart rendering with pluggable output formats.
//!
//! This module provides:
//! - [`ChartMeta`], the display-only metadata shown with a chart
//! - An HTML renderer (primary) and a JSON snapshot renderer
//! - The [`ChartRenderer`] trait both implement
//!
//! Renderers never modify the grid and perform no validation.

mod html;
mod json;
mod style;

pub use html::render_html;
pub use json::render_json;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locale::Locale;
use crate::types::SeatGrid;

/// Exam details printed in the chart heading. All fields are opaque text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartMeta {
    pub subject: String,
    pub room: String,
    pub date: String,
    pub time: String,
    /// Seed the roster was shuffled with; shown for audit only.
    pub seed: Option<u64>,
}

impl ChartMeta {
    pub(crate) fn seed_text(&self) -> String {
        self.seed
            .map_or_else(|| "None".to_string(), |s| s.to_string())
    }
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    /// File extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

/// Turns a seating plan into a document.
pub trait ChartRenderer {
    /// Render `seats` with `meta` into the complete document text.
    fn render(&self, seats: &SeatGrid, meta: &ChartMeta) -> Result<String>;

    /// Format produced by this renderer.
    fn format(&self) -> OutputFormat;
}

/// HTML table renderer with localized labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    pub locale: Locale,
}

impl ChartRenderer for HtmlRenderer {
    fn render(&self, seats: &SeatGrid, meta: &ChartMeta) -> Result<String> {
        Ok(render_html(seats, meta, self.locale))
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

/// Machine-readable JSON renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ChartRenderer for JsonRenderer {
    fn render(&self, seats: &SeatGrid, meta: &ChartMeta) -> Result<String> {
        render_json(seats, meta)
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Renderer for `format`, boxed for runtime selection.
#[must_use]
pub fn renderer_for(format: OutputFormat, locale: Locale) -> Box<dyn ChartRenderer> {
    match format {
        OutputFormat::Html => Box::new(HtmlRenderer { locale }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
