//! Output formats for the guide page
//!
//! - `html`: standalone document with embedded CSS
//! - `markdown`: same section order, citations as in-page links
//! - `json`: serialized catalog

pub mod html;
pub mod json;
pub mod markdown;
pub mod style;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;

use crate::config::GeneralConfig;
use crate::core::data::Catalog;
use crate::core::traits::PageRenderer;
use crate::utils::error::AppResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Html,
    Markdown,
    Json,
}

impl Format {
    /// File extension used when writing this format
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "md",
            Format::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Html => "text/html; charset=utf-8",
            Format::Markdown => "text/markdown; charset=utf-8",
            Format::Json => "application/json",
        }
    }
}

/// Document-level settings that are not part of the content tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub lang: String,
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: "Spengergasse department guide".to_string(),
        }
    }
}

impl From<&GeneralConfig> for RenderOptions {
    fn from(general: &GeneralConfig) -> Self {
        Self {
            lang: general.lang.clone(),
            title: general.title.clone(),
        }
    }
}

/// Render the whole catalog in the requested format
pub fn render_document(catalog: &Catalog, format: Format, options: &RenderOptions) -> AppResult<String> {
    let document = match format {
        Format::Html => HtmlRenderer::new(options.clone()).page(catalog),
        Format::Markdown => MarkdownRenderer.page(catalog),
        Format::Json => json::render(catalog, options)?,
    };
    debug!(?format, bytes = document.len(), "rendered document");
    Ok(document)
}
