//! spengerguide - renders the HTL Spengergasse department comparison page
//!
//! This library holds the content tables, the citation index and the
//! renderers for HTML, Markdown and JSON, plus the HTTP delivery used by
//! the `serve` command.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod render;
pub mod server;
pub mod utils;

// Re-export core types and traits for easier use
pub use self::core::{
    content::builtin,
    data::{Catalog, Department, RecommendationReason, Segment, Source, SourceId, SourceIndex},
    traits::PageRenderer,
    validate::ContentIssue,
};
pub use render::{render_document, Format, RenderOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library interface for external usage
pub struct Guide {
    catalog: &'static Catalog,
    options: RenderOptions,
}

impl Guide {
    /// Create a guide over the built-in content with the given configuration
    pub fn new(config: &config::Config) -> Self {
        Self {
            catalog: builtin(),
            options: RenderOptions::from(&config.general),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Render the page in the given format
    pub fn render(&self, format: Format) -> utils::AppResult<String> {
        render_document(self.catalog, format, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_renders_builtin_scenario() {
        let guide = Guide::new(&config::Config::default());
        let html = guide.render(Format::Html).unwrap();

        assert!(html.contains("<section class=\"section recommendation\">"));
        assert!(html.contains("<h2>Informatik</h2>"));
        assert_eq!(html.matches("<article class=\"department-card").count(), 4);
        assert_eq!(html.matches("<li id=\"source-").count(), 4);
        assert_eq!(guide.catalog().sources()[0].title, "HTL Spengergasse – Informatik");
    }
}
