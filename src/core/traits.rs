//! Trait definitions for page rendering
//!
//! Each output format implements [`PageRenderer`]; the section order of a
//! full page is fixed by [`PageRenderer::page`].

use crate::core::data::{Catalog, Segment, SourceId};

/// Projects a catalog into one output format
pub trait PageRenderer {
    /// Escape a plain text value for this format
    fn text(&self, value: &str) -> String;

    /// Inline citation marker; empty when the id is not in the source list
    fn citation(&self, catalog: &Catalog, id: SourceId) -> String;

    fn hero(&self, catalog: &Catalog) -> String;

    /// Card for the first recommended department; empty when there is none
    fn recommendation(&self, catalog: &Catalog) -> String;

    /// One card per department, in table order
    fn comparison(&self, catalog: &Catalog) -> String;

    fn tips(&self, catalog: &Catalog) -> String;

    fn sources(&self, catalog: &Catalog) -> String;

    /// Render text segments, resolving embedded citations
    fn rich_text(&self, catalog: &Catalog, segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => self.text(text),
                Segment::Cite(id) => self.citation(catalog, *id),
            })
            .collect()
    }

    /// Page body: hero, recommendation, comparison, tips, sources
    fn body(&self, catalog: &Catalog) -> String {
        [
            self.hero(catalog),
            self.recommendation(catalog),
            self.comparison(catalog),
            self.tips(catalog),
            self.sources(catalog),
        ]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// Complete document
    fn page(&self, catalog: &Catalog) -> String {
        self.body(catalog)
    }
}
