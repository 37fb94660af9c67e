use crate::core::data::{Catalog, SourceId};
use crate::core::traits::PageRenderer;
use crate::utils::format::{format_citation_label, source_anchor};

/// Markdown renderer for the guide page
pub struct MarkdownRenderer;

impl PageRenderer for MarkdownRenderer {
    fn text(&self, value: &str) -> String {
        value.to_string()
    }

    fn citation(&self, catalog: &Catalog, id: SourceId) -> String {
        catalog
            .citation_number(id)
            .map(|number| {
                format!(
                    "[{}](#{})",
                    format_citation_label(number),
                    source_anchor(id.as_str())
                )
            })
            .unwrap_or_default()
    }

    fn hero(&self, catalog: &Catalog) -> String {
        let hero = catalog.hero();
        format!("> {}\n\n# {}\n\n{}\n", hero.tag, hero.heading, hero.lead)
    }

    fn recommendation(&self, catalog: &Catalog) -> String {
        let Some(department) = catalog.recommended() else {
            return String::new();
        };
        let copy = catalog.copy();

        let mut md = String::new();
        md.push_str(&format!(
            "## {}: {}\n\n",
            copy.recommendation_badge, department.name
        ));
        md.push_str(&format!(
            "{}{}\n\n",
            department.focus,
            self.citation(catalog, department.id)
        ));
        md.push_str(&format!("### {}\n\n", copy.reasons_heading));
        for reason in catalog.reasons() {
            md.push_str(&format!(
                "- **{}.** {}\n",
                reason.title,
                self.rich_text(catalog, &reason.body)
            ));
        }
        md
    }

    fn comparison(&self, catalog: &Catalog) -> String {
        let copy = catalog.copy();

        let mut md = String::new();
        md.push_str(&format!("## {}\n\n{}\n\n", copy.comparison_heading, copy.comparison_intro));

        for department in catalog.departments() {
            if department.recommended {
                md.push_str(&format!("### {} ({})\n\n", department.name, copy.recommended_flag));
            } else {
                md.push_str(&format!("### {}\n\n", department.name));
            }
            md.push_str(&format!(
                "{}{}\n\n",
                department.focus,
                self.citation(catalog, department.id)
            ));
            md.push_str(&format!("**Best for:** {}\n\n", department.best_for));
            for highlight in &department.highlights {
                md.push_str(&format!("- {}\n", highlight));
            }
            md.push_str(&format!("\n**Keep in mind:** {}\n\n", department.considerations));
        }
        md
    }

    fn tips(&self, catalog: &Catalog) -> String {
        let copy = catalog.copy();

        let mut md = format!("## {}\n\n{}\n\n", copy.tips_heading, copy.tips_intro);
        for (i, tip) in catalog.tips().iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, tip));
        }
        md
    }

    fn sources(&self, catalog: &Catalog) -> String {
        let mut md = format!("## {}\n\n", catalog.copy().sources_heading);
        for (i, source) in catalog.sources().iter().enumerate() {
            md.push_str(&format!(
                "{}. <a id=\"{}\"></a>[{}]({}) – {}\n",
                i + 1,
                source_anchor(source.id.as_str()),
                source.title,
                source.url,
                source.summary
            ));
        }
        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::builtin;

    #[test]
    fn test_markdown_citation() {
        let catalog = builtin();
        assert_eq!(
            MarkdownRenderer.citation(catalog, SourceId::Medizininformatik),
            "[[2]](#source-medizininformatik)"
        );
    }

    #[test]
    fn test_markdown_citation_unlisted_source() {
        let base = builtin();
        let catalog = Catalog::new(
            base.hero().clone(),
            base.copy().clone(),
            Vec::new(),
            base.departments().to_vec(),
            base.reasons().to_vec(),
            base.tips().to_vec(),
        );
        assert_eq!(MarkdownRenderer.citation(&catalog, SourceId::Informatik), "");
        assert!(!MarkdownRenderer.page(&catalog).contains("(#source-"));
    }

    #[test]
    fn test_markdown_page_structure() {
        let md = MarkdownRenderer.page(builtin());

        assert!(md.starts_with("> Spengergasse guidance\n\n# Best department"));
        assert!(md.contains("## Top match: Informatik\n"));
        assert!(md.contains("- **Breadth that rewards an all-rounder.** Informatik keeps"));
        assert!(md.contains("### Informatik (Recommended)\n"));
        assert!(md.contains("### Technisches Management & Umwelt\n"));
        assert!(md.contains("1. Attend the school's InfoTag"));
        assert!(md.contains(
            "1. <a id=\"source-informatik\"></a>[HTL Spengergasse – Informatik](https://www.spengergasse.at/?page_id=2114)"
        ));

        let recommendation = md.find("## Top match").unwrap();
        let comparison = md.find("## How other departments compare").unwrap();
        let tips = md.find("## Make the decision with confidence").unwrap();
        let sources = md.find("## Sources").unwrap();
        assert!(recommendation < comparison && comparison < tips && tips < sources);
    }

    #[test]
    fn test_markdown_without_recommendation() {
        let base = builtin();
        let mut departments = base.departments().to_vec();
        departments[0].recommended = false;
        let catalog = Catalog::new(
            base.hero().clone(),
            base.copy().clone(),
            base.sources().to_vec(),
            departments,
            base.reasons().to_vec(),
            base.tips().to_vec(),
        );

        let md = MarkdownRenderer.page(&catalog);
        assert!(!md.contains("## Top match"));
        assert!(!md.contains("(Recommended)"));
        assert_eq!(md.matches("\n### ").count(), 4);
    }
}
