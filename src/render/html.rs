use crate::core::data::{Catalog, Department, SourceId};
use crate::core::traits::PageRenderer;
use crate::render::style::STYLESHEET;
use crate::render::RenderOptions;
use crate::utils::format::{escape_html, format_citation_label, source_anchor};

/// HTML renderer producing a standalone document with embedded CSS
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn department_card(&self, catalog: &Catalog, department: &Department) -> String {
        let mut html = String::with_capacity(1024);

        if department.recommended {
            html.push_str("<article class=\"department-card department-card--highlight\">\n");
            html.push_str(&format!(
                "<span class=\"department-flag\">{}</span>\n",
                escape_html(&catalog.copy().recommended_flag)
            ));
        } else {
            html.push_str("<article class=\"department-card\">\n");
        }

        html.push_str(&format!("<h3>{}</h3>\n", escape_html(&department.name)));
        html.push_str(&format!(
            "<p class=\"department-focus\">{}{}</p>\n",
            escape_html(&department.focus),
            self.citation(catalog, department.id)
        ));
        html.push_str("<div class=\"department-details\">\n");
        html.push_str(&format!(
            "<p class=\"department-best\">Best for: {}</p>\n",
            escape_html(&department.best_for)
        ));
        html.push_str("<ul>\n");
        for highlight in &department.highlights {
            html.push_str(&format!("<li>{}</li>\n", escape_html(highlight)));
        }
        html.push_str("</ul>\n");
        html.push_str(&format!(
            "<p class=\"department-consider\">Keep in mind: {}</p>\n",
            escape_html(&department.considerations)
        ));
        html.push_str("</div>\n</article>\n");
        html
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl PageRenderer for HtmlRenderer {
    fn text(&self, value: &str) -> String {
        escape_html(value)
    }

    fn citation(&self, catalog: &Catalog, id: SourceId) -> String {
        match catalog.citation_number(id) {
            Some(number) => format!(
                "<sup><a class=\"citation\" href=\"#{}\" aria-label=\"See source {}\">{}</a></sup>",
                source_anchor(id.as_str()),
                number,
                format_citation_label(number)
            ),
            None => String::new(),
        }
    }

    fn hero(&self, catalog: &Catalog) -> String {
        let hero = catalog.hero();
        format!(
            "<section class=\"hero\">\n<span class=\"tag\">{}</span>\n<h1>{}</h1>\n<p class=\"lead\">{}</p>\n</section>\n",
            escape_html(&hero.tag),
            escape_html(&hero.heading),
            escape_html(&hero.lead)
        )
    }

    fn recommendation(&self, catalog: &Catalog) -> String {
        let Some(department) = catalog.recommended() else {
            return String::new();
        };
        let copy = catalog.copy();

        let mut html = String::with_capacity(2048);
        html.push_str("<section class=\"section recommendation\">\n");
        html.push_str("<div class=\"recommendation-card\">\n");
        html.push_str(&format!(
            "<div class=\"badge\">{}</div>\n",
            escape_html(&copy.recommendation_badge)
        ));
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&department.name)));
        html.push_str(&format!(
            "<p class=\"recommendation-focus\">{}{}</p>\n",
            escape_html(&department.focus),
            self.citation(catalog, department.id)
        ));
        html.push_str("<div class=\"recommendation-highlights\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape_html(&copy.reasons_heading)));
        html.push_str("<ul>\n");
        for reason in catalog.reasons() {
            html.push_str(&format!(
                "<li><strong>{}.</strong> {}</li>\n",
                escape_html(&reason.title),
                self.rich_text(catalog, &reason.body)
            ));
        }
        html.push_str("</ul>\n</div>\n</div>\n</section>\n");
        html
    }

    fn comparison(&self, catalog: &Catalog) -> String {
        let copy = catalog.copy();

        let mut html = String::with_capacity(4096);
        html.push_str("<section class=\"section\">\n");
        html.push_str("<div class=\"section-heading\">\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&copy.comparison_heading)));
        html.push_str(&format!("<p>{}</p>\n", escape_html(&copy.comparison_intro)));
        html.push_str("</div>\n");
        html.push_str("<div class=\"comparison-grid\">\n");
        for department in catalog.departments() {
            html.push_str(&self.department_card(catalog, department));
        }
        html.push_str("</div>\n</section>\n");
        html
    }

    fn tips(&self, catalog: &Catalog) -> String {
        let copy = catalog.copy();

        let mut html = String::with_capacity(1024);
        html.push_str("<section class=\"section\">\n");
        html.push_str("<div class=\"section-heading\">\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&copy.tips_heading)));
        html.push_str(&format!("<p>{}</p>\n", escape_html(&copy.tips_intro)));
        html.push_str("</div>\n");
        html.push_str("<ol class=\"tips-list\">\n");
        for tip in catalog.tips() {
            html.push_str(&format!("<li>{}</li>\n", escape_html(tip)));
        }
        html.push_str("</ol>\n</section>\n");
        html
    }

    fn sources(&self, catalog: &Catalog) -> String {
        let mut html = String::with_capacity(1024);
        html.push_str("<section class=\"section sources\" aria-labelledby=\"sources-heading\">\n");
        html.push_str(&format!(
            "<h2 id=\"sources-heading\">{}</h2>\n",
            escape_html(&catalog.copy().sources_heading)
        ));
        html.push_str("<ol>\n");
        for source in catalog.sources() {
            html.push_str(&format!(
                "<li id=\"{}\"><a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a><span> – {}</span></li>\n",
                source_anchor(source.id.as_str()),
                escape_html(&source.url),
                escape_html(&source.title),
                escape_html(&source.summary)
            ));
        }
        html.push_str("</ol>\n</section>\n");
        html
    }

    fn page(&self, catalog: &Catalog) -> String {
        let mut html = String::with_capacity(16 * 1024);

        html.push_str(&format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n",
            escape_html(&self.options.lang)
        ));
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.options.title)));
        html.push_str("<style>\n");
        html.push_str(STYLESHEET);
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str("<main class=\"page\">\n");
        html.push_str(&self.body(catalog));
        html.push_str("</main>\n");

        html.push_str("</body>\n</html>\n");
        html
    }
}
