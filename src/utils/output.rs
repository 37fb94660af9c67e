use colored::*;
use crate::core::data::{Catalog, Department, Segment, Source};
use crate::utils::format::{format_citation_label, truncate_string};

pub struct OutputStyle;

impl OutputStyle {
    pub fn name(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn citation(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn link(text: &str) -> ColoredString {
        text.bright_blue().underline()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn badge(text: &str) -> ColoredString {
        text.black().on_bright_yellow()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    /// Citation marker for terminal output; empty for unlisted sources
    pub fn citation_marker(catalog: &Catalog, id: crate::core::data::SourceId) -> String {
        catalog
            .citation_number(id)
            .map(format_citation_label)
            .unwrap_or_default()
    }

    /// Flatten rich text into a plain line with bracketed citation numbers
    pub fn plain_text(catalog: &Catalog, segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.clone(),
                Segment::Cite(id) => Self::citation_marker(catalog, *id),
            })
            .collect()
    }

    pub fn print_source(number: usize, source: &Source) {
        println!(
            "{} {}",
            Self::citation(&format_citation_label(number)),
            Self::name(&source.title)
        );
        Self::print_field_colored("ID", source.id.as_str(), Self::muted);
        Self::print_field_colored("URL", &source.url, Self::link);
        Self::print_field_colored("Summary", &truncate_string(&source.summary, 90), Self::content);
    }

    pub fn print_department(catalog: &Catalog, department: &Department) {
        if department.recommended {
            println!(
                "{} {}",
                Self::title(&department.name),
                Self::badge(&format!(" {} ", catalog.copy().recommended_flag))
            );
        } else {
            println!("{}", Self::title(&department.name));
        }
        println!("{}", Self::separator());

        let focus = format!(
            "{} {}",
            department.focus,
            Self::citation_marker(catalog, department.id)
        );
        Self::print_field_colored("Focus", focus.trim_end(), Self::content);
        Self::print_field_colored("Best for", &department.best_for, Self::content);

        println!("{:>12}:", Self::label("Highlights"));
        for highlight in &department.highlights {
            println!("              • {}", Self::content(highlight));
        }
        Self::print_field_colored("Keep in mind", &department.considerations, Self::warning);
    }

    pub fn print_recommendation(catalog: &Catalog, department: &Department) {
        println!(
            "\n{} {}",
            Self::badge(&format!(" {} ", catalog.copy().recommendation_badge)),
            Self::name(&department.name)
        );
        println!("\n{}:", Self::header(&catalog.copy().reasons_heading));
        for reason in catalog.reasons() {
            println!(
                "  • {} {}",
                Self::header(&format!("{}.", reason.title)),
                Self::plain_text(catalog, &reason.body)
            );
        }
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

pub fn print_info(message: &str) {
    println!("ℹ️  {}", OutputStyle::info(message));
}
