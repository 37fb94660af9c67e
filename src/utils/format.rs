/// Escape HTML special characters for text nodes and quoted attributes
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Bracketed citation label, e.g. `[2]`
pub fn format_citation_label(number: usize) -> String {
    format!("[{}]", number)
}

/// Anchor name that ties a citation to its entry in the source list
pub fn source_anchor(id: &str) -> String {
    format!("source-{}", id)
}

/// Truncate a string for single-line terminal previews
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
