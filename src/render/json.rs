use crate::core::data::{Catalog, SourceId};
use crate::render::RenderOptions;
use crate::utils::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Serialized form of the page: document settings, citation numbers and
/// every content table
#[derive(Serialize)]
struct JsonDocument<'a> {
    title: &'a str,
    lang: &'a str,
    generated_at: DateTime<Utc>,
    citations: BTreeMap<SourceId, usize>,
    #[serde(flatten)]
    catalog: &'a Catalog,
}

pub fn render(catalog: &Catalog, options: &RenderOptions) -> AppResult<String> {
    let citations = catalog
        .sources()
        .iter()
        .filter_map(|source| {
            catalog
                .citation_number(source.id)
                .map(|number| (source.id, number))
        })
        .collect();

    let document = JsonDocument {
        title: &options.title,
        lang: &options.lang,
        generated_at: Utc::now(),
        citations,
        catalog,
    };

    serde_json::to_string_pretty(&document)
        .map_err(|e| AppError::Render(format!("Failed to serialize catalog to JSON: {}", e)))
}
