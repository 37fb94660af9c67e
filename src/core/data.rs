//! Core data structures for the department guide
//!
//! Every table is built once and read-only afterwards. The [`Catalog`]
//! bundles the tables together with the derived [`SourceIndex`].

use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Identifier shared by sources and departments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceId {
    Informatik,
    Medizininformatik,
    TechnischesManagement,
    Animation,
}

impl SourceId {
    pub const ALL: [SourceId; 4] = [
        SourceId::Informatik,
        SourceId::Medizininformatik,
        SourceId::TechnischesManagement,
        SourceId::Animation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Informatik => "informatik",
            SourceId::Medizininformatik => "medizininformatik",
            SourceId::TechnischesManagement => "technischesManagement",
            SourceId::Animation => "animation",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = SourceId::ALL.iter().map(|id| id.as_str()).collect();
                AppError::System(format!(
                    "Unknown department '{}', expected one of: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// A cited external reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub title: String,
    pub url: String,
    pub summary: String,
}

/// One educational track with its comparison attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: SourceId,
    pub name: String,
    pub focus: String,
    pub best_for: String,
    pub highlights: Vec<String>,
    pub considerations: String,
    #[serde(default)]
    pub recommended: bool,
}

/// A piece of rich text: either plain text or a reference to a source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Segment {
    Text(String),
    Cite(SourceId),
}

impl Segment {
    pub fn text(s: &str) -> Self {
        Segment::Text(s.to_string())
    }
}

/// One entry of the rationale shown under the recommended department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReason {
    pub title: String,
    pub body: Vec<Segment>,
}

impl RecommendationReason {
    /// Ids cited anywhere in the body, in order of appearance
    pub fn citations(&self) -> impl Iterator<Item = SourceId> + '_ {
        self.body.iter().filter_map(|segment| match segment {
            Segment::Cite(id) => Some(*id),
            Segment::Text(_) => None,
        })
    }
}

/// Banner at the top of the page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub tag: String,
    pub heading: String,
    pub lead: String,
}

/// Headings and intro paragraphs of the page sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCopy {
    pub recommendation_badge: String,
    pub reasons_heading: String,
    pub recommended_flag: String,
    pub comparison_heading: String,
    pub comparison_intro: String,
    pub tips_heading: String,
    pub tips_intro: String,
    pub sources_heading: String,
}

/// Maps a source id to its 1-based position in the source list
#[derive(Debug, Clone, Default)]
pub struct SourceIndex {
    positions: HashMap<SourceId, usize>,
}

impl SourceIndex {
    /// Build the index from the ordered source list. A repeated id keeps
    /// the position of its last occurrence.
    pub fn from_sources(sources: &[Source]) -> Self {
        let positions = sources
            .iter()
            .enumerate()
            .map(|(index, source)| (source.id, index + 1))
            .collect();
        Self { positions }
    }

    pub fn get(&self, id: SourceId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn contains(&self, id: SourceId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// All page content plus the derived citation index
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    hero: Hero,
    copy: SectionCopy,
    sources: Vec<Source>,
    departments: Vec<Department>,
    reasons: Vec<RecommendationReason>,
    tips: Vec<String>,
    #[serde(skip)]
    index: SourceIndex,
}

impl Catalog {
    pub fn new(
        hero: Hero,
        copy: SectionCopy,
        sources: Vec<Source>,
        departments: Vec<Department>,
        reasons: Vec<RecommendationReason>,
        tips: Vec<String>,
    ) -> Self {
        let index = SourceIndex::from_sources(&sources);
        Self {
            hero,
            copy,
            sources,
            departments,
            reasons,
            tips,
            index,
        }
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn copy(&self) -> &SectionCopy {
        &self.copy
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn reasons(&self) -> &[RecommendationReason] {
        &self.reasons
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    pub fn index(&self) -> &SourceIndex {
        &self.index
    }

    /// Citation number for a source id, `None` when the id is not listed
    pub fn citation_number(&self, id: SourceId) -> Option<usize> {
        self.index.get(id)
    }

    /// The first department flagged as recommended
    pub fn recommended(&self) -> Option<&Department> {
        self.departments.iter().find(|department| department.recommended)
    }

    pub fn find_department(&self, id: SourceId) -> Option<&Department> {
        self.departments.iter().find(|department| department.id == id)
    }
}
