//! Consistency checks over a catalog
//!
//! Rendering never fails on inconsistent content: unknown citations are
//! dropped and the first recommended department wins. These checks surface
//! such cases so they can be fixed at the source.

use crate::core::data::{Catalog, SourceId};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    /// More than one department carries the recommended flag
    MultipleRecommended { names: Vec<String> },
    /// A citation points at an id missing from the source list
    UnknownCitation { context: String, id: SourceId },
    /// The same id appears more than once in the source list
    DuplicateSource { id: SourceId },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::MultipleRecommended { names } => write!(
                f,
                "{} departments are flagged as recommended ({}); only '{}' is shown",
                names.len(),
                names.join(", "),
                names.first().map(String::as_str).unwrap_or_default()
            ),
            ContentIssue::UnknownCitation { context, id } => write!(
                f,
                "{} cites '{}', which is not in the source list",
                context, id
            ),
            ContentIssue::DuplicateSource { id } => {
                write!(f, "source '{}' is listed more than once", id)
            }
        }
    }
}

impl Catalog {
    /// Collect every consistency issue, in table order
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for source in self.sources() {
            if !seen.insert(source.id) {
                issues.push(ContentIssue::DuplicateSource { id: source.id });
            }
        }

        let recommended: Vec<String> = self
            .departments()
            .iter()
            .filter(|department| department.recommended)
            .map(|department| department.name.clone())
            .collect();
        if recommended.len() > 1 {
            issues.push(ContentIssue::MultipleRecommended { names: recommended });
        }

        for department in self.departments() {
            if !self.index().contains(department.id) {
                issues.push(ContentIssue::UnknownCitation {
                    context: format!("Department '{}'", department.name),
                    id: department.id,
                });
            }
        }

        for reason in self.reasons() {
            for id in reason.citations() {
                if !self.index().contains(id) {
                    issues.push(ContentIssue::UnknownCitation {
                        context: format!("Reason '{}'", reason.title),
                        id,
                    });
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::builtin;

    fn rebuild(
        sources: Vec<crate::core::data::Source>,
        departments: Vec<crate::core::data::Department>,
    ) -> Catalog {
        let base = builtin();
        Catalog::new(
            base.hero().clone(),
            base.copy().clone(),
            sources,
            departments,
            base.reasons().to_vec(),
            base.tips().to_vec(),
        )
    }

    #[test]
    fn test_builtin_has_no_issues() {
        assert!(builtin().validate().is_empty());
    }

    #[test]
    fn test_multiple_recommended_reported() {
        let mut departments = builtin().departments().to_vec();
        departments[3].recommended = true;
        let catalog = rebuild(builtin().sources().to_vec(), departments);

        let issues = catalog.validate();
        assert_eq!(
            issues,
            vec![ContentIssue::MultipleRecommended {
                names: vec!["Informatik".to_string(), "Animation".to_string()],
            }]
        );
        assert!(issues[0].to_string().contains("only 'Informatik' is shown"));
    }

    #[test]
    fn test_missing_source_reported_for_departments_and_reasons() {
        let sources: Vec<_> = builtin()
            .sources()
            .iter()
            .filter(|s| s.id != SourceId::Informatik)
            .cloned()
            .collect();
        let catalog = rebuild(sources, builtin().departments().to_vec());

        let issues = catalog.validate();
        // one for the department, one per reason
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().all(|issue| matches!(
            issue,
            ContentIssue::UnknownCitation { id: SourceId::Informatik, .. }
        )));
        assert_eq!(
            issues[0].to_string(),
            "Department 'Informatik' cites 'informatik', which is not in the source list"
        );
    }

    #[test]
    fn test_duplicate_source_reported() {
        let mut sources = builtin().sources().to_vec();
        sources.push(sources[1].clone());
        let catalog = rebuild(sources, builtin().departments().to_vec());

        assert_eq!(
            catalog.validate(),
            vec![ContentIssue::DuplicateSource {
                id: SourceId::Medizininformatik
            }]
        );
    }

    #[test]
    fn test_zero_recommended_is_not_an_issue() {
        let mut departments = builtin().departments().to_vec();
        for department in &mut departments {
            department.recommended = false;
        }
        let catalog = rebuild(builtin().sources().to_vec(), departments);
        assert!(catalog.validate().is_empty());
    }
}
