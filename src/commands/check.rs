use crate::core::content::builtin;
use crate::core::data::Catalog;
use crate::utils::{print_success, print_warning};
use anyhow::{bail, Result};

pub fn handle_check_command() -> Result<()> {
    check_catalog(builtin())
}

fn check_catalog(catalog: &Catalog) -> Result<()> {
    let issues = catalog.validate();

    if issues.is_empty() {
        print_success(&summary_line(catalog));
        if catalog.index().is_empty() {
            print_warning("No sources are listed; every citation will be omitted");
        }
        if catalog.recommended().is_none() {
            print_warning("No department is recommended; the recommendation section will be omitted");
        }
        return Ok(());
    }

    for issue in &issues {
        print_warning(&issue.to_string());
    }
    bail!("{} content issue(s) found", issues.len());
}

/// Table sizes, counting sources by distinct citation number
fn summary_line(catalog: &Catalog) -> String {
    format!(
        "Content is consistent: {} sources, {} departments, {} reasons, {} tips",
        catalog.index().len(),
        catalog.departments().len(),
        catalog.reasons().len(),
        catalog.tips().len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_passes() {
        assert!(check_catalog(builtin()).is_ok());
    }

    #[test]
    fn test_issues_fail_the_check() {
        let base = builtin();
        let mut departments = base.departments().to_vec();
        for department in &mut departments {
            department.recommended = true;
        }
        let catalog = Catalog::new(
            base.hero().clone(),
            base.copy().clone(),
            base.sources().to_vec(),
            departments,
            base.reasons().to_vec(),
            base.tips().to_vec(),
        );

        let err = check_catalog(&catalog).unwrap_err();
        assert_eq!(err.to_string(), "1 content issue(s) found");
    }

    #[test]
    fn test_summary_line_counts_tables() {
        assert_eq!(
            summary_line(builtin()),
            "Content is consistent: 4 sources, 4 departments, 3 reasons, 4 tips"
        );
    }

    #[test]
    fn test_empty_source_list_still_passes() {
        let base = builtin();
        let catalog = Catalog::new(
            base.hero().clone(),
            base.copy().clone(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            base.tips().to_vec(),
        );
        assert!(catalog.index().is_empty());
        assert!(check_catalog(&catalog).is_ok());
        assert_eq!(
            summary_line(&catalog),
            "Content is consistent: 0 sources, 0 departments, 0 reasons, 4 tips"
        );
    }
}
