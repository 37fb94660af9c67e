use crate::cli::CompareArgs;
use crate::core::content::builtin;
use crate::core::data::{Catalog, Department};
use crate::utils::OutputStyle;
use anyhow::Result;

pub fn handle_compare_command(args: &CompareArgs) -> Result<()> {
    let catalog = builtin();

    let selected = select_departments(catalog, args);

    OutputStyle::print_header(&format!("🏫 {}", catalog.copy().comparison_heading));
    for department in &selected {
        println!();
        OutputStyle::print_department(catalog, department);
    }

    if args.department.is_none()
        && let Some(recommended) = catalog.recommended()
    {
        OutputStyle::print_recommendation(catalog, recommended);
    }

    Ok(())
}

/// Departments to show, in table order
fn select_departments<'a>(catalog: &'a Catalog, args: &CompareArgs) -> Vec<&'a Department> {
    match args.department {
        Some(id) => catalog.find_department(id).into_iter().collect(),
        None => catalog.departments().iter().collect(),
    }
}
