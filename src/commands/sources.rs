use crate::core::content::builtin;
use crate::utils::OutputStyle;
use anyhow::Result;

pub fn handle_sources_command() -> Result<()> {
    let catalog = builtin();

    OutputStyle::print_header(&format!("📚 {} ({})", catalog.copy().sources_heading, catalog.sources().len()));
    for (i, source) in catalog.sources().iter().enumerate() {
        if i > 0 {
            println!();
        }
        OutputStyle::print_source(i + 1, source);
    }

    Ok(())
}
