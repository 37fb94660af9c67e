use crate::cli::RenderArgs;
use crate::config::Config;
use crate::core::content::builtin;
use crate::render::{render_document, Format, RenderOptions};
use crate::utils::{open_browser, print_success, print_warning};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

pub fn handle_render_command(config: Config, args: &RenderArgs) -> Result<()> {
    let catalog = builtin();
    for issue in catalog.validate() {
        warn!(%issue, "content issue");
    }

    let format = args.format.unwrap_or(config.general.format);
    let options = RenderOptions::from(&config.general);
    let document = render_document(catalog, format, &options)?;

    if args.stdout {
        if ignores_open(args) {
            print_warning("--open is ignored when writing to stdout");
        }
        print!("{}", document);
        return Ok(());
    }

    let output_path = resolve_output_path(&config, args.output.as_ref(), format);
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&output_path, &document)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(path = %output_path.display(), ?format, "page written");
    print_success(&format!(
        "Rendered {} departments and {} sources to {}",
        catalog.departments().len(),
        catalog.sources().len(),
        output_path.display()
    ));

    if args.open || config.general.open_browser {
        if format == Format::Html {
            open_browser(&output_path)?;
        } else {
            print_warning("Only HTML output can be opened in a browser");
        }
    }

    Ok(())
}

/// `--open` has no file to open when the document goes to stdout
fn ignores_open(args: &RenderArgs) -> bool {
    args.stdout && args.open
}

/// The explicit `--output` wins; otherwise the configured file with the
/// extension of the chosen format
fn resolve_output_path(config: &Config, output: Option<&PathBuf>, format: Format) -> PathBuf {
    match output {
        Some(path) => path.clone(),
        None => config.general.output_file.with_extension(format.extension()),
    }
}
