use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::{self, OutputStyle};
use anyhow::Result;

pub fn handle_config_command(
    mut config: Config,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => handle_path_command(),
        Some(ConfigCommands::Reset { force }) => handle_reset_command(&mut config, force),
        None => handle_config_help(),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    OutputStyle::print_header("⚙️  spengerguide configuration");

    println!("General:");
    println!("  Output file: {}", config.general.output_file.display());
    println!("  Format: {:?}", config.general.format);
    println!("  Color: {}", config.general.color);
    println!("  Open browser: {}", config.general.open_browser);
    println!("  Language: {}", config.general.lang);
    println!("  Title: {}", config.general.title);

    println!("Server:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    Ok(())
}

fn handle_path_command() -> Result<()> {
    println!("{}", Config::config_file_path().display());
    Ok(())
}

fn handle_config_help() -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  spengerguide config show    - Show current configuration");
    println!("  spengerguide config path    - Print the configuration file location");
    println!("  spengerguide config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", Config::config_file_path().display());
    Ok(())
}

fn handle_reset_command(config: &mut Config, force: bool) -> Result<()> {
    if force || utils::prompt_yes_no("Are you sure you want to reset configuration to defaults? This will overwrite your current settings.")? {
        *config = Config::default();
        config.save()?;
        utils::print_success("Configuration reset to defaults!");
    } else {
        println!("Reset cancelled.");
    }
    Ok(())
}
