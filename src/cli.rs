use clap::{Parser, Subcommand, Args};
use std::path::PathBuf;
use anyhow::Result;
use crate::config::Config;
use crate::commands::{render, serve, sources, compare, check, configure};
use crate::core::data::SourceId;
use crate::render::Format;

#[derive(Parser)]
#[command(name = "spengerguide")]
#[command(about = "Renders the HTL Spengergasse department comparison page")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub async fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Render(args) => {
                render::handle_render_command(config, &args)?;
            }
            Commands::Serve(args) => {
                serve::handle_serve_command(config, &args).await?;
            }
            Commands::Sources => {
                sources::handle_sources_command()?;
            }
            Commands::Compare(args) => {
                compare::handle_compare_command(&args)?;
            }
            Commands::Check => {
                check::handle_check_command()?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, args.command.clone())?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the guide page to a file or stdout
    Render(RenderArgs),

    /// Serve the guide page over HTTP
    Serve(ServeArgs),

    /// List the numbered sources
    Sources,

    /// Compare departments in the terminal
    Compare(CompareArgs),

    /// Check the content tables for inconsistencies
    Check,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct RenderArgs {
    #[arg(short, long, help = "Output file (overrides config)")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Output format (overrides config)")]
    pub format: Option<Format>,

    #[arg(long, help = "Write the document to stdout instead of a file")]
    pub stdout: bool,

    #[arg(long, help = "Open the rendered file afterwards")]
    pub open: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, help = "Host to bind to (overrides config)")]
    pub host: Option<String>,

    #[arg(short, long, help = "Port to listen on (overrides config)")]
    pub port: Option<u16>,
}

#[derive(Args)]
pub struct CompareArgs {
    #[arg(short, long, help = "Only show this department, e.g. informatik")]
    pub department: Option<SourceId>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset {
        #[arg(short, long, help = "Skip the confirmation prompt")]
        force: bool,
    },
}
