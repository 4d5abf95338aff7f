//! Analyze Components CLI
//!
//! Main entry point for the analyze-components tool.
//! Lists the extracted InnoDB component write-ups, previews one of them, or
//! prints a canned analysis prompt for a topic.

mod commands;
mod dispatch;

use analyze_core::{
    config::{AppConfig, ConfigOverrides},
    logging, AppResult,
};
use clap::Parser;
use dispatch::Invocation;
use std::path::PathBuf;

/// Browse extracted InnoDB component write-ups and fetch analysis prompts
#[derive(Parser, Debug)]
#[command(name = "analyze-components")]
#[command(about = "Browse extracted InnoDB component write-ups and fetch analysis prompts", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the component files (default: current directory)
    #[arg(short, long, env = "ANALYZE_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, env = "ANALYZE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output as JSON (list and prompt)
    #[arg(long)]
    json: bool,

    /// Command and its arguments: list | show <index> | prompt <type>
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            workspace: self.workspace.clone(),
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            verbose: self.verbose,
            no_color: self.no_color,
        }
    }
}

fn main() -> AppResult<()> {
    // Malformed options are reported like any other input mistake
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return Ok(());
        }
    };

    let config = AppConfig::load_with(cli.overrides())?;

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Config file: {:?}", config.config_file);

    let invocation = Invocation::from_args(&cli.args);
    let _span = tracing::info_span!("command", name = invocation.name()).entered();

    match commands::execute(&invocation, &config, cli.json) {
        Ok(output) => {
            print!("{output}");
            tracing::info!("Command completed successfully");
        }
        Err(e) if e.is_user_facing() => {
            tracing::debug!(error = ?e, "Command rejected");
            println!("{e}");
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("{e}");
        }
    }

    Ok(())
}
