//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::MAX_CONFIGURED_DELAY_MS;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Artificial repository latency in milliseconds (0 disables it)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Search debounce in milliseconds
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Number of recent searches to keep
    #[arg(long, value_name = "N")]
    max_recent: Option<usize>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: Option<String>,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string());

        if self.json {
            print_json(&ConfigOutput {
                path,
                config: &config,
            })
        } else {
            output_human_readable(&config, path.as_deref());
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.delay_ms.is_none() && self.debounce_ms.is_none() && self.max_recent.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --delay-ms, --debounce-ms, or --max-recent",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(delay_ms) = self.delay_ms {
            if delay_ms > MAX_CONFIGURED_DELAY_MS {
                return Err(CliError::validation(format!(
                    "--delay-ms must be at most {MAX_CONFIGURED_DELAY_MS}"
                )));
            }
            config.repository.delay_ms = delay_ms;
        }

        if let Some(debounce_ms) = self.debounce_ms {
            if debounce_ms > MAX_CONFIGURED_DELAY_MS {
                return Err(CliError::validation(format!(
                    "--debounce-ms must be at most {MAX_CONFIGURED_DELAY_MS}"
                )));
            }
            config.search.debounce_ms = debounce_ms;
        }

        if let Some(max_recent) = self.max_recent {
            if max_recent == 0 {
                return Err(CliError::validation("--max-recent must be at least 1"));
            }
            config.search.max_recent_searches = max_recent;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: Option<&str>) {
    println!("Configuration");
    if let Some(path) = path {
        println!("  File: {path}");
    }
    println!();
    println!("[repository]");
    println!("  delay_ms = {}", config.repository.delay_ms);
    println!();
    println!("[search]");
    println!("  debounce_ms = {}", config.search.debounce_ms);
    println!(
        "  max_recent_searches = {}",
        config.search.max_recent_searches
    );
}
