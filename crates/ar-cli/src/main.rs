//! Asset Register CLI
//!
//! Command-line entry point for the Asset Register web server.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod commands;
mod config;

use ar_observability::logging::{init_logging_with_config, parse_level, LoggingConfig};
use commands::{run_server, ServeConfig};
use config::AppConfig;

#[derive(Parser)]
#[command(name = "asset-register")]
#[command(version)]
#[command(about = "Web-based register of company assets", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on [default: 3000]
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to [default: 0.0.0.0]
        #[arg(long)]
        host: Option<String>,

        /// Company name shown on pages and labels
        #[arg(long)]
        company: Option<String>,

        /// Start with an empty register instead of the demo inventory
        #[arg(long)]
        no_seed: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file path
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = AppConfig::load_or_default(&config_path)?;

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        parse_level(&config.logging.level)
    };

    init_logging_with_config(
        LoggingConfig {
            json_format: cli.format == OutputFormat::Json || config.logging.json_format,
            ..Default::default()
        }
        .with_level(level),
    )
    .context("Failed to initialize logging")?;

    tracing::debug!(path = %config_path.display(), "Configuration resolved");

    match cli.command {
        Commands::Serve {
            port,
            host,
            company,
            no_seed,
        } => {
            let serve_config = ServeConfig::resolve(&config, port, host, company, no_seed);
            run_server(serve_config).await
        }
        Commands::Config { write } => cmd_config(&config, &config_path, write, cli.format),
    }
}

fn default_config_path() -> PathBuf {
    if let Some(dirs) = directories::ProjectDirs::from("com", "asset-register", "asset-register")
    {
        dirs.config_dir().join("config.yaml")
    } else {
        PathBuf::from("config/default.yaml")
    }
}

fn cmd_config(
    config: &AppConfig,
    path: &std::path::Path,
    write: bool,
    format: OutputFormat,
) -> Result<()> {
    if write {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        config.save(path)?;
        println!("{} Wrote {}", "✓".green(), path.display());
        return Ok(());
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        println!("{}", "Current Configuration".bold());
        println!("─────────────────────────");
        println!("Config file:    {}", path.display());
        println!("Listen:         {}:{}", config.server.host, config.server.port);
        println!("Shutdown after: {}s", config.server.shutdown_timeout_secs);
        println!("Company:        {}", config.company_name);
        println!("Demo data:      {}", config.seed_demo_data);
        println!(
            "Logging:        {}{}",
            config.logging.level,
            if config.logging.json_format { " (json)" } else { "" }
        );
    }

    Ok(())
}
