//! Serve command - starts the web server.

use anyhow::{Context, Result};
use colored::Colorize;
use std::net::SocketAddr;
use std::time::Duration;

use ar_api::{ApiServer, ApiServerConfig, AppState};
use ar_core::DEFAULT_COMPANY_NAME;

use crate::config::AppConfig;

/// Server configuration after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ServeConfig {
    /// Port to listen on.
    pub port: u16,
    /// Hostname to bind to.
    pub host: String,
    /// Company name at startup.
    pub company_name: String,
    /// Load the demo inventory.
    pub seed_demo_data: bool,
    /// Seconds allowed for graceful shutdown.
    pub shutdown_timeout_secs: u64,
}

impl ServeConfig {
    /// Builds the serve configuration from the loaded file, letting any flag
    /// given on the command line take precedence.
    ///
    /// The company name is trimmed. A blank flag defers to the file, and a
    /// blank file value falls back to the default name.
    pub fn resolve(
        app_config: &AppConfig,
        port: Option<u16>,
        host: Option<String>,
        company: Option<String>,
        no_seed: bool,
    ) -> Self {
        Self {
            port: port.unwrap_or(app_config.server.port),
            host: host.unwrap_or_else(|| app_config.server.host.clone()),
            company_name: resolve_company_name(company.as_deref(), &app_config.company_name),
            seed_demo_data: app_config.seed_demo_data && !no_seed,
            shutdown_timeout_secs: app_config.server.shutdown_timeout_secs,
        }
    }

    /// Parses the socket address to bind.
    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address: {}:{}", self.host, self.port))
    }
}

/// Runs the web server until Ctrl+C or SIGTERM.
pub async fn run_server(config: ServeConfig) -> Result<()> {
    println!("{} Starting Asset Register...", "[server]".cyan());

    let state = if config.seed_demo_data {
        println!("  {} Loading demo inventory", "→".green());
        AppState::with_demo_data(config.company_name.clone())
    } else {
        println!("  {} Starting with an empty register", "→".green());
        AppState::in_memory(config.company_name.clone())
    };

    let bind_address = config.bind_address()?;

    let server_config = ApiServerConfig {
        bind_address,
        shutdown_timeout: Duration::from_secs(config.shutdown_timeout_secs),
        ..ApiServerConfig::default()
    };

    println!();
    println!("{}", "Asset Register".bold());
    println!("{}", "═".repeat(40));
    println!("  {} http://{}", "Address:".cyan(), bind_address);
    println!("  {} {}", "Company:".cyan(), config.company_name);
    println!(
        "  {} http://{}/api-docs/openapi.json",
        "OpenAPI:".cyan(),
        bind_address
    );

    println!();
    println!("{}", "Endpoints:".bold());
    println!("  GET  /                        - Inventory page (search, sort, order)");
    println!("  POST /assets                  - Add asset");
    println!("  GET  /assets/:id              - Asset as JSON");
    println!("  POST /assets/:id/update       - Edit asset");
    println!("  POST /assets/:id/delete       - Delete asset");
    println!("  GET  /assets/:id/label        - Printable label");
    println!("  POST /settings/company        - Rename company");
    println!("  GET  /health                  - Health check");
    println!();
    println!("Press {} to stop", "Ctrl+C".yellow());
    println!();

    let server = ApiServer::new(state, server_config);
    server.run().await.context("Server error")?;

    println!();
    println!("{} Server stopped", "[server]".cyan());

    Ok(())
}

fn resolve_company_name(flag: Option<&str>, configured: &str) -> String {
    [flag.unwrap_or_default(), configured]
        .into_iter()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .unwrap_or(DEFAULT_COMPANY_NAME)
        .to_string()
}
