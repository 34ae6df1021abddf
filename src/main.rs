//! urlshort: serve permanent redirects from a YAML rules file.
//!
//! ```text
//!   Client ──▶ TraceLayer ──▶ TimeoutLayer ──▶ RedirectService ──┬──▶ 301 Location: <url>
//!                                                               └──▶ fallback router
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use urlshort::config::{load_config, validation::validate_config, AppConfig, ConfigError};
use urlshort::lifecycle::{build_table, signals, Shutdown};
use urlshort::observability::{logging, metrics};
use urlshort::HttpServer;

#[derive(Parser)]
#[command(name = "urlshort", version)]
#[command(about = "Permanent redirects for exact request paths", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML rules file (overrides rules.file)
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Bind address (overrides listener.bind_address)
    #[arg(short, long)]
    bind: Option<String>,

    /// Reject empty or relative paths and unusable targets
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load config and rules, report the table, and exit
    Check,
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(rules) = &cli.rules {
        config.rules.file = Some(rules.clone());
    }
    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if cli.strict {
        config.rules.strict = true;
    }

    // Overrides may have introduced new problems.
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    logging::init(&config.observability.log_filter);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "urlshort starting");

    let table = build_table(&config)?;

    if let Some(Commands::Check) = cli.command {
        let mut entries: Vec<_> = table.iter().collect();
        entries.sort();
        for (path, target) in entries {
            println!("{} -> {}", path, target);
        }
        println!("{} redirect(s) OK", table.len());
        return Ok(());
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        redirects = table.len(),
        strict = config.rules.strict,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    HttpServer::new(config, table).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
