//! SkillBoard CLI
//!
//! Command-line dashboard for SkillRack profiles:
//! - Validate a profile URL
//! - Fetch a profile and show its dashboard
//! - Show the sample dashboard
//! - Interactive session with live URL validation
//! - Check backend status

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use skillboard::client::{BackendClient, ProfileBackend};
use skillboard::config::{generate_default_config, Config};
use skillboard::logging::init_tracing;
use skillboard::render::{render, OutputFormat};
use skillboard::session::DashboardSession;
use skillboard::validator::ValidationState;
use skillboard::Dashboard;

#[derive(Parser)]
#[command(name = "skillboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SkillRack profile analytics dashboard")]
#[command(long_about = "SkillBoard turns a SkillRack profile into a dashboard.\nScore breakdowns, language usage and medal counts from one URL.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend API URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a profile URL with the backend
    Validate {
        /// Profile URL
        url: String,
    },

    /// Fetch a profile and show its dashboard
    Fetch {
        /// Profile URL
        url: String,
    },

    /// Show the dashboard for the sample profile
    Demo,

    /// Interactive session: type URLs, then :submit, :demo, :reset or :quit
    Session,

    /// Show backend status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, lookup) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, None),
        None => {
            let lookup = Config::load_default();
            (lookup.config.clone(), Some(lookup))
        }
    };
    if let Some(url) = &cli.api_url {
        config.client.base_url = url.clone();
    }

    init_tracing(&config.logging);
    if let Some(lookup) = &lookup {
        lookup.report();
    }

    match cli.command {
        Commands::Validate { url } => {
            let client = backend(&config)?;
            let url = url.trim();

            match client.validate_url(url).await {
                Ok(true) => println!("valid: {}", url),
                Ok(false) => {
                    println!("invalid: {}", url);
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot reach backend at {}", config.client.base_url);
                    eprintln!("Error: {}", e);
                    std::process::exit(2);
                }
            }
        }

        Commands::Fetch { url } => {
            let mut session = DashboardSession::new(backend(&config)?, config.client.validator());
            session.edit(url);

            let dashboard = session.submit().await?.dashboard();
            print_dashboard(&dashboard, cli.format)?;
        }

        Commands::Demo => {
            let mut session = DashboardSession::new(backend(&config)?, config.client.validator());
            let dashboard = session.load_demo().dashboard();
            print_dashboard(&dashboard, cli.format)?;
        }

        Commands::Session => {
            let session = DashboardSession::new(backend(&config)?, config.client.validator());
            run_session(session, cli.format).await?;
        }

        Commands::Status => {
            let client = BackendClient::new(config.client.backend())?;

            match client.health().await {
                Ok(health) => {
                    println!("{} (v{})", health.message, health.version);
                    println!("Status: {}", health.status);
                    println!("Uptime: {}", format_duration(health.uptime_seconds));
                    if !health.endpoints.is_empty() {
                        println!();
                        println!("Endpoints:");
                        for endpoint in &health.endpoints {
                            println!("  {:<24} {}", endpoint.route, endpoint.description);
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Cannot connect to SkillBoard API at {}", config.client.base_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the API server is running:");
                    eprintln!("  cargo run --bin skillboard-api");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn backend(config: &Config) -> anyhow::Result<Arc<dyn ProfileBackend>> {
    let client = BackendClient::new(config.client.backend())
        .context("creating backend client")?;
    Ok(Arc::new(client))
}

fn print_dashboard(dashboard: &Dashboard, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(dashboard, format)?);
    Ok(())
}

/// Line-driven stand-in for the URL field and its buttons
async fn run_session(mut session: DashboardSession, format: OutputFormat) -> anyhow::Result<()> {
    let mut updates = session.validator().subscribe();

    // report each settled verdict once
    let watcher = tokio::spawn(async move {
        let mut last = ValidationState::Unknown;
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            if snapshot.state != last {
                last = snapshot.state;
                if snapshot.state != ValidationState::Unknown {
                    eprintln!("[{}] {}", snapshot.state, snapshot.text.trim());
                }
            }
        }
    });

    eprintln!("Type a profile URL. Commands: :submit, :demo, :reset, :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" | ":q" => break,
            ":submit" => {
                if !session.can_submit() {
                    eprintln!("URL is invalid; edit it before submitting");
                    continue;
                }
                match session.submit().await {
                    Ok(loaded) => {
                        let dashboard = loaded.dashboard();
                        print_dashboard(&dashboard, format)?;
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            ":demo" => {
                let dashboard = session.load_demo().dashboard();
                print_dashboard(&dashboard, format)?;
            }
            ":reset" => {
                session.reset();
                eprintln!("Cleared. Type a profile URL.");
            }
            other if other.starts_with(':') => {
                eprintln!("Unknown command: {}", other);
            }
            _ => session.edit(line.clone()),
        }
    }

    watcher.abort();
    Ok(())
}

fn format_duration(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m {}s", minutes, seconds % 60)
    }
}
