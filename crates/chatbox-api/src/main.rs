//! Chatbox entry point.
//!
//! Binary name: `chatbox`
//!
//! Two subcommands: `serve` runs the session-authenticated relay server,
//! `chat` runs the interactive terminal client against a running server.

mod cli;
mod http;
mod state;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chatbox_types::config::ServerConfig;
use state::AppState;

#[derive(Parser)]
#[command(name = "chatbox", version, about = "Session-authenticated chat relay")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP relay server
    Serve {
        /// Path to a TOML config file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the bind address from the config
        #[arg(long)]
        addr: Option<String>,
    },

    /// Interactive terminal chat client
    Chat {
        /// Base URL of a running chatbox server
        #[arg(long, default_value = "http://localhost:4000")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,chatbox=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { config, addr } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(addr) = addr {
                config.bind_addr = addr;
            }

            let state = AppState::init(&config)?;
            let router = http::router::build_router(state, &config.allowed_origin)?;

            let listener = tokio::net::TcpListener::bind(&config.bind_addr)
                .await
                .with_context(|| format!("binding {}", config.bind_addr))?;
            tracing::info!(addr = %config.bind_addr, "chatbox server listening");
            axum::serve(listener, router).await?;
        }

        Commands::Chat { server } => {
            cli::chat::run_chat_loop(&server).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(ServerConfig::default()),
    }
}
