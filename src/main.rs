//! Device Assistant - Entry Point
//!
//! Runs the HTTP backend the ESP32 firmware talks to, or resolves a single
//! command locally for quick checks from a terminal.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use device_assistant::api::{self, AiResponse};
use device_assistant::command::IntentResolver;
use device_assistant::core::config::ServerConfig;
use device_assistant::core::error::Result;
use tokio::runtime::Runtime;

/// Rule-based command backend for ESP32 devices
#[derive(Parser, Debug)]
#[command(name = "device-assistant")]
#[command(version, about = "Rule-based command backend for ESP32 devices")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Address to bind, overrides config and environment
        #[arg(long)]
        listen: Option<SocketAddr>,
    },
    /// Resolve one command and print the response JSON
    Ask {
        /// Command text; multiple words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,

        /// Device id to echo back
        #[arg(long)]
        device_id: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Serve {
        config: None,
        listen: None,
    });

    match command {
        Command::Serve { config, listen } => {
            let mut config = match config {
                Some(path) => ServerConfig::load(&path)?,
                None => ServerConfig::default(),
            };
            config.apply_env()?;
            if let Some(listen) = listen {
                config.listen = listen;
            }
            config.validate()?;

            // Initialize tracing for logging
            tracing_subscriber::fmt()
                .with_env_filter(config.log_filter.as_str())
                .init();

            tracing::info!("Device Assistant {} starting...", env!("CARGO_PKG_VERSION"));

            let rt = Runtime::new()?;
            rt.block_on(api::serve(config))
        }
        Command::Ask { text, device_id } => {
            let resolution = IntentResolver::resolve(&text.join(" "));
            eprintln!("Intent: {}", resolution.intent.as_str());

            let response = AiResponse::from_resolution(resolution, device_id);
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}
