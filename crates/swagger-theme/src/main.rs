//! swagger-theme CLI - serve OpenAPI documents with a dark/light themed Swagger UI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "swagger-theme")]
#[command(about = "Serve OpenAPI documents with a dark/light themed Swagger UI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to theme.toml config file
    #[arg(short, long, default_value = "theme.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default theme.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Serve an OpenAPI document with the themed docs page
    Serve {
        /// OpenAPI document (.json, .yaml or .yml)
        #[arg(short, long)]
        spec: PathBuf,

        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// API title (defaults to the document's info.title)
        #[arg(short, long)]
        title: Option<String>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Serve a small demo API with the themed docs page
    Demo {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Serve {
            spec,
            port,
            host,
            title,
            no_open,
        } => {
            let options = commands::serve::ServeOptions {
                spec,
                port,
                host,
                title,
                open: !no_open,
            };
            commands::serve::run(&cli.config, options).await?;
        }
        Commands::Demo { port, no_open } => {
            commands::demo::run(&cli.config, port, !no_open).await?;
        }
    }

    Ok(())
}
