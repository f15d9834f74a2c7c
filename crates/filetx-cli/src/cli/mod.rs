//! CLI for the filetx `file:` transport.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use filetx_core::config::{self, TransportConfig};
use std::path::PathBuf;

use commands::{run_get, run_resolve};

/// Top-level CLI: fetch `file:` URLs the way an HTTP client would.
#[derive(Debug, Parser)]
#[command(name = "filetx")]
#[command(about = "Serve file: URLs as HTTP responses", long_about = None)]
pub struct Cli {
    /// Base directory for relative `file:` URLs (overrides the config file).
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the XDG config path.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a URL and write the body to stdout.
    Get {
        /// URL to fetch, e.g. file:///etc/hostname or file:notes.txt.
        url: String,

        /// Print the status line and headers before the body.
        #[arg(short = 'i', long)]
        include_headers: bool,
    },

    /// Print the filesystem path a `file:` URL resolves to.
    Resolve {
        /// `file:` URL to resolve.
        url: String,
    },
}

impl Cli {
    /// Loads config (explicit file or XDG default) and applies `--base-dir`.
    fn transport_config(&self) -> Result<TransportConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if let Some(dir) = &self.base_dir {
            cfg.base_dir = dir.clone();
        }
        Ok(cfg)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.transport_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                url,
                include_headers,
            } => run_get(&cfg, &url, include_headers)?,
            CliCommand::Resolve { url } => run_resolve(&cfg, &url)?,
        }

        Ok(())
    }
}
