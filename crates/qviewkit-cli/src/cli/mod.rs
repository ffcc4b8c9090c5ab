//! CLI for qviewkit deep links.

mod commands;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use qviewkit_core::config::{self, QviewkitConfig};
use std::io;
use std::path::{Path, PathBuf};

use commands::{run_build, run_parse, run_resolve, run_uuid_decode, run_uuid_encode};

/// Top-level CLI for qviewkit deep links.
#[derive(Debug, Parser)]
#[command(name = "qviewkit")]
#[command(about = "qviewkit: parse, resolve and build measurement deep links", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/qviewkit/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a qviewkit:// link and print its identifier and parameters.
    Parse {
        /// Deep link, e.g. qviewkit://ABCDEF?repo=https://measurements.phi.kit.edu
        link: String,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Resolve repository and origin for a link, using configured defaults for missing values.
    Resolve {
        /// Deep link to resolve.
        link: String,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Build a qviewkit:// link for a measurement identifier.
    Build {
        /// Measurement identifier (letters and digits).
        id: String,
        /// Query parameter to add; may be repeated.
        #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },

    /// Convert between Unix timestamps and qkit measurement identifiers.
    Uuid {
        #[command(subcommand)]
        action: UuidAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum UuidAction {
    /// Encode a Unix timestamp (seconds) into an identifier.
    Encode {
        timestamp: u64,
    },
    /// Decode an identifier into its Unix timestamp.
    Decode {
        id: String,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got {:?}", s))?;
    if key.is_empty() {
        return Err(anyhow!("empty key in {:?}", s));
    }
    Ok((key.to_string(), value.to_string()))
}

fn load_config(path: Option<&Path>) -> Result<QviewkitConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mut out = io::stdout().lock();
        match cli.command {
            CliCommand::Parse { link, json } => {
                run_parse(&mut out, &link, json || cfg.json_output)?
            }
            CliCommand::Resolve { link, json } => {
                run_resolve(&mut out, &link, &cfg, json || cfg.json_output)?
            }
            CliCommand::Build { id, params } => run_build(&mut out, &id, &params)?,
            CliCommand::Uuid { action } => match action {
                UuidAction::Encode { timestamp } => run_uuid_encode(&mut out, timestamp)?,
                UuidAction::Decode { id } => run_uuid_decode(&mut out, &id)?,
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
