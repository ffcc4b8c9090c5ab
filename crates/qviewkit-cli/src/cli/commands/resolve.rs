//! `qviewkit resolve <link>` – well-known parameters with config fallbacks.

use anyhow::{Context, Result};
use qviewkit_core::config::QviewkitConfig;
use qviewkit_core::link;
use qviewkit_core::target::LinkTarget;
use std::io::Write;

pub fn run_resolve(
    out: &mut impl Write,
    text: &str,
    cfg: &QviewkitConfig,
    json: bool,
) -> Result<()> {
    let parsed = link::parse(text).with_context(|| format!("invalid deep link {:?}", text))?;
    let target = LinkTarget::resolve(&parsed, cfg);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&target)?)?;
        return Ok(());
    }

    writeln!(out, "{:<10} {}", "id", target.id)?;
    writeln!(out, "{:<10} {}", "repo", target.repo.as_deref().unwrap_or("-"))?;
    writeln!(out, "{:<10} {}", "origin", target.origin.as_deref().unwrap_or("-"))?;
    let created = target
        .timestamp
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());
    writeln!(out, "{:<10} {}", "created", created)?;
    for (key, value) in &target.extra {
        writeln!(out, "{:<10} {}", key, value)?;
    }
    Ok(())
}
