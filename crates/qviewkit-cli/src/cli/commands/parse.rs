//! `qviewkit parse <link>` – print identifier and parameters.

use anyhow::{Context, Result};
use qviewkit_core::link;
use std::io::Write;

pub fn run_parse(out: &mut impl Write, text: &str, json: bool) -> Result<()> {
    let parsed = link::parse(text).with_context(|| format!("invalid deep link {:?}", text))?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&parsed)?)?;
        return Ok(());
    }

    writeln!(out, "{:<10} {}", "id", parsed.id())?;
    let mut params: Vec<_> = parsed.params().iter().collect();
    params.sort();
    for (key, value) in params {
        writeln!(out, "{:<10} {}", key, value)?;
    }
    Ok(())
}
