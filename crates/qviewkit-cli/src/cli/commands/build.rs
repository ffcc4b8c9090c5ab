//! `qviewkit build <id> [-p KEY=VALUE]...` – print a link.

use anyhow::Result;
use qviewkit_core::ParsedLink;
use std::io::Write;

pub fn run_build(out: &mut impl Write, id: &str, params: &[(String, String)]) -> Result<()> {
    let mut link = ParsedLink::new(id)?;
    for (key, value) in params {
        link = link.with_param(key.as_str(), value.as_str())?;
    }
    tracing::debug!("built link for id={}", id);
    writeln!(out, "{}", link)?;
    Ok(())
}
