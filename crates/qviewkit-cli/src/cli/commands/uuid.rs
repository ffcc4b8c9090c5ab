//! `qviewkit uuid encode|decode`.

use anyhow::{Context, Result};
use qviewkit_core::uuid::{decode_uuid, encode_uuid};
use std::io::Write;

pub fn run_uuid_encode(out: &mut impl Write, timestamp: u64) -> Result<()> {
    writeln!(out, "{}", encode_uuid(timestamp))?;
    Ok(())
}

pub fn run_uuid_decode(out: &mut impl Write, id: &str) -> Result<()> {
    let ts = decode_uuid(id).with_context(|| format!("decode {:?}", id))?;
    writeln!(out, "{}", ts)?;
    Ok(())
}
