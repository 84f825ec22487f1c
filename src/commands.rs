//! Command handlers.
//!
//! Handlers write to any `io::Write` so they can be exercised without a terminal.

use crate::config::RunConfig;
use anyhow::{Context, bail};
use std::io::Write;
use uuidv4::constants::UUID_BYTES_LEN;
use uuidv4::{UuidBytes, decode, encode, generate_v4_with, is_valid, thread_source, validate};

/// Writes `count` freshly generated UUIDs, one per line, as they are generated.
pub fn generate(config: &RunConfig, count: usize, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!(count, "generating UUIDs");
    let mut source = thread_source();
    for _ in 0..count {
        writeln!(out, "{}", config.render(generate_v4_with(&mut source)))?;
    }
    Ok(())
}

/// Formats 32 hex digits as a canonical UUID string.
///
/// The bytes are formatted as given. If they lack the version 4 markers the output is still
/// written, with a warning, since it will not decode back.
pub fn encode_hex(config: &RunConfig, hex_input: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let raw = hex::decode(hex_input.trim()).context("input must be hex digits")?;
    let bytes: UuidBytes = match raw.try_into() {
        Ok(bytes) => bytes,
        Err(raw) => bail!(
            "expected {} bytes ({} hex digits), got {}",
            UUID_BYTES_LEN,
            UUID_BYTES_LEN * 2,
            raw.len()
        ),
    };

    let encoded = encode(&bytes);
    if !is_valid(&encoded) {
        tracing::warn!(%encoded, "bytes lack version 4 markers; output will not decode");
    }
    writeln!(out, "{}", config.render(encoded))?;
    Ok(())
}

/// Decodes a canonical UUID string and writes its bytes as 32 lowercase hex digits.
pub fn decode_hex(input: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let bytes = decode(input).with_context(|| format!("cannot decode '{}'", input))?;
    writeln!(out, "{}", hex::encode(bytes))?;
    Ok(())
}

/// Reports `valid` or the first failed check for each input.
///
/// # Errors
///
/// Fails after reporting every input if any of them was invalid.
pub fn validate_all(inputs: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    let mut invalid = 0usize;
    for input in inputs {
        match validate(input) {
            Ok(()) => writeln!(out, "{}: valid", input)?,
            Err(reason) => {
                invalid += 1;
                writeln!(out, "{}: invalid: {}", input, reason)?;
            }
        }
    }

    if invalid > 0 {
        bail!("{} of {} inputs invalid", invalid, inputs.len());
    }
    Ok(())
}
