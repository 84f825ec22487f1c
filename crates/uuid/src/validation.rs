//! Canonical version 4 grammar checks.

use crate::constants::{
    HYPHEN_POSITIONS, UUID_STR_LEN, VARIANT_CHARS, VARIANT_POSITION, VERSION_POSITION,
};

/// The first grammar check an input string failed.
///
/// Checks run in a fixed order (length, hyphens, hex digits, version, variant) and stop at
/// the first failure, so exactly one reason is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("expected 36 characters, got {actual}")]
    Length { actual: usize },

    #[error("expected '-' at position {position}, found '{}'", .found.escape_ascii())]
    Hyphen { position: usize, found: u8 },

    #[error("expected hex digit at position {position}, found '{}'", .found.escape_ascii())]
    NonHex { position: usize, found: u8 },

    #[error("expected version '4' at position 14, found '{}'", .found.escape_ascii())]
    Version { found: u8 },

    #[error("expected variant [89abAB] at position 19, found '{}'", .found.escape_ascii())]
    Variant { found: u8 },
}

/// Checks `input` against the canonical version 4 grammar.
///
/// Length is counted in bytes, not characters. A valid string is pure ASCII, so any multi-byte
/// character fails either the length check or the hex check.
///
/// The checks, in order:
/// 1. Exactly 36 bytes long
/// 2. `-` at positions 8, 13, 18 and 23
/// 3. Every other position is `0-9`, `a-f` or `A-F`
/// 4. Position 14 is the literal `4`
/// 5. Position 19 is one of `8`, `9`, `a`, `A`, `b`, `B`
///
/// # Errors
///
/// Returns the [`FormatError`] describing the first check that failed.
pub fn validate(input: &str) -> Result<(), FormatError> {
    let bytes = input.as_bytes();

    if bytes.len() != UUID_STR_LEN {
        return Err(FormatError::Length {
            actual: bytes.len(),
        });
    }

    for position in HYPHEN_POSITIONS {
        if bytes[position] != b'-' {
            return Err(FormatError::Hyphen {
                position,
                found: bytes[position],
            });
        }
    }

    if let Some((position, &found)) = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| !HYPHEN_POSITIONS.contains(i))
        .find(|(_, b)| !b.is_ascii_hexdigit())
    {
        return Err(FormatError::NonHex { position, found });
    }

    let version = bytes[VERSION_POSITION];
    if version != b'4' {
        return Err(FormatError::Version { found: version });
    }

    let variant = bytes[VARIANT_POSITION];
    if !VARIANT_CHARS.contains(&variant) {
        return Err(FormatError::Variant { found: variant });
    }

    Ok(())
}

/// Returns `true` if `input` is a canonical version 4 UUID string.
///
/// Equivalent to `validate(input).is_ok()`. Malformed input is an ordinary `false`, never a
/// panic.
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}
