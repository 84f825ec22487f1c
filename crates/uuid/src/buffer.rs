//! Fixed-capacity output buffers for binary-interop callers.
//!
//! These mirror the owned-value API but write into caller storage, as a host that passes raw
//! buffers across a language boundary would need. String outputs are NUL-terminated and need
//! at least [`STRING_BUFFER_MIN`] bytes; byte outputs need at least [`BYTE_BUFFER_MIN`].
//!
//! A buffer that is too small is rejected before anything is written. Truncating would leave
//! a plausible-looking but corrupt identifier behind.

use crate::codec::{decode, write_canonical};
use crate::constants::{BYTE_BUFFER_MIN, STRING_BUFFER_MIN, UUID_STR_LEN};
use crate::generator::generate_v4_bytes_with;
use crate::random::RandomByteSource;
use crate::{UuidBytes, UuidError, UuidResult};

fn ensure_capacity(required: usize, actual: usize) -> UuidResult<()> {
    if actual < required {
        tracing::debug!(required, actual, "output buffer too small");
        return Err(UuidError::BufferTooSmall { required, actual });
    }
    Ok(())
}

/// Writes the canonical string for `bytes` into `out`, followed by a NUL terminator.
///
/// # Returns
///
/// Returns the number of characters written, excluding the terminator (always 36).
///
/// # Errors
///
/// Returns [`UuidError::BufferTooSmall`] if `out` is shorter than 37 bytes. `out` is left
/// untouched.
pub fn encode_into(bytes: &UuidBytes, out: &mut [u8]) -> UuidResult<usize> {
    ensure_capacity(STRING_BUFFER_MIN, out.len())?;
    Ok(write_terminated(bytes, out))
}

/// Writes the canonical string and its terminator. `out` must already hold at least
/// [`STRING_BUFFER_MIN`] bytes.
fn write_terminated(bytes: &UuidBytes, out: &mut [u8]) -> usize {
    let mut canonical = [0u8; UUID_STR_LEN];
    write_canonical(bytes, &mut canonical);
    out[..UUID_STR_LEN].copy_from_slice(&canonical);
    out[UUID_STR_LEN] = 0;
    UUID_STR_LEN
}

/// Generates a version 4 UUID from `source` straight into `out`.
///
/// Capacity is checked once, before any randomness is drawn, so a rejected buffer does not
/// consume bytes from `source`.
///
/// # Errors
///
/// Returns [`UuidError::BufferTooSmall`] if `out` is shorter than 37 bytes.
pub fn generate_v4_into<S: RandomByteSource + ?Sized>(
    source: &mut S,
    out: &mut [u8],
) -> UuidResult<usize> {
    ensure_capacity(STRING_BUFFER_MIN, out.len())?;
    Ok(write_terminated(&generate_v4_bytes_with(source), out))
}

/// Decodes `input` into the first 16 bytes of `out`.
///
/// # Returns
///
/// Returns the number of bytes written (always 16).
///
/// # Errors
///
/// - [`UuidError::BufferTooSmall`] if `out` is shorter than 16 bytes.
/// - [`UuidError::InvalidFormat`] if `input` is not a canonical version 4 string.
///
/// `out` is left untouched on any error.
pub fn decode_into(input: &str, out: &mut [u8]) -> UuidResult<usize> {
    ensure_capacity(BYTE_BUFFER_MIN, out.len())?;

    let bytes = decode(input)?;
    out[..BYTE_BUFFER_MIN].copy_from_slice(&bytes);

    Ok(BYTE_BUFFER_MIN)
}
