//! Conversion between [`UuidBytes`] and the canonical hyphenated string.

use crate::constants::{GROUP_LAYOUT, UUID_BYTES_LEN, UUID_STR_LEN};
use crate::validation::{validate, FormatError};
use crate::{UuidBytes, UuidResult};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writes the 36 canonical ASCII characters for `bytes` into `out`.
///
/// Shared by [`encode`] and the buffer-based helpers so both produce identical output.
pub(crate) fn write_canonical(bytes: &UuidBytes, out: &mut [u8; UUID_STR_LEN]) {
    let mut pos = 0;
    let mut byte_index = 0;

    for (group, len) in GROUP_LAYOUT.iter().enumerate() {
        if group > 0 {
            out[pos] = b'-';
            pos += 1;
        }
        for &byte in &bytes[byte_index..byte_index + len] {
            out[pos] = HEX_DIGITS[usize::from(byte >> 4)];
            out[pos + 1] = HEX_DIGITS[usize::from(byte & 0x0f)];
            pos += 2;
        }
        byte_index += len;
    }
}

/// Formats 16 bytes as the canonical lowercase hyphenated string.
///
/// This is a pure formatter. It does **not** set the version or variant bits, so bytes that
/// did not come from the generator may encode to a string that [`decode`] and
/// [`crate::is_valid`] reject.
///
/// # Arguments
///
/// * `bytes` - The 16 bytes to format, in order.
///
/// # Returns
///
/// Returns a 36-character string in 4-2-2-2-6 byte groups.
pub fn encode(bytes: &UuidBytes) -> String {
    let mut out = [0u8; UUID_STR_LEN];
    write_canonical(bytes, &mut out);
    out.iter().map(|&b| char::from(b)).collect()
}

/// Formats a byte slice that is expected to hold exactly 16 bytes.
///
/// # Panics
///
/// Panics if `bytes` is not exactly 16 bytes long. A wrong-length slice is a programming
/// error, not a data error.
pub fn encode_slice(bytes: &[u8]) -> String {
    let bytes: &UuidBytes = bytes.try_into().unwrap_or_else(|_| {
        panic!(
            "encode_slice requires {} bytes, got {}",
            UUID_BYTES_LEN,
            bytes.len()
        )
    });
    encode(bytes)
}

/// Parses a canonical version 4 string back into 16 bytes.
///
/// The input is fully validated first, including the version and variant characters, even
/// though plain hex decoding would not need them. Hex digits are case-insensitive.
///
/// # Errors
///
/// Returns [`crate::UuidError::InvalidFormat`] if `input` fails any grammar check. No partial
/// result is ever produced.
pub fn decode(input: &str) -> UuidResult<UuidBytes> {
    if let Err(reason) = validate(input) {
        tracing::trace!(%reason, "rejected UUID string");
        return Err(reason.into());
    }

    let mut bytes = UuidBytes::default();
    let mut byte_index = 0;
    let mut char_offset = 0;

    // validate guarantees five hyphen-separated groups of 8-4-4-4-12 hex digits
    for (group, len) in input.split('-').zip(GROUP_LAYOUT) {
        hex::decode_to_slice(group, &mut bytes[byte_index..byte_index + len])
            .map_err(|err| hex_error(err, char_offset, input.len()))?;
        byte_index += len;
        char_offset += group.len() + 1;
    }

    Ok(bytes)
}

/// Maps a `hex` failure inside the group starting at `offset` onto the grammar check it
/// corresponds to.
fn hex_error(err: hex::FromHexError, offset: usize, input_len: usize) -> FormatError {
    match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => FormatError::NonHex {
            position: offset + index,
            found: u8::try_from(c).unwrap_or(b'?'),
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            FormatError::Length { actual: input_len }
        }
    }
}

/// Like [`decode`], but discards the failure reason.
pub fn decode_opt(input: &str) -> Option<UuidBytes> {
    decode(input).ok()
}
