//! RFC 4122 version 4 UUID generation, formatting and validation.
//!
//! A UUID exists in two encodings here:
//! - [`UuidBytes`]: 16 raw bytes.
//! - The canonical hyphenated string: 36 characters in 4-2-2-2-6 byte groups, for example
//!   `12345678-9abc-4de0-8123-456789abcdef`.
//!
//! This crate provides:
//! - [`generate_v4`] to produce a fresh random UUID string.
//! - [`encode`] / [`decode`] to move between bytes and the canonical string.
//! - [`is_valid`] / [`validate`] to check a string against the version 4 grammar.
//! - Buffer-based variants ([`encode_into`], [`decode_into`], [`generate_v4_into`]) for
//!   callers that hand in fixed-size output storage.
//! - A small wrapper type ([`UuidV4`]) that *guarantees* the version and variant bits once
//!   constructed.
//!
//! ## Canonical grammar
//! `xxxxxxxx-xxxx-4xxx-Nxxx-xxxxxxxxxxxx`
//! - Length: 36
//! - Hyphens at positions 8, 13, 18 and 23
//! - `x`: `0-9`, `a-f` or `A-F`
//! - Position 14: the literal `4`
//! - Position 19 (`N`): one of `8`, `9`, `a`, `A`, `b`, `B`
//!
//! ## Encode does not set bits
//! [`encode`] is a pure formatter. Bytes whose version and variant bits are not already set
//! produce a string that [`decode`] rejects. Use [`generate_v4`] or [`UuidV4`] when a valid
//! version 4 value is required.
//!
//! ## Randomness
//! Uniqueness is probabilistic and only as good as the [`RandomByteSource`] in use. The
//! default source is the thread-local generator from `rand`, so concurrent callers never
//! share state.

mod buffer;
mod codec;
pub mod constants;
mod generator;
mod random;
mod service;
mod validation;

// Re-export public types
pub use buffer::{decode_into, encode_into, generate_v4_into};
pub use codec::{decode, decode_opt, encode, encode_slice};
pub use generator::{
    generate_many, generate_v4, generate_v4_bytes_with, generate_v4_with, set_version_and_variant,
};
pub use random::{thread_source, RandomByteSource};
pub use service::{Uuid, UuidV4};
pub use validation::{is_valid, validate, FormatError};

/// Sixteen raw bytes of a UUID in network (big-endian) order.
pub type UuidBytes = [u8; constants::UUID_BYTES_LEN];

/// Error type for UUID operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// Input string failed one of the grammar checks
    #[error("invalid UUID format: {0}")]
    InvalidFormat(#[from] FormatError),

    /// Caller-supplied output buffer cannot hold the result
    #[error("output buffer too small: need {required}, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Bytes do not carry the version 4 and RFC 4122 variant markers
    #[error("not a version 4 UUID: version byte {version:#04x}, variant byte {variant:#04x}")]
    NotVersion4 { version: u8, variant: u8 },
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
