//! Layout constants for the canonical hyphenated UUID form.
//!
//! Every position and size used by the codec, the validator and the buffer helpers lives
//! here so the grammar is described in exactly one place.

/// Number of bytes in a binary UUID.
pub const UUID_BYTES_LEN: usize = 16;

/// Number of characters in the canonical hyphenated string.
pub const UUID_STR_LEN: usize = 36;

/// Zero-based character positions that must hold `-`.
pub const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Character position of the version nibble.
pub const VERSION_POSITION: usize = 14;

/// Character position of the variant nibble.
pub const VARIANT_POSITION: usize = 19;

/// Byte index carrying the version in its high nibble.
pub const VERSION_BYTE: usize = 6;

/// Byte index carrying the variant in its two most significant bits.
pub const VARIANT_BYTE: usize = 8;

/// Byte counts of the five hyphen-separated groups.
pub const GROUP_LAYOUT: [usize; 5] = [4, 2, 2, 2, 6];

/// Minimum capacity of a string output buffer: 36 characters plus a NUL terminator.
pub const STRING_BUFFER_MIN: usize = UUID_STR_LEN + 1;

/// Minimum capacity of a byte output buffer.
pub const BYTE_BUFFER_MIN: usize = UUID_BYTES_LEN;

/// Characters accepted at [`VARIANT_POSITION`].
pub const VARIANT_CHARS: [u8; 6] = *b"89aAbB";
