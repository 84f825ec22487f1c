//! Typed wrapper for values known to be version 4 UUIDs.

use crate::codec::{decode, encode};
use crate::constants::{VARIANT_BYTE, VERSION_BYTE};
use crate::generator::generate_v4_bytes_with;
use crate::random::{thread_source, RandomByteSource};
use crate::{UuidBytes, UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// A UUID that is guaranteed to carry the version 4 and RFC 4122 variant markers.
///
/// The free functions in this crate work on raw [`UuidBytes`] and strings, where nothing stops
/// a caller from formatting arbitrary bytes. Once you hold a `UuidV4`, its canonical string
/// always passes [`crate::is_valid`] and always decodes back to the same value.
///
/// # When to use this type
/// Use this wrapper whenever you are:
/// - Accepting a UUID string from outside (command input, a config file, a network peer).
/// - Handing an identifier to code that will later re-validate it.
/// - Allocating fresh identifiers.
///
/// # Construction
/// - [`UuidV4::new`] generates a fresh value from the thread-local generator.
/// - [`UuidV4::generate_with`] generates from a caller-supplied [`RandomByteSource`].
/// - [`UuidV4::parse`] validates a canonical string.
/// - [`UuidV4::from_bytes`] checks the version and variant bits of raw bytes.
///
/// # Display format
/// Always the canonical 36-character lowercase hyphenated form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UuidV4(UuidBytes);

impl Default for UuidV4 {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidV4 {
    /// Generates a new random version 4 UUID.
    pub fn new() -> Self {
        Self::generate_with(&mut thread_source())
    }

    /// Generates a new version 4 UUID from `source`.
    pub fn generate_with<S: RandomByteSource + ?Sized>(source: &mut S) -> Self {
        Self(generate_v4_bytes_with(source))
    }

    /// Validates and parses a canonical version 4 string.
    ///
    /// Hex digits may be either case; the value is normalised to lowercase on display.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidFormat`] if `input` fails any grammar check.
    pub fn parse(input: &str) -> UuidResult<Self> {
        decode(input).map(Self)
    }

    /// Wraps raw bytes after checking their version and variant bits.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::NotVersion4`] if byte 6 does not have `4` in its high nibble or
    /// byte 8 does not have `10` in its top two bits.
    pub fn from_bytes(bytes: UuidBytes) -> UuidResult<Self> {
        let version = bytes[VERSION_BYTE];
        let variant = bytes[VARIANT_BYTE];
        if version >> 4 != 0x4 || variant & 0xc0 != 0x80 {
            return Err(UuidError::NotVersion4 { version, variant });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &UuidBytes {
        &self.0
    }

    pub fn into_bytes(self) -> UuidBytes {
        self.0
    }

    /// Returns the value as a `uuid::Uuid` for code that expects the standard type.
    pub fn uuid(&self) -> Uuid {
        Uuid::from_bytes(self.0)
    }
}

impl fmt::Display for UuidV4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&encode(&self.0))
    }
}

impl FromStr for UuidV4 {
    type Err = UuidError;

    /// Equivalent to [`UuidV4::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UuidV4::parse(s)
    }
}

impl TryFrom<UuidBytes> for UuidV4 {
    type Error = UuidError;

    fn try_from(bytes: UuidBytes) -> Result<Self, Self::Error> {
        UuidV4::from_bytes(bytes)
    }
}

impl TryFrom<Uuid> for UuidV4 {
    type Error = UuidError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        UuidV4::from_bytes(uuid.into_bytes())
    }
}

impl From<UuidV4> for Uuid {
    fn from(value: UuidV4) -> Self {
        value.uuid()
    }
}

impl From<UuidV4> for UuidBytes {
    fn from(value: UuidV4) -> Self {
        value.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UuidV4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&encode(&self.0))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UuidV4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UuidV4::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_valid, FormatError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLE: &str = "12345678-9abc-4de0-8123-456789abcdef";

    #[test]
    fn test_new_is_valid() {
        let id = UuidV4::new();
        assert!(is_valid(&id.to_string()));
    }

    #[test]
    fn test_new_agrees_with_uuid_crate() {
        let id = UuidV4::new().uuid();

        assert_eq!(id.get_version_num(), 4);
        assert_eq!(id.get_variant(), ::uuid::Variant::RFC4122);
    }

    #[test]
    fn test_parse_and_display() {
        let id = UuidV4::parse(SAMPLE).unwrap();
        assert_eq!(id.to_string(), SAMPLE);
    }

    #[test]
    fn test_display_honours_width_and_alignment() {
        let id = UuidV4::parse(SAMPLE).unwrap();

        assert_eq!(format!("{:>40}", id), format!("    {}", SAMPLE));
        assert_eq!(format!("{:<38}|", id), format!("{}  |", SAMPLE));
        assert_eq!(format!("{:^38}", id), format!(" {} ", SAMPLE));
    }

    #[test]
    fn test_parse_normalises_case() {
        let id = UuidV4::parse(&SAMPLE.to_uppercase()).unwrap();
        assert_eq!(id.to_string(), SAMPLE);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        let result = UuidV4::parse("12345678-9abc-1de0-8123-456789abcdef");
        assert!(matches!(
            result,
            Err(UuidError::InvalidFormat(FormatError::Version { found: b'1' }))
        ));
    }

    #[test]
    fn test_from_str() {
        let parsed: UuidV4 = SAMPLE.parse().unwrap();
        assert_eq!(parsed, UuidV4::parse(SAMPLE).unwrap());

        let result: Result<UuidV4, _> = "nope".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_from_bytes_checks_bits() {
        let mut bytes = [0u8; 16];
        assert_eq!(
            UuidV4::from_bytes(bytes),
            Err(UuidError::NotVersion4 {
                version: 0x00,
                variant: 0x00
            })
        );

        bytes[6] = 0x4d;
        bytes[8] = 0xc1; // variant bits 11
        assert!(UuidV4::from_bytes(bytes).is_err());

        bytes[8] = 0x81;
        let id = UuidV4::from_bytes(bytes).unwrap();
        assert_eq!(id.as_bytes(), &bytes);
        assert_eq!(id.into_bytes(), bytes);
    }

    #[test]
    fn test_uuid_crate_interop() {
        let id = UuidV4::parse(SAMPLE).unwrap();
        let std_uuid: Uuid = id.into();

        assert_eq!(std_uuid.hyphenated().to_string(), SAMPLE);
        assert_eq!(UuidV4::try_from(std_uuid), Ok(id));
        assert!(UuidV4::try_from(Uuid::nil()).is_err());
    }

    #[test]
    fn test_generate_with_seeded_source() {
        let a = UuidV4::generate_with(&mut StdRng::seed_from_u64(5));
        let b = UuidV4::generate_with(&mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_trip_new_to_string_to_parse() {
        let original = UuidV4::new();
        let parsed = UuidV4::parse(&original.to_string()).unwrap();

        assert_eq!(original, parsed);
    }

    #[test]
    fn test_hash_consistency() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = UuidV4::parse(SAMPLE).unwrap();
        let b = UuidV4::parse(&SAMPLE.to_uppercase()).unwrap();

        let mut hasher_a = DefaultHasher::new();
        let mut hasher_b = DefaultHasher::new();
        a.hash(&mut hasher_a);
        b.hash(&mut hasher_b);

        assert_eq!(hasher_a.finish(), hasher_b.finish());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let id = UuidV4::parse(SAMPLE).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", SAMPLE));

        let back: UuidV4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<UuidV4, _> =
            serde_json::from_str("\"12345678-9abc-4de0-c123-456789abcdef\"");
        let err = result.unwrap_err().to_string();

        assert!(err.contains("expected variant"));
    }
}
