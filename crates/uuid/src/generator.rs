//! Random version 4 UUID generation.

use crate::codec::encode;
use crate::constants::{VARIANT_BYTE, VERSION_BYTE};
use crate::random::{thread_source, RandomByteSource};
use crate::UuidBytes;

/// Forces the version 4 and RFC 4122 variant markers into `bytes`.
///
/// - Byte 6: high nibble cleared and set to `4`.
/// - Byte 8: top two bits cleared and set to `10`.
///
/// All other bits are left as they were.
pub fn set_version_and_variant(bytes: &mut UuidBytes) {
    bytes[VERSION_BYTE] = (bytes[VERSION_BYTE] & 0x0f) | 0x40;
    bytes[VARIANT_BYTE] = (bytes[VARIANT_BYTE] & 0x3f) | 0x80;
}

/// Draws 16 bytes from `source` and marks them as version 4.
pub fn generate_v4_bytes_with<S: RandomByteSource + ?Sized>(source: &mut S) -> UuidBytes {
    let mut bytes = source.next_16_bytes();
    set_version_and_variant(&mut bytes);
    bytes
}

/// Generates a version 4 UUID string using `source` for randomness.
///
/// Every output passes [`crate::is_valid`]. Uniqueness is only as strong as `source`.
pub fn generate_v4_with<S: RandomByteSource + ?Sized>(source: &mut S) -> String {
    encode(&generate_v4_bytes_with(source))
}

/// Generates a version 4 UUID string from the calling thread's generator.
///
/// Two calls return different values with overwhelming probability; this is not a
/// coordinated uniqueness guarantee.
pub fn generate_v4() -> String {
    generate_v4_with(&mut thread_source())
}

/// Lazily generates `count` version 4 UUID strings from one thread-local source.
///
/// Nothing is allocated up front, so a huge `count` costs only what the caller consumes.
pub fn generate_many(count: usize) -> impl Iterator<Item = String> {
    tracing::debug!(count, "generating UUID batch");
    let mut source = thread_source();
    (0..count).map(move |_| generate_v4_with(&mut source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode, is_valid};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    struct Fixed(UuidBytes);

    impl RandomByteSource for Fixed {
        fn next_16_bytes(&mut self) -> UuidBytes {
            self.0
        }
    }

    #[test]
    fn test_set_version_and_variant_masks() {
        let mut all_set = [0xffu8; 16];
        set_version_and_variant(&mut all_set);
        assert_eq!(all_set[6], 0x4f);
        assert_eq!(all_set[8], 0xbf);

        let mut all_clear = [0u8; 16];
        set_version_and_variant(&mut all_clear);
        assert_eq!(all_clear[6], 0x40);
        assert_eq!(all_clear[8], 0x80);

        // Untouched elsewhere
        assert!(all_set
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 6 && *i != 8)
            .all(|(_, &b)| b == 0xff));
    }

    #[test]
    fn test_generated_format_invariant() {
        for _ in 0..1_000 {
            let s = generate_v4();

            assert!(is_valid(&s), "generated invalid UUID: {s}");
            assert_eq!(s.len(), 36);
            for pos in [8, 13, 18, 23] {
                assert_eq!(s.as_bytes()[pos], b'-');
            }
            assert_eq!(s.as_bytes()[14], b'4');
            assert!(b"89ab".contains(&s.as_bytes()[19]));
        }
    }

    #[test]
    fn test_generated_is_lowercase() {
        let s = generate_v4();
        assert_eq!(s, s.to_lowercase());
    }

    #[test]
    fn test_uniqueness_over_ten_thousand() {
        let ids: Vec<String> = generate_many(10_000).collect();
        let unique: HashSet<&String> = ids.iter().collect();

        assert_eq!(ids.len(), 10_000);
        assert_eq!(unique.len(), 10_000);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_v4_with(&mut StdRng::seed_from_u64(2024));
        let b = generate_v4_with(&mut StdRng::seed_from_u64(2024));

        assert_eq!(a, b);
        assert!(is_valid(&a));
    }

    #[test]
    fn test_fixed_source_bits_forced() {
        let s = generate_v4_with(&mut Fixed([0u8; 16]));
        assert_eq!(s, "00000000-0000-4000-8000-000000000000");

        let s = generate_v4_with(&mut Fixed([0xffu8; 16]));
        assert_eq!(s, "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    #[test]
    fn test_generated_round_trips() {
        let mut source = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let bytes = generate_v4_bytes_with(&mut source);
            assert_eq!(decode(&encode(&bytes)), Ok(bytes));
        }
    }

    #[test]
    fn test_concurrent_generation() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| generate_many(500).collect::<Vec<_>>()))
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(is_valid(&id));
                all.insert(id);
            }
        }

        assert_eq!(all.len(), 2_000);
    }

    #[test]
    fn test_generate_many_zero() {
        assert_eq!(generate_many(0).count(), 0);
    }

    #[test]
    fn test_generate_many_huge_count_is_lazy() {
        let first: Vec<String> = generate_many(usize::MAX).take(3).collect();

        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|id| is_valid(id)));
    }
}
