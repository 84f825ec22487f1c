//! Source of the random bytes behind every generated UUID.

use crate::UuidBytes;
use rand::rngs::ThreadRng;
use rand::RngCore;

/// Supplies 16 independent, uniformly distributed bytes per call.
///
/// The quality of the source bounds the uniqueness of generated UUIDs. A deterministic or
/// low-entropy source silently degrades it; nothing in this crate detects that.
///
/// Every [`rand::RngCore`] is a source, so the thread-local generator is used by default and a
/// seeded `StdRng` gives reproducible output in tests.
pub trait RandomByteSource {
    fn next_16_bytes(&mut self) -> UuidBytes;
}

impl<R: RngCore + ?Sized> RandomByteSource for R {
    fn next_16_bytes(&mut self) -> UuidBytes {
        let mut bytes = UuidBytes::default();
        self.fill_bytes(&mut bytes);
        bytes
    }
}

/// Returns the calling thread's generator.
///
/// Each thread gets its own lazily seeded, cryptographically secure generator, so concurrent
/// callers never contend on shared state.
pub fn thread_source() -> ThreadRng {
    rand::thread_rng()
}
