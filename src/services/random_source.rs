use ring::rand::{SecureRandom, SystemRandom};

/// Trait defining a source of uniformly distributed random integers.
///
/// Production code uses [`SystemRandomSource`]; tests substitute a
/// fixed-sequence fake for deterministic output.
pub trait RandomSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Returns a uniformly distributed value in `[0, bound)`.
    ///
    /// Uses rejection sampling: draws at or above the largest multiple of
    /// `bound` representable in a `u32` are retried, so the result carries
    /// no modulo bias.
    fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "bound must be positive");
        let zone = u32::MAX - (u32::MAX % bound);
        loop {
            let value = self.next_u32();
            if value < zone {
                return value % bound;
            }
        }
    }
}

/// Random source backed by the OS CSPRNG via `ring`.
///
/// Each instance draws independently; no seed state is shared across calls.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.rng
            .fill(&mut bytes)
            .expect("Failed to generate random bytes");
        u32::from_le_bytes(bytes)
    }
}
