//! Identifier Generator
//!
//! Random URL-safe identifier suffixes for prefixed entity ids
//! (`thread-…`, `comment-…`, and so on).

use rand::Rng;

/// URL-safe alphabet (64 symbols)
const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_-";

/// Default suffix length
pub const DEFAULT_ID_LENGTH: usize = 16;

/// Source of identifier suffixes.
pub trait IdGenerator: Send + Sync {
    /// Generate a new suffix. The caller adds the entity prefix.
    fn generate(&self) -> String;
}

/// Random generator drawing from the URL-safe alphabet.
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    /// Create a generator producing suffixes of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Build a prefixed identifier, e.g. `prefixed_id("thread", gen)` → `thread-Xy12…`.
pub fn prefixed_id(prefix: &str, generator: &dyn IdGenerator) -> String {
    format!("{}-{}", prefix, generator.generate())
}
