//! Port definitions (traits) for platform capabilities
//!
//! The domain never reaches for ambient randomness or wall-clock time.
//! Adapters implement these traits to connect to the real platform.

use thiserror::Error;
use time::OffsetDateTime;

/// Error type for entropy source operations
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("Secure random source unavailable: {0}")]
    Unavailable(String),
    #[error("Secure random source returned {actual} bytes, expected {expected}")]
    ShortRead { expected: usize, actual: usize },
}

/// Port for a cryptographically secure random byte source
pub trait EntropySource: Send + Sync {
    /// Draw exactly `len` bytes of secure randomness
    fn secure_random_bytes(&self, len: usize) -> Result<Vec<u8>, EntropyError>;

    /// Short name used in logs and diagnostics (e.g., "os", "stub")
    fn name(&self) -> &'static str;
}

/// Port for time/clock operations (enables deterministic testing)
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> OffsetDateTime;
}

/// Real clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
