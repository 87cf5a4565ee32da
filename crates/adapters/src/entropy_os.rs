//! Operating-system CSPRNG entropy source

use keymint_domain::{EntropyError, EntropySource};

/// Entropy drawn from the OS secure random source (`getrandom`)
///
/// Failures are reported as [`EntropyError::Unavailable`]; there is no
/// fallback to a weaker generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropySource;

impl OsEntropySource {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropySource {
    fn secure_random_bytes(&self, len: usize) -> Result<Vec<u8>, EntropyError> {
        let mut buf = vec![0u8; len];
        getrandom::getrandom(&mut buf).map_err(|e| {
            tracing::error!(error = %e, "OS secure random source failed");
            EntropyError::Unavailable(e.to_string())
        })?;
        Ok(buf)
    }

    fn name(&self) -> &'static str {
        "os"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_returns_requested_length() {
        let source = OsEntropySource::new();

        for len in [0, 1, 32, 1024] {
            assert_eq!(source.secure_random_bytes(len).unwrap().len(), len);
        }
    }

    #[test]
    fn test_successive_draws_differ() {
        let source = OsEntropySource::new();

        let draws: HashSet<_> = (0..256)
            .map(|_| source.secure_random_bytes(32).unwrap())
            .collect();

        assert_eq!(draws.len(), 256);
    }
}
