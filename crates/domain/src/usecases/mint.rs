//! Mint use case - generate, hash, and stamp a result identifier

use std::sync::Arc;

use thiserror::Error;

use crate::{
    model::MintedIdentifier,
    ports::{Clock, EntropyError, EntropySource},
    usecases::{
        key_generator::KeyGenerator,
        key_hasher::hash_key,
        metadata::{MetadataError, MetadataFactory},
    },
};

/// Error type for the mint flow
#[derive(Debug, Error)]
pub enum MintError {
    #[error(transparent)]
    Entropy(#[from] EntropyError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Runs the full identifier flow for a new result
///
/// Unlike [`MetadataFactory::create_metadata`], which accepts any string, the
/// record produced here always carries the digest of the key it minted.
pub struct MintUseCase<E, C>
where
    E: EntropySource + ?Sized,
    C: Clock + ?Sized,
{
    generator: KeyGenerator<E>,
    factory: MetadataFactory<C>,
}

impl<E, C> MintUseCase<E, C>
where
    E: EntropySource + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(entropy: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            generator: KeyGenerator::new(entropy),
            factory: MetadataFactory::new(clock),
        }
    }

    /// Mint a key, derive its digest, and stamp the digest with `theme`
    pub fn mint(&self, theme: &str) -> Result<MintedIdentifier, MintError> {
        let key = self.generator.generate_key()?;
        let digest = hash_key(key.as_str());
        let record = self.factory.create_metadata(digest.as_str(), theme)?;

        tracing::info!(
            hashed_key = %digest,
            theme = %theme,
            created_at = %record.created_at(),
            "Minted identifier"
        );

        Ok(MintedIdentifier {
            key,
            digest,
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use time::OffsetDateTime;
    use time::macros::datetime;

    /// Fills every request with the same byte
    struct ConstantEntropy(u8);

    impl EntropySource for ConstantEntropy {
        fn secure_random_bytes(&self, len: usize) -> Result<Vec<u8>, EntropyError> {
            Ok(vec![self.0; len])
        }

        fn name(&self) -> &'static str {
            "constant"
        }
    }

    struct FailingEntropy;

    impl EntropySource for FailingEntropy {
        fn secure_random_bytes(&self, _len: usize) -> Result<Vec<u8>, EntropyError> {
            Err(EntropyError::Unavailable("no entropy".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    /// Fixed instant that counts how often it is read
    struct CountingClock {
        at: OffsetDateTime,
        reads: AtomicUsize,
    }

    impl CountingClock {
        fn new(at: OffsetDateTime) -> Self {
            Self {
                at,
                reads: AtomicUsize::new(0),
            }
        }
    }

    impl Clock for CountingClock {
        fn now(&self) -> OffsetDateTime {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.at
        }
    }

    #[test]
    fn test_mint_links_record_to_digest_of_key() {
        let clock = Arc::new(CountingClock::new(datetime!(2024-01-01 12:00:00 UTC)));
        let usecase = MintUseCase::new(Arc::new(ConstantEntropy(0x5a)), Arc::clone(&clock));

        let minted = usecase.mint("jazz").unwrap();

        assert_eq!(minted.key.as_str(), "5a".repeat(32));
        assert_eq!(minted.digest, hash_key(minted.key.as_str()));
        assert_eq!(minted.record.hashed_key(), minted.digest.as_str());
        assert_eq!(minted.record.theme(), "jazz");
        assert_eq!(minted.record.created_at(), "2024-01-01T12:00:00.000Z");
        assert_eq!(clock.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_entropy_failure_skips_clock() {
        let clock = Arc::new(CountingClock::new(datetime!(2024-01-01 12:00:00 UTC)));
        let usecase = MintUseCase::new(Arc::new(FailingEntropy), Arc::clone(&clock));

        let result = usecase.mint("jazz");

        assert!(matches!(
            result,
            Err(MintError::Entropy(EntropyError::Unavailable(_)))
        ));
        assert_eq!(clock.reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_mint_works_through_trait_objects() {
        let entropy: Arc<dyn EntropySource> = Arc::new(ConstantEntropy(0x01));
        let clock: Arc<dyn Clock> =
            Arc::new(CountingClock::new(datetime!(2030-12-31 23:59:59.999 UTC)));
        let usecase = MintUseCase::new(entropy, clock);

        let minted = usecase.mint("").unwrap();

        assert_eq!(minted.record.theme(), "");
        assert_eq!(minted.record.created_at(), "2030-12-31T23:59:59.999Z");
    }

    #[test]
    fn test_mint_is_usable_across_threads() {
        let usecase = Arc::new(MintUseCase::new(
            Arc::new(ConstantEntropy(0x7f)),
            Arc::new(CountingClock::new(datetime!(2024-01-01 12:00:00 UTC))),
        ));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let usecase = Arc::clone(&usecase);
                std::thread::spawn(move || usecase.mint(&format!("theme-{}", i)).unwrap())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let minted = handle.join().unwrap();
            assert_eq!(minted.record.theme(), format!("theme-{}", i));
            assert_eq!(minted.record.hashed_key(), minted.digest.as_str());
        }
    }
}
