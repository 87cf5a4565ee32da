//! Key generation use case

use std::sync::Arc;

use crate::{
    model::OpaqueKey,
    ports::{EntropyError, EntropySource},
};

/// Mints opaque keys from a secure random source
pub struct KeyGenerator<E: EntropySource + ?Sized> {
    entropy: Arc<E>,
}

impl<E: EntropySource + ?Sized> Clone for KeyGenerator<E> {
    fn clone(&self) -> Self {
        Self {
            entropy: Arc::clone(&self.entropy),
        }
    }
}

impl<E: EntropySource + ?Sized> KeyGenerator<E> {
    pub fn new(entropy: Arc<E>) -> Self {
        Self { entropy }
    }

    /// Draw 32 bytes and encode them as 64 lowercase hex characters
    pub fn generate_key(&self) -> Result<OpaqueKey, EntropyError> {
        let bytes = self.entropy.secure_random_bytes(OpaqueKey::BYTE_LEN)?;

        if bytes.len() != OpaqueKey::BYTE_LEN {
            return Err(EntropyError::ShortRead {
                expected: OpaqueKey::BYTE_LEN,
                actual: bytes.len(),
            });
        }

        tracing::debug!(source = self.entropy.name(), "Generated opaque key");

        Ok(OpaqueKey::from_bytes(&bytes))
    }
}
