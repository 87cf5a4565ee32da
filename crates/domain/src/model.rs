//! Domain models and value objects

use serde::Serialize;
use std::fmt;

/// A freshly minted high-entropy identifier, rendered as lowercase hex
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OpaqueKey(String);

impl OpaqueKey {
    /// Number of random bytes behind every key
    pub const BYTE_LEN: usize = 32;

    /// Length of the hex rendering
    pub const HEX_LEN: usize = Self::BYTE_LEN * 2;

    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OpaqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OpaqueKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// SHA-256 fingerprint of an input string, used as a storage/lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Length of the hex rendering
    pub const HEX_LEN: usize = 64;

    pub(crate) fn from_hex(hex: String) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Immutable descriptor binding a hashed key to a theme and creation time
///
/// Fields are private so a record cannot be altered once built; use
/// [`crate::usecases::MetadataFactory`] to construct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    /// ISO-8601 UTC timestamp with millisecond precision
    created_at: String,
    /// Caller-chosen presentation label
    theme: String,
    /// Storage digest this record describes
    hashed_key: String,
}

impl MetadataRecord {
    pub(crate) fn new(created_at: String, theme: String, hashed_key: String) -> Self {
        Self {
            created_at,
            theme,
            hashed_key,
        }
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn hashed_key(&self) -> &str {
        &self.hashed_key
    }
}

/// Result of the end-to-end mint flow
#[derive(Debug, Clone, Serialize)]
pub struct MintedIdentifier {
    /// The raw key handed back to the client
    pub key: OpaqueKey,
    /// Digest of `key`, used for storage addressing
    pub digest: Digest,
    /// Metadata record whose `hashedKey` equals `digest`
    pub record: MetadataRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_serialize_as_plain_strings() {
        let key = OpaqueKey::from_bytes(&[0xab; OpaqueKey::BYTE_LEN]);
        let digest = Digest::from_hex("e3".repeat(32));

        assert_eq!(serde_json::to_value(&key).unwrap(), "ab".repeat(32));
        assert_eq!(serde_json::to_value(&digest).unwrap(), "e3".repeat(32));
        assert_eq!(key.as_str().len(), OpaqueKey::HEX_LEN);
    }

    #[test]
    fn test_minted_identifier_shape() {
        let key = OpaqueKey::from_bytes(&[0x01; OpaqueKey::BYTE_LEN]);
        let digest = Digest::from_hex("0f".repeat(32));
        let record = MetadataRecord::new(
            "2024-01-01T12:00:00.000Z".to_string(),
            "jazz".to_string(),
            digest.as_str().to_string(),
        );

        let value = serde_json::to_value(MintedIdentifier {
            key,
            digest,
            record,
        })
        .unwrap();

        assert_eq!(value["key"], "01".repeat(32));
        assert_eq!(value["record"]["hashedKey"], value["digest"]);
        assert_eq!(value["record"]["createdAt"], "2024-01-01T12:00:00.000Z");
    }
}
