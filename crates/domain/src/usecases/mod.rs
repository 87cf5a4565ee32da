//! Application use cases

pub mod key_generator;
pub mod key_hasher;
pub mod metadata;
pub mod mint;

pub use key_generator::KeyGenerator;
pub use key_hasher::hash_key;
pub use metadata::{MetadataError, MetadataFactory, format_created_at};
pub use mint::{MintError, MintUseCase};
