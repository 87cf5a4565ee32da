//! keymint domain crate
//!
//! This crate contains the identifier subsystem following hexagonal architecture:
//! - `model`: Opaque keys, digests, and metadata records
//! - `ports`: Trait definitions for platform capabilities (entropy, clock)
//! - `usecases`: Key generation, key hashing, metadata construction, and the mint flow

pub mod model;
pub mod ports;
pub mod usecases;

pub use model::*;
pub use ports::*;
pub use usecases::hash_key;
