//! keymint adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `entropy`: OS CSPRNG and seeded stub entropy sources
//! - `clock`: Fixed and stepping clocks for pinned or simulated time

mod clock;
mod entropy_os;
mod entropy_stub;

/// Re-exports for entropy adapters
pub mod entropy {
    pub use crate::entropy_os::OsEntropySource;
    pub use crate::entropy_stub::StubEntropySource;
}

/// Re-exports for clock adapters
pub mod clocks {
    pub use crate::clock::{FixedClock, SteppingClock};
    pub use keymint_domain::SystemClock;
}
