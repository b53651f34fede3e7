//! The stable [`TypeIdentity`] key that survives trimming.

use std::fmt;

/// A stable, pay-for-play-safe key for a type, usable even when rich reflection metadata
/// has been trimmed away.
///
/// Identities are opaque 64-bit values assigned by the host runtime. A type either has an
/// identity attached (it survived trimming far enough to keep its low-level representation)
/// or it does not; the synthesizer treats identity-backed lookups as strictly more reliable
/// than live reflection queries, which may themselves fail with the very missing-metadata
/// condition being diagnosed.
///
/// The zero value is reserved as the null identity, matching the host convention of a
/// default-initialized handle meaning "none attached".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeIdentity(pub u64);

impl TypeIdentity {
    /// Creates a new identity from a raw 64-bit value
    #[must_use]
    pub fn new(value: u64) -> Self {
        TypeIdentity(value)
    }

    /// Returns the raw identity value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns true if this is the null identity (value 0)
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for TypeIdentity {
    fn from(value: u64) -> Self {
        TypeIdentity(value)
    }
}

impl From<TypeIdentity> for u64 {
    fn from(identity: TypeIdentity) -> Self {
        identity.0
    }
}

impl fmt::Debug for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeIdentity(0x{:016x})", self.0)
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}
