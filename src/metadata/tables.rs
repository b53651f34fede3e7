//! Named-type lookup table for precomputed diagnostic strings.
//!
//! Non-generic, non-array, non-pointer "named" types that keep their low-level identity
//! through trimming can have a diagnostic string precomputed and stored by the host
//! runtime. The synthesizer treats this table as authoritative whenever an identity is
//! attached: a table miss for an identity-backed named type means no further fallback.
//!
//! # Key Components
//!
//! - [`NamedTypeTable`] - The one-method lookup capability the synthesizer is handed
//! - [`DiagnosticStringTable`] - Concurrent in-memory implementation for hosts and tests
//!
//! # Thread Safety
//!
//! The table is the only long-lived state the synthesizer touches, and it is mutated by
//! unrelated runtime activity outside this crate's control. Implementations must be safe
//! for concurrent reads while writes happen; [`DiagnosticStringTable`] uses `DashMap` and
//! satisfies this without external locking.

use dashmap::DashMap;

use crate::metadata::identity::TypeIdentity;

/// Read capability over the host's precomputed diagnostic strings for named types.
///
/// Injected into the synthesizer rather than reached through a global, so synthesis is
/// testable against a fake table.
pub trait NamedTypeTable: Send + Sync {
    /// Looks up the precomputed diagnostic string for a named type.
    ///
    /// For generic type definitions the stored string contains a bracketed placeholder
    /// group (`List[,]`); when `slots` is supplied, the implementation appends the byte
    /// offset of each placeholder position, left to right, so the caller can later splice
    /// concrete argument text. Offsets must be valid char-boundary insertion points into
    /// the returned string.
    ///
    /// Returns `None` on a miss; misses are availability signals, never errors.
    fn diagnostic_string(
        &self,
        identity: TypeIdentity,
        slots: Option<&mut Vec<usize>>,
    ) -> Option<String>;
}

/// A stored table entry: the display string plus placeholder offsets for generic definitions.
#[derive(Debug, Clone)]
struct TableEntry {
    display: String,
    slots: Vec<usize>,
}

/// Concurrent in-memory [`NamedTypeTable`].
///
/// Hosts populate it as types are assigned identities; readers synthesize concurrently
/// with no coordination.
///
/// # Example
///
/// ```rust
/// use trimscope::metadata::{identity::TypeIdentity, tables::{DiagnosticStringTable, NamedTypeTable}};
///
/// let table = DiagnosticStringTable::new();
/// table.insert(TypeIdentity::new(1), "Foo");
/// table.insert_generic(TypeIdentity::new(2), "List[,]", vec![5, 6]);
///
/// assert_eq!(table.diagnostic_string(TypeIdentity::new(1), None).as_deref(), Some("Foo"));
/// assert_eq!(table.diagnostic_string(TypeIdentity::new(3), None), None);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticStringTable {
    entries: DashMap<TypeIdentity, TableEntry>,
}

impl DiagnosticStringTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        DiagnosticStringTable {
            entries: DashMap::new(),
        }
    }

    /// Stores the diagnostic string for a non-generic named type.
    pub fn insert(&self, identity: TypeIdentity, display: impl Into<String>) {
        self.entries.insert(
            identity,
            TableEntry {
                display: display.into(),
                slots: Vec::new(),
            },
        );
    }

    /// Stores the diagnostic string for a generic type definition together with the byte
    /// offsets of its argument placeholder positions, in left-to-right order.
    pub fn insert_generic(
        &self,
        identity: TypeIdentity,
        display: impl Into<String>,
        slots: Vec<usize>,
    ) {
        self.entries.insert(
            identity,
            TableEntry {
                display: display.into(),
                slots,
            },
        );
    }

    /// True if the table holds an entry for the given identity.
    #[must_use]
    pub fn contains(&self, identity: TypeIdentity) -> bool {
        self.entries.contains_key(&identity)
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NamedTypeTable for DiagnosticStringTable {
    fn diagnostic_string(
        &self,
        identity: TypeIdentity,
        slots: Option<&mut Vec<usize>>,
    ) -> Option<String> {
        let entry = self.entries.get(&identity)?;
        if let Some(out) = slots {
            out.extend_from_slice(&entry.slots);
        }
        Some(entry.display.clone())
    }
}
