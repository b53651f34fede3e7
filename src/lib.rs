// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # trimscope
//!
//! Best-effort diagnostic name synthesis for reflection over trimmed .NET metadata.
//!
//! When a build strips ("trims") type metadata to reduce footprint, reflection over a
//! trimmed type can fail at run time because the data needed to answer the query is gone.
//! `trimscope` reconstructs the most helpful possible human-readable name for the
//! offending type or member from whatever partial information still exists, so the
//! resulting diagnostic tells the developer exactly what to preserve. It never recovers
//! or loads metadata; it only degrades gracefully around its absence.
//!
//! ## Features
//!
//! - **Recursive name synthesis** - Arrays, pointers, by-reference types, and generic
//!   instantiations are reconstructed piece by piece from partial sources
//! - **Availability-aware fallback** - Identity-backed lookups first, live reflection
//!   last, explicit unavailability instead of crashes or invented text
//! - **Generic-argument splicing** - Placeholder slots in a definition's string are
//!   filled right to left, with arity mismatches repaired rather than refused
//! - **Full signature rendering** - Methods format with generic arguments and
//!   `ref`/`out` parameter prefixes
//! - **Injected collaborators** - The named-type table and reflection surface are trait
//!   objects, so everything is testable against fakes
//!
//! ## Quick Start
//!
//! ```rust
//! use trimscope::prelude::*;
//!
//! // The host runtime populates the table as types are assigned identities.
//! let table = DiagnosticStringTable::new();
//! table.insert(TypeIdentity::new(1), "System.Collections.Generic.List");
//!
//! // When reflection fails over a type, build the most helpful error still possible.
//! let factory = DiagnosticFactory::new(&table);
//! let err = factory.missing_metadata(MessageTemplate::MissingMetadata, None);
//! assert!(err.to_string().contains("<unavailable>"));
//! ```
//!
//! ## Architecture
//!
//! - [`metadata::identity`] - [`TypeIdentity`](metadata::identity::TypeIdentity), the
//!   stable pay-for-play-safe key a type keeps even when rich metadata is trimmed
//! - [`metadata::reflection`] - The trait boundary to the host's live reflection state
//! - [`metadata::tables`] - The injected named-type lookup capability
//! - [`metadata::diagnostics`] - Synthesis, pertainant formatting, and error creation
//!
//! ## Error Handling
//!
//! Availability is signaled through `Option` everywhere inside synthesis; the only real
//! error object is [`Error::MissingMetadata`], which is both the factory's product and
//! the failure a host's full-name query reports. That one failure is caught locally
//! during synthesis and converted into field-level unavailability, so diagnosing a
//! diagnostic failure cannot regress infinitely.
//!
//! ## Thread Safety
//!
//! Synthesis is purely functional over its inputs and safe to invoke concurrently,
//! provided the injected table and the host's reflection handles are safe for
//! concurrent reads. The provided [`DiagnosticStringTable`](metadata::tables::DiagnosticStringTable)
//! is; it is built for being populated by unrelated runtime activity while readers
//! synthesize.

pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use trimscope::prelude::*;
///
/// let table = DiagnosticStringTable::new();
/// let factory = DiagnosticFactory::new(&table);
/// ```
pub mod prelude;

/// Type identities, the reflection surface, and diagnostic synthesis.
///
/// # Key Components
///
/// - [`metadata::identity::TypeIdentity`] - Stable key for a type that survives trimming
/// - [`metadata::reflection::ReflectedType`] - The host-implemented reflection surface
/// - [`metadata::tables::NamedTypeTable`] - Injected lookup for precomputed names
/// - [`metadata::diagnostics::display::NameSynthesizer`] - The recursive synthesizer
/// - [`metadata::diagnostics::creator::DiagnosticFactory`] - Final error construction
pub mod metadata;

/// `trimscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. Used for the few operations that report real errors rather than
/// availability.
pub type Result<T> = std::result::Result<T, Error>;

/// `trimscope` Error type
///
/// The main error type for this crate: the diagnostic the factory functions build, and
/// the failure shape host reflection surfaces use for trimmed full-name queries.
pub use error::Error;
