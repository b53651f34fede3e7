//! Best-effort diagnostic name synthesis for trimmed reflection metadata.
//!
//! When a reflection operation fails because the metadata behind it was trimmed from the
//! build, the most useful thing a diagnostic can do is name the type or member precisely
//! enough for the developer to know what to preserve. This module reconstructs such names
//! from whatever partial information still exists, degrading explicitly instead of
//! crashing or inventing text.
//!
//! # Architecture
//!
//! Synthesis runs through three layers, each falling back to the next-less-specific
//! answer:
//!
//! 1. [`display::NameSynthesizer`] - recursive, shape-dispatched display-string synthesis
//!    for a single type, including the generic-argument splicing that reconciles a
//!    definition's placeholder slots with supplied arguments
//! 2. The pertainant formatter ([`display::NameSynthesizer::useful_pertainant`]) - renders
//!    the full subject of the failure: a type, a member, or a method with generic
//!    arguments and parameter list
//! 3. [`creator::DiagnosticFactory`] - selects a message template and builds the final
//!    [`Error`](crate::Error), substituting the raw pertainant text when no useful name
//!    could be built at all
//!
//! Two failure levels are kept distinct throughout: a `None` from synthesis of one piece
//! is recoverable (a less specific message is produced), while a `None` from the
//! pertainant formatter means giving up entirely and falling back to the pertainant's raw
//! textual form.
//!
//! # Thread Safety
//!
//! Synthesis is purely functional over its inputs: no locks, no I/O, no shared mutable
//! state. It is safe to invoke concurrently from any number of threads provided the
//! injected [`NamedTypeTable`](crate::metadata::tables::NamedTypeTable) and the host's
//! reflection handles are safe for concurrent reads.

pub mod creator;
pub mod display;

mod pertainant;

/// Sentinel text substituted wherever no name could be produced at all.
///
/// Used for an absent pertainant, and spliced in place of a generic argument or parameter
/// type whose own synthesis came back empty. Making the gap visible beats dropping it.
pub const UNAVAILABLE: &str = "<unavailable>";
