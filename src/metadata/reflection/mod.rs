//! Live reflection surface consumed by the diagnostic name synthesizer.
//!
//! This module defines the trait boundary between the synthesizer and the host runtime's
//! reflection implementation. The synthesizer never owns type objects; it walks handles
//! supplied by the host, asking shape questions (`is_array`, `is_constructed_generic`, ...)
//! and name questions (`name_if_available`, `full_name`).
//!
//! # Architecture
//!
//! Every query that can be defeated by trimmed metadata signals availability through its
//! return type rather than by raising:
//!
//! - [`ReflectedType::identity`] - `None` when no stable low-level identity is attached
//! - [`ReflectedType::name_if_available`] - `None` when even the short name was trimmed
//! - [`ReflectedType::full_name`] - the one call that reports failure as a real error
//!   ([`Error::MissingMetadata`](crate::Error::MissingMetadata)), because hosts surface it
//!   that way; the synthesizer catches it locally and degrades
//!
//! The identity bridge half of the surface lives here too:
//! [`ReflectedType::generic_instantiation`] answers purely from the attached identity,
//! without touching reflection state that may itself be unavailable.
//!
//! # Key Components
//!
//! - [`ReflectedType`] - The reflection surface trait implemented by the host
//! - [`TypeHandle`] - Shared handle to a reflected type
//! - [`Parameter`], [`ParamAttributes`] - Method parameter shape
//! - [`Pertainant`] - The "thing reflection failed about"
//!
//! # Thread Safety
//!
//! Handles are `Send + Sync`; the synthesizer only performs reads, so implementations must
//! be safe for concurrent read access.

mod member;

pub use member::{ParamAttributes, Parameter, Pertainant};

use std::sync::Arc;

use crate::{metadata::identity::TypeIdentity, Result};

/// A shared handle to a reflected type.
///
/// Element types and generic arguments are returned as fresh handles, so the synthesizer
/// can recurse without borrowing into the host's object graph.
pub type TypeHandle = Arc<dyn ReflectedType>;

/// The reflection surface of a single type, as exposed by the host runtime.
///
/// Implementations describe one type each; structural queries return further handles.
/// Shape predicates default to the simplest answer (`false`, `None`, empty) so that fake
/// and host implementations only override what applies to the shape they model.
///
/// # Availability Contract
///
/// A query answering `None` means the metadata behind it was trimmed, not that the answer
/// is the empty value. Implementations must never substitute empty strings for missing
/// names.
pub trait ReflectedType: Send + Sync {
    /// The stable low-level identity attached to this type, if one survived trimming.
    ///
    /// Identity-backed lookups are pay-for-play safe and are always preferred by the
    /// synthesizer over live reflection queries.
    fn identity(&self) -> Option<TypeIdentity> {
        None
    }

    /// True if this type wraps an element type (array, pointer, or by-reference).
    fn has_element_type(&self) -> bool {
        false
    }

    /// True if this type is an array type.
    fn is_array(&self) -> bool {
        false
    }

    /// The rank (dimension count) of an array type. Meaningless unless [`is_array`](Self::is_array).
    fn array_rank(&self) -> u32 {
        1
    }

    /// The element type of an array, pointer, or by-reference type.
    ///
    /// For arrays this query is not pay-for-play safe; the synthesizer only invokes it
    /// when an identity is attached.
    fn element_type(&self) -> Option<TypeHandle> {
        None
    }

    /// True if this type is a pointer type.
    fn is_pointer(&self) -> bool {
        false
    }

    /// True if this type is a by-reference type.
    fn is_by_ref(&self) -> bool {
        false
    }

    /// True if this type is a generic type definition combined with concrete arguments,
    /// as reported by live reflection state.
    fn is_constructed_generic(&self) -> bool {
        false
    }

    /// The generic type definition of a constructed generic type, via live reflection.
    fn generic_type_definition(&self) -> Option<TypeHandle> {
        None
    }

    /// The ordered generic arguments of a constructed generic type, via live reflection.
    fn generic_type_arguments(&self) -> Vec<TypeHandle> {
        Vec::new()
    }

    /// Identity-bridge introspection: the generic definition and ordered arguments of a
    /// constructed generic type, recovered purely from the attached identity.
    ///
    /// Returns `None` when no identity is attached or the identity does not describe a
    /// generic instantiation. When this answers, the synthesizer uses it instead of
    /// [`generic_type_definition`](Self::generic_type_definition) /
    /// [`generic_type_arguments`](Self::generic_type_arguments), since those may re-enter
    /// reflection state that is itself unavailable.
    fn generic_instantiation(&self) -> Option<(TypeHandle, Vec<TypeHandle>)> {
        None
    }

    /// True if this type is an open generic parameter (`T` in `List<T>`).
    fn is_generic_parameter(&self) -> bool {
        false
    }

    /// True if this type is a generic type definition that has not been instantiated.
    fn is_generic_type_definition(&self) -> bool {
        false
    }

    /// The number of generic parameters a generic type definition declares.
    fn generic_arity(&self) -> usize {
        0
    }

    /// The type's short name, or `None` if even that was trimmed.
    ///
    /// Availability of the short name doubles as the proxy signal that a
    /// [`full_name`](Self::full_name) query is safe to attempt at all.
    fn name_if_available(&self) -> Option<String>;

    /// The type's namespace-qualified name.
    ///
    /// # Errors
    /// Returns [`Error::MissingMetadata`](crate::Error::MissingMetadata) when the qualified
    /// name was trimmed from the build. Callers inside this crate catch that case locally
    /// and fall back to the short name.
    fn full_name(&self) -> Result<String>;

    /// The raw, possibly-unhelpful textual form of this type.
    ///
    /// Used only as the last-resort text in "no further help available" messages; must
    /// always produce something, even for a fully trimmed type.
    fn raw_display(&self) -> String;
}
