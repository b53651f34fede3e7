//! # trimscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the trimscope library. Import this module to get quick access to the essential
//! types for building missing-metadata diagnostics.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all trimscope operations
pub use crate::Error;

/// The result type used throughout trimscope
pub use crate::Result;

// ================================================================================================
// Identities and Lookup
// ================================================================================================

/// Stable pay-for-play-safe type key
pub use crate::metadata::identity::TypeIdentity;

/// Named-type lookup capability and the provided concurrent implementation
pub use crate::metadata::tables::{DiagnosticStringTable, NamedTypeTable};

// ================================================================================================
// Reflection Surface
// ================================================================================================

/// The host-implemented reflection surface and its shared handle
pub use crate::metadata::reflection::{ReflectedType, TypeHandle};

/// Diagnostic subjects and method parameter shape
pub use crate::metadata::reflection::{ParamAttributes, Parameter, Pertainant};

// ================================================================================================
// Diagnostic Synthesis
// ================================================================================================

/// The recursive display-string synthesizer
pub use crate::metadata::diagnostics::display::NameSynthesizer;

/// Error factory and message templates
pub use crate::metadata::diagnostics::creator::{DiagnosticFactory, MessageTemplate};

/// Sentinel text for names that could not be produced at all
pub use crate::metadata::diagnostics::UNAVAILABLE;
