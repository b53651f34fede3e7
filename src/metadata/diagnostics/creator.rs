//! Construction of the final missing-metadata errors.
//!
//! Thin glue over the synthesizer: each factory function picks a message template,
//! renders the most useful pertainant text available, and wraps the formatted message
//! in [`Error::MissingMetadata`](crate::Error::MissingMetadata). When nothing useful
//! could be rendered at all, the no-help template carries the pertainant's raw text
//! (or the literal [`UNAVAILABLE`] sentinel for an absent pertainant) instead.

use std::fmt;

use crate::{
    metadata::{
        diagnostics::{display::NameSynthesizer, UNAVAILABLE},
        reflection::{Pertainant, TypeHandle},
        tables::NamedTypeTable,
    },
    Error,
};

/// Message template identifiers for missing-metadata diagnostics.
///
/// The two-entry catalog the factory selects from; the text lives here rather than in a
/// localized resource system, which is out of scope for this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageTemplate {
    /// Metadata for a nameable subject was trimmed; names what to preserve.
    MissingMetadata,

    /// No useful name could be built; carries only the subject's raw textual form.
    NoHelpAvailable,
}

impl MessageTemplate {
    /// Format this template with the pertainant text substituted in.
    #[must_use]
    pub fn format(&self, pertainant: &str) -> String {
        match self {
            MessageTemplate::MissingMetadata => format!(
                "'{pertainant}' is missing metadata. Keep the type or member when trimming to make this operation work."
            ),
            MessageTemplate::NoHelpAvailable => format!(
                "This operation failed because metadata was trimmed, and no further information about the missing metadata is available: '{pertainant}'."
            ),
        }
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageTemplate::MissingMetadata => write!(f, "MissingMetadata"),
            MessageTemplate::NoHelpAvailable => write!(f, "NoHelpAvailable"),
        }
    }
}

/// Builds missing-metadata errors with the most helpful names that can still be
/// synthesized.
///
/// One factory per injected table; cheap to construct, holds no state of its own.
pub struct DiagnosticFactory<'a> {
    names: NameSynthesizer<'a>,
}

impl<'a> DiagnosticFactory<'a> {
    /// Create a factory over the given named-type table
    ///
    /// ## Arguments
    /// * 'table' - Lookup capability for identity-keyed diagnostic strings
    #[must_use]
    pub fn new(table: &'a dyn NamedTypeTable) -> Self {
        DiagnosticFactory {
            names: NameSynthesizer::new(table),
        }
    }

    /// The synthesizer this factory renders names with.
    #[must_use]
    pub fn names(&self) -> &NameSynthesizer<'a> {
        &self.names
    }

    /// Build the error for a reflection failure over the given pertainant.
    ///
    /// An absent pertainant, or one for which no useful name can be built, downgrades
    /// to the no-help template; this function never panics.
    ///
    /// ## Arguments
    /// * 'template'   - The template to use when a useful name exists
    /// * 'pertainant' - The subject of the failure, if any
    #[must_use]
    pub fn missing_metadata(
        &self,
        template: MessageTemplate,
        pertainant: Option<&Pertainant>,
    ) -> Error {
        let Some(pertainant) = pertainant else {
            return Error::MissingMetadata(
                MessageTemplate::NoHelpAvailable.format(UNAVAILABLE),
            );
        };

        match self.names.useful_pertainant(pertainant) {
            Some(useful) => Error::MissingMetadata(template.format(&useful)),
            None => Error::MissingMetadata(
                MessageTemplate::NoHelpAvailable.format(&pertainant.raw_display()),
            ),
        }
    }

    /// Build the error for a missing array type over the given element type.
    ///
    /// Callers must pass `is_multi_dim == true` for any rank other than 1; violating
    /// that is a caller contract breach, checked in debug builds.
    ///
    /// ## Arguments
    /// * 'element_type' - The array's element type
    /// * 'is_multi_dim' - True for multi-dimensional array requests
    /// * 'rank'         - The requested rank
    #[must_use]
    pub fn missing_array_type(
        &self,
        element_type: &TypeHandle,
        is_multi_dim: bool,
        rank: u32,
    ) -> Error {
        debug_assert!(rank == 1 || is_multi_dim);
        self.from_string(self.names.array_string(element_type, rank))
    }

    /// Build the error for a missing constructed generic type.
    ///
    /// ## Arguments
    /// * 'definition' - The generic type definition
    /// * 'arguments'  - The ordered concrete argument types
    #[must_use]
    pub fn missing_constructed_generic_type(
        &self,
        definition: &TypeHandle,
        arguments: &[TypeHandle],
    ) -> Error {
        self.from_string(self.names.constructed_generic_string(definition, arguments))
    }

    /// Build the error for a missing nested type under a declaring type.
    ///
    /// The nested name is stripped of any backtick arity suffix (`` List`1 `` becomes
    /// `List`) before being appended. An unnameable or absent declaring type downgrades
    /// to the no-help template.
    ///
    /// ## Arguments
    /// * 'declaring_type' - The type declaring the nested type, if any
    /// * 'nested_name'    - The nested type's metadata name
    #[must_use]
    pub fn missing_nested_type(
        &self,
        declaring_type: Option<&TypeHandle>,
        nested_name: &str,
    ) -> Error {
        let Some(declaring_type) = declaring_type else {
            return Error::MissingMetadata(
                MessageTemplate::NoHelpAvailable.format(UNAVAILABLE),
            );
        };

        match self.names.display_string(declaring_type) {
            Some(declaring) => {
                let nested = strip_arity_suffix(nested_name);
                Error::MissingMetadata(
                    MessageTemplate::MissingMetadata.format(&format!("{declaring}.{nested}")),
                )
            }
            None => Error::MissingMetadata(
                MessageTemplate::NoHelpAvailable.format(&declaring_type.raw_display()),
            ),
        }
    }

    /// Wrap an optional synthesized name in the appropriate template.
    fn from_string(&self, pertainant: Option<String>) -> Error {
        match pertainant {
            Some(s) => Error::MissingMetadata(MessageTemplate::MissingMetadata.format(&s)),
            None => Error::MissingMetadata(
                MessageTemplate::NoHelpAvailable.format(UNAVAILABLE),
            ),
        }
    }
}

/// Strip a metadata backtick arity suffix (`` Dictionary`2 `` becomes `Dictionary`).
fn strip_arity_suffix(name: &str) -> &str {
    match name.find('`') {
        Some(index) => &name[..index],
        None => name,
    }
}
