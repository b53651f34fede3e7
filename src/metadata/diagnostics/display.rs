//! Recursive display-string synthesis for partially trimmed types.
//!
//! The synthesizer classifies a type's shape and applies one rule per shape, in
//! decreasing order of reliability: identity-backed structural shapes first, live
//! reflection properties as last resort. Identity-backed lookups are pay-for-play safe;
//! live reflection calls may themselves fail with the very missing-metadata condition
//! being diagnosed, so they are only consulted when nothing better exists.
//!
//! Absence is always explicit: a `None` result means "no usable name", never an empty
//! string. Recursion depth equals the nesting depth of arrays, pointers, and generic
//! instantiations, and terminates because reflected type graphs are acyclic at this
//! level (an array's element is always strictly simpler than the array).

use crate::metadata::{
    diagnostics::UNAVAILABLE,
    identity::TypeIdentity,
    reflection::TypeHandle,
    tables::NamedTypeTable,
};

/// Shape classification of a reflected type for synthesis purposes.
///
/// Exactly one synthesis rule exists per variant; classification happens once per
/// recursion step so a new shape can never fall through to an unrelated rule silently.
enum TypeShape {
    /// Array type; element access requires an attached identity
    Array,
    /// Pointer or by-reference wrapper around an element type
    PointerOrByRef {
        /// True for pointers, false for by-reference
        is_pointer: bool,
    },
    /// Generic definition combined with concrete arguments. The definition is `None`
    /// when the reflection-side resolution itself came back empty.
    ConstructedGeneric {
        /// The generic type definition, if resolvable
        definition: Option<TypeHandle>,
        /// The ordered concrete argument types
        arguments: Vec<TypeHandle>,
    },
    /// Open generic parameter
    GenericParameter,
    /// Named type with a stable identity attached
    NamedWithIdentity(TypeIdentity),
    /// Named type reachable only through live reflection
    NamedWithoutIdentity,
}

impl TypeShape {
    /// Classify a type, in decreasing order of answer reliability.
    ///
    /// Constructed generics prefer the identity bridge: the reflection-side flag and
    /// resolvers are only consulted when no identity-backed instantiation exists, since
    /// they may re-enter reflection state that is itself unavailable.
    fn classify(ty: &TypeHandle) -> TypeShape {
        if ty.has_element_type() {
            if ty.is_array() {
                return TypeShape::Array;
            }
            return TypeShape::PointerOrByRef {
                is_pointer: ty.is_pointer(),
            };
        }

        if let Some((definition, arguments)) = ty.generic_instantiation() {
            return TypeShape::ConstructedGeneric {
                definition: Some(definition),
                arguments,
            };
        }
        if ty.is_constructed_generic() {
            return TypeShape::ConstructedGeneric {
                definition: ty.generic_type_definition(),
                arguments: ty.generic_type_arguments(),
            };
        }

        if ty.is_generic_parameter() {
            return TypeShape::GenericParameter;
        }

        match ty.identity() {
            Some(identity) => TypeShape::NamedWithIdentity(identity),
            None => TypeShape::NamedWithoutIdentity,
        }
    }
}

/// Synthesizes best-effort display strings for types whose metadata may be trimmed.
///
/// Holds only the injected named-type table capability; all other inputs arrive as
/// reflection handles on each call. Stateless between calls and safe to share across
/// threads.
pub struct NameSynthesizer<'a> {
    /// The host's precomputed diagnostic strings, keyed by type identity
    pub(crate) table: &'a dyn NamedTypeTable,
}

impl<'a> NameSynthesizer<'a> {
    /// Create a synthesizer over the given named-type table
    ///
    /// ## Arguments
    /// * 'table' - Lookup capability for identity-keyed diagnostic strings
    #[must_use]
    pub fn new(table: &'a dyn NamedTypeTable) -> Self {
        NameSynthesizer { table }
    }

    /// Synthesize the display string for a type, or `None` if nothing usable exists.
    ///
    /// Decorations (array brackets, `*`, `&`) and generic instantiation syntax are
    /// reconstructed recursively from whatever partial sources are available.
    ///
    /// ## Arguments
    /// * 'ty' - The type to render
    #[must_use]
    pub fn display_string(&self, ty: &TypeHandle) -> Option<String> {
        self.display_string_collecting(ty, None)
    }

    /// Internal synthesis entry that optionally collects generic placeholder offsets.
    ///
    /// `slots` is only threaded through the named-type-table path and the
    /// generic-definition path; element and argument recursion always starts a fresh
    /// collection of its own.
    pub(crate) fn display_string_collecting(
        &self,
        ty: &TypeHandle,
        mut slots: Option<&mut Vec<usize>>,
    ) -> Option<String> {
        match TypeShape::classify(ty) {
            TypeShape::Array => {
                // Element access on an array is not pay-for-play safe without an
                // attached identity, so this is the one shape that gives up outright.
                ty.identity()?;
                let element = ty.element_type()?;
                self.array_string(&element, ty.array_rank())
            }
            TypeShape::PointerOrByRef { is_pointer } => {
                let element = ty.element_type()?;
                let mut s = self.display_string(&element)?;
                s.push(if is_pointer { '*' } else { '&' });
                Some(s)
            }
            TypeShape::ConstructedGeneric {
                definition,
                arguments,
            } => {
                let definition = definition?;
                self.constructed_generic_string(&definition, &arguments)
            }
            TypeShape::GenericParameter => ty.name_if_available(),
            TypeShape::NamedWithIdentity(identity) => {
                // The table is authoritative once an identity exists; a miss is final.
                self.table.diagnostic_string(identity, slots)
            }
            TypeShape::NamedWithoutIdentity => {
                // Last resort: live reflection. Short-name availability is the proxy
                // signal that a full-name query is safe to attempt at all.
                let name = ty.name_if_available()?;
                let mut s = match ty.full_name() {
                    Ok(full) => full,
                    // A trimmed full name only costs this field; the short name is
                    // still a correct, if less specific, answer.
                    Err(_) => name,
                };

                // For an uninstantiated generic definition, append a bracketed
                // placeholder group matching the declared arity and record each
                // insertion point for the splicer. Not strictly correct for types
                // nested under generic types.
                if ty.is_generic_type_definition() {
                    s.push('[');
                    let mut remaining = ty.generic_arity();
                    while remaining > 0 {
                        remaining -= 1;
                        if let Some(list) = slots.as_mut() {
                            list.push(s.len());
                        }
                        if remaining > 0 {
                            s.push(',');
                        }
                    }
                    s.push(']');
                }

                Some(s)
            }
        }
    }

    /// Render an array type as `<element>[<rank-1 commas>]`.
    ///
    /// A rank-1 bound array renders identically to a vector array; the distinction is
    /// intentionally lost.
    ///
    /// ## Arguments
    /// * 'element' - The array's element type
    /// * 'rank'    - The array's dimension count
    #[must_use]
    pub fn array_string(&self, element: &TypeHandle, rank: u32) -> Option<String> {
        let mut s = self.display_string(element)?;
        s.push('[');
        for _ in 1..rank {
            s.push(',');
        }
        s.push(']');
        Some(s)
    }

    /// Render a constructed generic type by splicing argument strings into the
    /// definition's placeholder slots.
    ///
    /// Declared arity and the supplied argument count can disagree on malformed input;
    /// the mismatch is repaired rather than refused, since the message is advisory:
    /// excess slots are dropped from the end, missing slots are appended at the end.
    ///
    /// ## Arguments
    /// * 'definition' - The generic type definition
    /// * 'arguments'  - The ordered concrete argument types
    #[must_use]
    pub fn constructed_generic_string(
        &self,
        definition: &TypeHandle,
        arguments: &[TypeHandle],
    ) -> Option<String> {
        let mut slots: Vec<usize> = Vec::new();
        let mut s = self.display_string_collecting(definition, Some(&mut slots))?;

        if arguments.len() < slots.len() {
            slots.truncate(arguments.len());
        }
        while arguments.len() > slots.len() {
            s.push(',');
            slots.push(s.len());
        }

        slots.sort_unstable();

        // Splice right to left so earlier insertions do not shift offsets that are
        // still pending.
        for i in (0..slots.len()).rev() {
            let argument = self
                .display_string(&arguments[i])
                .unwrap_or_else(|| UNAVAILABLE.to_string());
            s.insert_str(slots[i], &argument);
        }

        Some(s)
    }
}
