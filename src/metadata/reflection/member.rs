use bitflags::bitflags;

use crate::metadata::reflection::TypeHandle;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Parameter direction attributes, ECMA-335 II.23.1.13
    pub struct ParamAttributes: u16 {
        /// Param is `In`
        const IN = 0x0001;
        /// Param is `Out`
        const OUT = 0x0002;
    }
}

/// One declared parameter of a method-like pertainant.
///
/// Direction flags and by-reference-ness of the parameter type are two independent
/// signals: a `ref int` parameter carries a by-reference parameter type *and* both
/// direction flags, and rendering consults both separately.
#[derive(Clone)]
pub struct Parameter {
    /// Direction attributes of this parameter
    pub flags: ParamAttributes,
    /// The declared parameter type
    pub param_type: TypeHandle,
}

impl Parameter {
    /// Creates a parameter with the given direction flags and declared type
    #[must_use]
    pub fn new(flags: ParamAttributes, param_type: TypeHandle) -> Self {
        Parameter { flags, param_type }
    }

    /// True if this parameter should render with a `ref ` prefix (both directions marked)
    #[must_use]
    pub fn is_ref(&self) -> bool {
        self.flags.contains(ParamAttributes::IN | ParamAttributes::OUT)
    }

    /// True if this parameter should render with an `out ` prefix (only the out direction marked)
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.flags.contains(ParamAttributes::OUT) && !self.flags.contains(ParamAttributes::IN)
    }
}

/// The "thing reflection failed about": the subject a missing-metadata diagnostic is built for.
///
/// Mirrors the caller shapes the runtime hands to the diagnostic factory. All handles are
/// transient; a pertainant is constructed for one diagnostic and discarded.
#[derive(Clone)]
pub enum Pertainant {
    /// A type by itself
    Type(TypeHandle),

    /// A non-method member (field, property, event) of a declaring type
    Member {
        /// The type declaring the member
        declaring_type: TypeHandle,
        /// The member's name
        name: String,
    },

    /// A method or constructor, with enough shape to render a full signature
    Method {
        /// The type declaring the method
        declaring_type: TypeHandle,
        /// The method's name
        name: String,
        /// True if this is a generic method instantiated with concrete type arguments
        is_constructed_generic: bool,
        /// Ordered generic arguments of a constructed generic method
        generic_arguments: Vec<TypeHandle>,
        /// Ordered declared parameters
        parameters: Vec<Parameter>,
    },
}

impl Pertainant {
    /// The raw, possibly-unhelpful textual form of this pertainant.
    ///
    /// Used only when no useful display string could be synthesized at all; the factory
    /// substitutes this into the "no further help available" message.
    #[must_use]
    pub fn raw_display(&self) -> String {
        match self {
            Pertainant::Type(ty) => ty.raw_display(),
            Pertainant::Member {
                declaring_type,
                name,
            }
            | Pertainant::Method {
                declaring_type,
                name,
                ..
            } => format!("{}.{}", declaring_type.raw_display(), name),
        }
    }
}
