//! Rendering of a full pertainant: the type, member, or method a diagnostic is about.
//!
//! Builds on the per-type synthesis in [`display`](crate::metadata::diagnostics::display)
//! to produce member-qualified names and full method signatures, including generic
//! method arguments and `ref`/`out` parameter prefixes.

use std::fmt::Write;

use crate::metadata::{
    diagnostics::{display::NameSynthesizer, UNAVAILABLE},
    reflection::{Parameter, Pertainant, TypeHandle},
};

impl NameSynthesizer<'_> {
    /// Render the most useful available name for a pertainant, or `None` to give up.
    ///
    /// A `None` here is the top-level give-up signal, distinct from the per-piece
    /// unavailability inside synthesis: the factory reacts to it by falling back to the
    /// pertainant's raw textual form. A member or method whose declaring type cannot be
    /// named at all is not worth rendering half of, so declaring-type failure gives up;
    /// unavailable generic arguments or parameter types inside an otherwise nameable
    /// method render as [`UNAVAILABLE`] instead.
    ///
    /// ## Arguments
    /// * 'pertainant' - The subject the diagnostic is being built for
    #[must_use]
    pub fn useful_pertainant(&self, pertainant: &Pertainant) -> Option<String> {
        match pertainant {
            Pertainant::Type(ty) => self.display_string(ty),
            Pertainant::Member {
                declaring_type,
                name,
            } => {
                let declaring = self.display_string(declaring_type)?;
                Some(format!("{declaring}.{name}"))
            }
            Pertainant::Method {
                declaring_type,
                name,
                is_constructed_generic,
                generic_arguments,
                parameters,
            } => {
                let declaring = self.display_string(declaring_type)?;
                let mut friendly = format!("{declaring}.{name}");

                if *is_constructed_generic {
                    friendly.push('<');
                    for (i, argument) in generic_arguments.iter().enumerate() {
                        if i > 0 {
                            friendly.push(',');
                        }
                        self.append_type_or_placeholder(&mut friendly, argument);
                    }
                    friendly.push('>');
                }

                friendly.push('(');
                for (i, parameter) in parameters.iter().enumerate() {
                    if i > 0 {
                        friendly.push(',');
                    }
                    self.append_parameter(&mut friendly, parameter);
                }
                friendly.push(')');

                Some(friendly)
            }
        }
    }

    /// Render one parameter: direction prefix, then the declared type unwrapped to its
    /// pointee when by-reference. Direction flags and by-ref-ness of the type are
    /// independent signals; both are consulted.
    fn append_parameter(&self, out: &mut String, parameter: &Parameter) {
        if parameter.is_ref() {
            let _ = write!(out, "ref ");
        } else if parameter.is_out() {
            let _ = write!(out, "out ");
        }

        let mut param_type = parameter.param_type.clone();
        if param_type.is_by_ref() {
            if let Some(pointee) = param_type.element_type() {
                param_type = pointee;
            }
        }
        self.append_type_or_placeholder(out, &param_type);
    }

    /// Append a type's display string, or the unavailability placeholder when synthesis
    /// produces nothing.
    fn append_type_or_placeholder(&self, out: &mut String, ty: &TypeHandle) {
        match self.display_string(ty) {
            Some(s) => out.push_str(&s),
            None => out.push_str(UNAVAILABLE),
        }
    }
}
