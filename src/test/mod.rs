use std::sync::Arc;

use crate::{
    metadata::{
        identity::TypeIdentity,
        reflection::{ReflectedType, TypeHandle},
    },
    Error, Result,
};

/// A hand-built reflected type for unit tests.
///
/// Constructors cover one shape each; optional fields are layered on with `with_*`
/// builders. A `deny_reflection` fake panics on any live name query, which lets tests
/// prove that identity-backed paths never re-enter reflection state.
pub struct FakeType {
    identity: Option<TypeIdentity>,
    name: Option<String>,
    full_name: Option<String>,
    element: Option<TypeHandle>,
    is_array: bool,
    rank: u32,
    is_pointer: bool,
    is_by_ref: bool,
    is_generic_parameter: bool,
    is_generic_type_definition: bool,
    arity: usize,
    constructed: Option<(TypeHandle, Vec<TypeHandle>)>,
    instantiation: Option<(TypeHandle, Vec<TypeHandle>)>,
    deny_reflection: bool,
    raw: String,
}

impl FakeType {
    fn blank() -> Self {
        FakeType {
            identity: None,
            name: None,
            full_name: None,
            element: None,
            is_array: false,
            rank: 1,
            is_pointer: false,
            is_by_ref: false,
            is_generic_parameter: false,
            is_generic_type_definition: false,
            arity: 0,
            constructed: None,
            instantiation: None,
            deny_reflection: false,
            raw: "<raw>".to_string(),
        }
    }

    /// A named type whose short name is available but whose full name was trimmed.
    pub fn named(name: &str) -> Self {
        FakeType {
            name: Some(name.to_string()),
            raw: name.to_string(),
            ..Self::blank()
        }
    }

    /// A type with nothing left: no identity, no name, no full name.
    pub fn trimmed() -> Self {
        FakeType {
            raw: "#trimmed".to_string(),
            ..Self::blank()
        }
    }

    /// A type reachable only through its identity; any live name query panics.
    pub fn identity_only(identity: TypeIdentity) -> Self {
        FakeType {
            identity: Some(identity),
            deny_reflection: true,
            raw: format!("EEType:{identity}"),
            ..Self::blank()
        }
    }

    /// An open generic parameter with the given short name.
    pub fn generic_parameter(name: &str) -> Self {
        FakeType {
            is_generic_parameter: true,
            name: Some(name.to_string()),
            raw: name.to_string(),
            ..Self::blank()
        }
    }

    /// A generic type definition with the given name and declared arity. The full name
    /// matches the short name so rendered output stays compact in assertions.
    pub fn generic_definition(name: &str, arity: usize) -> Self {
        FakeType {
            is_generic_type_definition: true,
            arity,
            name: Some(name.to_string()),
            full_name: Some(name.to_string()),
            raw: name.to_string(),
            ..Self::blank()
        }
    }

    /// An array of `element` with the given rank. Attach an identity with
    /// [`with_identity`](Self::with_identity) to make it synthesizable.
    pub fn array_of(element: TypeHandle, rank: u32) -> Self {
        FakeType {
            element: Some(element),
            is_array: true,
            rank,
            raw: "#array".to_string(),
            ..Self::blank()
        }
    }

    /// A pointer to `element`.
    pub fn pointer_to(element: TypeHandle) -> Self {
        FakeType {
            element: Some(element),
            is_pointer: true,
            raw: "#pointer".to_string(),
            ..Self::blank()
        }
    }

    /// A by-reference wrapper around `element`.
    pub fn by_ref_to(element: TypeHandle) -> Self {
        FakeType {
            element: Some(element),
            is_by_ref: true,
            raw: "#byref".to_string(),
            ..Self::blank()
        }
    }

    /// A constructed generic type visible only through live reflection state.
    pub fn constructed(definition: TypeHandle, arguments: Vec<TypeHandle>) -> Self {
        FakeType {
            constructed: Some((definition, arguments)),
            raw: "#constructed".to_string(),
            ..Self::blank()
        }
    }

    /// A constructed generic type whose instantiation is recoverable purely from its
    /// identity; live reflection queries panic.
    pub fn instantiation_by_identity(
        identity: TypeIdentity,
        definition: TypeHandle,
        arguments: Vec<TypeHandle>,
    ) -> Self {
        FakeType {
            identity: Some(identity),
            instantiation: Some((definition, arguments)),
            deny_reflection: true,
            raw: format!("EEType:{identity}"),
            ..Self::blank()
        }
    }

    /// Attach an identity.
    pub fn with_identity(mut self, identity: TypeIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Make the full qualified name available.
    pub fn with_full_name(mut self, full_name: &str) -> Self {
        self.full_name = Some(full_name.to_string());
        self
    }

    /// Finish building and wrap in a shared handle.
    pub fn handle(self) -> TypeHandle {
        Arc::new(self)
    }
}

impl ReflectedType for FakeType {
    fn identity(&self) -> Option<TypeIdentity> {
        self.identity
    }

    fn has_element_type(&self) -> bool {
        self.element.is_some()
    }

    fn is_array(&self) -> bool {
        self.is_array
    }

    fn array_rank(&self) -> u32 {
        self.rank
    }

    fn element_type(&self) -> Option<TypeHandle> {
        self.element.clone()
    }

    fn is_pointer(&self) -> bool {
        self.is_pointer
    }

    fn is_by_ref(&self) -> bool {
        self.is_by_ref
    }

    fn is_constructed_generic(&self) -> bool {
        self.constructed.is_some()
    }

    fn generic_type_definition(&self) -> Option<TypeHandle> {
        self.constructed.as_ref().map(|(definition, _)| definition.clone())
    }

    fn generic_type_arguments(&self) -> Vec<TypeHandle> {
        self.constructed
            .as_ref()
            .map(|(_, arguments)| arguments.clone())
            .unwrap_or_default()
    }

    fn generic_instantiation(&self) -> Option<(TypeHandle, Vec<TypeHandle>)> {
        self.instantiation.clone()
    }

    fn is_generic_parameter(&self) -> bool {
        self.is_generic_parameter
    }

    fn is_generic_type_definition(&self) -> bool {
        self.is_generic_type_definition
    }

    fn generic_arity(&self) -> usize {
        self.arity
    }

    fn name_if_available(&self) -> Option<String> {
        assert!(
            !self.deny_reflection,
            "live reflection name query on an identity-backed fake"
        );
        self.name.clone()
    }

    fn full_name(&self) -> Result<String> {
        assert!(
            !self.deny_reflection,
            "live reflection full-name query on an identity-backed fake"
        );
        self.full_name
            .clone()
            .ok_or_else(|| Error::MissingMetadata("full name trimmed".to_string()))
    }

    fn raw_display(&self) -> String {
        self.raw.clone()
    }
}
