//! Type identities, the reflection surface, and diagnostic synthesis.
//!
//! # Key Components
//!
//! - [`identity`] - The stable [`TypeIdentity`](identity::TypeIdentity) key that survives
//!   trimming
//! - [`reflection`] - The trait boundary to the host runtime's live reflection state
//! - [`tables`] - The named-type lookup capability and its in-memory implementation
//! - [`diagnostics`] - The display-string synthesizer, pertainant formatter, and error
//!   factory

pub mod diagnostics;
pub mod identity;
pub mod reflection;
pub mod tables;
