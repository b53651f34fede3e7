use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Most of the crate signals availability through `Option` return values rather than errors
/// (see the crate-level documentation for why); this enum covers the two places where a real
/// error object is the right shape.
///
/// # Error Categories
///
/// ## Diagnostic Products
/// - [`Error::MissingMetadata`] - The error the factory functions build for callers to raise
///
/// ## Reflection Surface Failures
/// - [`Error::MissingMetadata`] - Also the failure a host's `full_name` query reports when the
///   qualified name was trimmed away; the synthesizer catches this locally and degrades
///
/// # Examples
///
/// ```rust
/// use trimscope::Error;
///
/// fn report(err: &Error) {
///     match err {
///         Error::MissingMetadata(message) => eprintln!("{}", message),
///         e => eprintln!("Other error: {}", e),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Reflection metadata needed to satisfy a query was trimmed from the build.
    ///
    /// Carries the fully formatted, human-readable diagnostic message. This variant serves
    /// two roles: it is what the factory functions in
    /// [`diagnostics::creator`](crate::metadata::diagnostics::creator) produce, and it is the
    /// error a host's [`full_name`](crate::metadata::reflection::ReflectedType::full_name)
    /// implementation returns when the qualified name itself is gone.
    #[error("{0}")]
    MissingMetadata(String),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories, primarily by host
    /// implementations of the reflection surface traits.
    #[error("{0}")]
    Error(String),
}

impl Error {
    /// Returns true if this error reports trimmed metadata.
    #[must_use]
    pub fn is_missing_metadata(&self) -> bool {
        matches!(self, Error::MissingMetadata(_))
    }
}
