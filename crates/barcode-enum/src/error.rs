//! Error types for registry operations.

use std::fmt;

/// Convenience alias for fallible registry operations.
pub type EnumResult<T> = Result<T, EnumError>;

/// Error raised by registry population or attribute lookup.
///
/// Unknown *values* are deliberately not represented here: [`lookup_value`]
/// falls back to the raw integer instead of failing.
///
/// [`lookup_value`]: crate::Enum::lookup_value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// No item is registered under the requested name.
    NoSuchAttribute {
        /// Name of the registry that was probed.
        registry: String,
        /// The attribute name that was requested.
        attr: String,
    },
    /// Registry item budget exceeded.
    ItemLimit { limit: usize, count: usize },
}

impl fmt::Display for EnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchAttribute { registry, attr } => {
                write!(f, "'{registry}' enum has no attribute '{attr}'")
            }
            Self::ItemLimit { limit, count } => {
                write!(f, "item limit exceeded: {count} > {limit}")
            }
        }
    }
}

impl std::error::Error for EnumError {}
