//! Public result surface for lookups by value.

use std::fmt;

use crate::item::EnumItem;

/// Result of a lookup by integer value.
///
/// Probing an unregistered value is not an error: it degrades to the plain
/// integer, so callers can pass constants from a newer native library straight
/// through without a failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumValue<'a> {
    /// A registered item.
    Item(&'a EnumItem),
    /// Fallback for a value with no registered item.
    Raw(i64),
}

impl<'a> EnumValue<'a> {
    /// Returns the integer value in either case.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Item(item) => item.value(),
            Self::Raw(value) => value,
        }
    }

    /// Returns the item name, or `None` for a raw fallback.
    #[must_use]
    pub fn name(self) -> Option<&'a str> {
        match self {
            Self::Item(item) => Some(item.name()),
            Self::Raw(_) => None,
        }
    }

    /// Returns the registered item, or `None` for a raw fallback.
    #[must_use]
    pub fn item(self) -> Option<&'a EnumItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Raw(_) => None,
        }
    }

    /// Returns whether the lookup found a registered item.
    #[must_use]
    pub fn is_item(self) -> bool {
        matches!(self, Self::Item(_))
    }
}

impl fmt::Display for EnumValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(item) => fmt::Display::fmt(item, f),
            Self::Raw(value) => write!(f, "{value}"),
        }
    }
}

impl PartialEq<i64> for EnumValue<'_> {
    fn eq(&self, other: &i64) -> bool {
        self.value() == *other
    }
}

impl PartialEq<EnumValue<'_>> for i64 {
    fn eq(&self, other: &EnumValue<'_>) -> bool {
        *self == other.value()
    }
}
