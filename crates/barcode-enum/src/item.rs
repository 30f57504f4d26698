//! Named integer constants.
//!
//! An [`EnumItem`] associates an integer value with a name for printing. It
//! compares like its integer in numeric contexts but renders as its name in
//! string contexts, the way an int-subclassing enum member behaves in a
//! dynamic host language.

use std::{
    cmp::Ordering,
    fmt::{self, Write},
};

/// A single named integer constant.
///
/// Immutable after construction. `Display` renders the name; `Debug` renders
/// the canonical `EnumItem(<value>, <name repr>)` form.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EnumItem {
    value: i64,
    name: String,
}

impl EnumItem {
    /// Creates a named constant.
    #[must_use]
    pub fn new(value: i64, name: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }

    /// Returns the integer value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether this item's value, taken as a bit position, is set in `mask`.
    ///
    /// Values outside the mask's bit width (`0..32`) are never set.
    #[must_use]
    pub fn in_mask(&self, mask: u32) -> bool {
        u32::try_from(self.value).is_ok_and(|bit| bit < u32::BITS && (mask >> bit) & 1 == 1)
    }
}

impl fmt::Display for EnumItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for EnumItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumItem({value}, ", value = self.value)?;
        string_repr_fmt(&self.name, f)?;
        f.write_char(')')
    }
}

impl PartialOrd for EnumItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnumItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // value first so ordering agrees with integer comparison; name breaks
        // ties to stay consistent with Eq
        self.value.cmp(&other.value).then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialEq<i64> for EnumItem {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

impl PartialEq<EnumItem> for i64 {
    fn eq(&self, other: &EnumItem) -> bool {
        *self == other.value
    }
}

impl PartialOrd<i64> for EnumItem {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl PartialOrd<EnumItem> for i64 {
    fn partial_cmp(&self, other: &EnumItem) -> Option<Ordering> {
        self.partial_cmp(&other.value)
    }
}

impl From<&EnumItem> for i64 {
    fn from(item: &EnumItem) -> Self {
        item.value
    }
}

/// Writes `s` in Python string-repr form.
///
/// Single quotes by default; double quotes when the string contains a single
/// quote and no double quote.
fn string_repr_fmt(s: &str, f: &mut impl Write) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}
