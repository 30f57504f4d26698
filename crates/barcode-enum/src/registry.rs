//! Enumeration registry keyed by name and by value.
//!
//! A registry is populated once at load time by the binding layer, then
//! queried attribute-style by name, by integer value, or by bitmask
//! decomposition. The value index owns the items and preserves registration
//! order; the name index keys names to values, so both indexes always reach
//! the same item and are released together with the registry.

use ahash::AHashMap;
use indexmap::IndexMap;

use crate::{
    error::{EnumError, EnumResult},
    item::EnumItem,
    value::EnumValue,
};

/// Registry of named integer constants, indexed by name and by value.
///
/// Invariant: every item reachable through the name index is reachable through
/// the value index with the same `(value, name)` pair, and vice versa.
/// Duplicate registration is last-write-wins; the displaced pairing is removed
/// from both indexes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Enum {
    name: String,
    by_name: AHashMap<String, i64>,
    by_value: IndexMap<i64, EnumItem>,
    limit: Option<usize>,
}

impl Enum {
    /// Creates an empty registry.
    ///
    /// `name` identifies the registry in attribute-error messages and debug
    /// output, e.g. `"Symbology"` or `"Config"`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            by_name: AHashMap::new(),
            by_value: IndexMap::new(),
            limit: None,
        }
    }

    /// Creates an empty registry with an item budget.
    ///
    /// [`add`](Self::add) fails once `max_items` distinct values are
    /// registered.
    #[must_use]
    pub fn with_limit(name: impl Into<String>, max_items: usize) -> Self {
        Self {
            limit: Some(max_items),
            ..Self::new(name)
        }
    }

    /// Bulk-populates a fresh, unlimited registry from `(value, name)` pairs.
    ///
    /// Later pairs win on duplicate values or names, exactly like repeated
    /// [`add`](Self::add) calls.
    #[must_use]
    pub fn from_pairs<S: Into<String>>(name: impl Into<String>, pairs: impl IntoIterator<Item = (i64, S)>) -> Self {
        let mut registry = Self::new(name);
        for (value, item_name) in pairs {
            registry.insert(value, item_name.into());
        }
        registry
    }

    /// Returns the registry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates an item for `(value, name)` and registers it in both indexes.
    ///
    /// # Errors
    /// Returns [`EnumError::ItemLimit`] when the registry was built with
    /// [`with_limit`](Self::with_limit) and a brand-new value would exceed the
    /// budget. Re-registering an existing value never fails.
    pub fn add(&mut self, value: i64, name: impl Into<String>) -> EnumResult<()> {
        if let Some(limit) = self.limit
            && !self.by_value.contains_key(&value)
            && self.by_value.len() >= limit
        {
            return Err(EnumError::ItemLimit {
                limit,
                count: self.by_value.len() + 1,
            });
        }
        self.insert(value, name.into());
        Ok(())
    }

    /// Attribute-style lookup by item name.
    ///
    /// # Errors
    /// Returns [`EnumError::NoSuchAttribute`] when no item is registered under
    /// `attr`.
    pub fn get(&self, attr: &str) -> EnumResult<&EnumItem> {
        self.by_name
            .get(attr)
            .and_then(|value| self.by_value.get(value))
            .ok_or_else(|| EnumError::NoSuchAttribute {
                registry: self.name.clone(),
                attr: attr.to_owned(),
            })
    }

    /// Looks an item up by integer value.
    ///
    /// Unknown values are not an error: the probe degrades to
    /// [`EnumValue::Raw`] carrying the value unchanged, so callers can treat
    /// constants the registry has never heard of gracefully.
    #[must_use]
    pub fn lookup_value(&self, value: i64) -> EnumValue<'_> {
        match self.by_value.get(&value) {
            Some(item) => EnumValue::Item(item),
            None => EnumValue::Raw(value),
        }
    }

    /// Decomposes a bitmask into the registered items whose value, taken as a
    /// bit position, is set in `mask`.
    ///
    /// Values outside the mask's 32-bit width are silently skipped. The result
    /// never contains duplicates; it follows registration order, which callers
    /// should treat as meaningless.
    #[must_use]
    pub fn set_from_mask(&self, mask: u32) -> Vec<&EnumItem> {
        self.by_value.values().filter(|item| item.in_mask(mask)).collect()
    }

    /// Returns whether a name is registered.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns whether a value is registered.
    #[must_use]
    pub fn contains_value(&self, value: i64) -> bool {
        self.by_value.contains_key(&value)
    }

    /// Returns the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    /// Returns whether the registry has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    /// Iterates items in registration order.
    #[must_use]
    pub fn iter(&self) -> indexmap::map::Values<'_, i64, EnumItem> {
        self.by_value.values()
    }

    /// Registers `(value, name)`, last write wins.
    ///
    /// Whatever pairing the new item displaces is dropped from the *other*
    /// index too, keeping both indexes describing the same set of items.
    fn insert(&mut self, value: i64, name: String) {
        if let Some(stale) = self.by_value.get(&value)
            && stale.name() != name
        {
            self.by_name.remove(stale.name());
        }
        if let Some(&stale_value) = self.by_name.get(&name)
            && stale_value != value
        {
            self.by_value.shift_remove(&stale_value);
        }
        self.by_name.insert(name.clone(), value);
        self.by_value.insert(value, EnumItem::new(value, name));
    }
}

impl<'a> IntoIterator for &'a Enum {
    type Item = &'a EnumItem;
    type IntoIter = indexmap::map::Values<'a, i64, EnumItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
