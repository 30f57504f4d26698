//! Tests for bitmask decomposition: values are bit positions within a 32-bit
//! mask, out-of-range values are silently skipped, and the result is a
//! duplicate-free set.

use barcode_enum::Enum;
use pretty_assertions::assert_eq;

fn config() -> Enum {
    Enum::from_pairs("Config", [(0, "ENABLE"), (1, "ADD_CHECK"), (2, "EMIT_CHECK")])
}

fn names(items: &[&barcode_enum::EnumItem]) -> Vec<String> {
    items.iter().map(|item| item.name().to_owned()).collect()
}

/// Exactly the items whose value-bit is set are returned.
#[test]
fn decomposes_set_bits() {
    let registry = config();
    let items = registry.set_from_mask(0b101);
    assert_eq!(names(&items), ["ENABLE", "EMIT_CHECK"]);
}

/// An empty mask decomposes to no items.
#[test]
fn zero_mask_is_empty() {
    let registry = config();
    assert!(registry.set_from_mask(0).is_empty());
}

/// Set bits with no registered item are ignored, not an error.
#[test]
fn unregistered_bits_are_ignored() {
    let registry = config();
    assert!(registry.set_from_mask(0b1000).is_empty());
}

/// A fully-set mask returns every in-range item, in registration order.
#[test]
fn full_mask_returns_all_items() {
    let registry = config();
    let items = registry.set_from_mask(u32::MAX);
    assert_eq!(names(&items), ["ENABLE", "ADD_CHECK", "EMIT_CHECK"]);
}

/// Values at or above the mask's bit width are silently skipped.
#[test]
fn values_beyond_bit_width_are_skipped() {
    let mut registry = config();
    registry.add(31, "TOP").unwrap();
    registry.add(32, "HIGH").unwrap();
    registry.add(40, "HIGHER").unwrap();
    let items = registry.set_from_mask(u32::MAX);
    assert_eq!(names(&items), ["ENABLE", "ADD_CHECK", "EMIT_CHECK", "TOP"]);
}

/// Negative values never appear in a decomposition.
#[test]
fn negative_values_are_skipped() {
    let mut registry = config();
    registry.add(-1, "NONE").unwrap();
    let items = registry.set_from_mask(u32::MAX);
    assert_eq!(names(&items), ["ENABLE", "ADD_CHECK", "EMIT_CHECK"]);
}

/// The result contains no duplicates even for repeated queries of wide masks.
#[test]
fn result_is_duplicate_free() {
    let registry = config();
    let items = registry.set_from_mask(0b111);
    let mut values: Vec<i64> = items.iter().map(|item| item.value()).collect();
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), items.len());
}

/// Decomposition of a mask the registry fully covers round-trips through the
/// items' own bit test.
#[test]
fn decomposition_agrees_with_item_bit_test() {
    let registry = config();
    let mask = 0b110;
    for item in &registry {
        let in_result = registry.set_from_mask(mask).iter().any(|found| *found == item);
        assert_eq!(
            in_result,
            item.in_mask(mask),
            "item {item:?} disagrees with set_from_mask({mask:#b})"
        );
    }
}
