//! Merge, scale and pantry-exclusion over grocery items.
//!
//! All functions are pure: inputs are borrowed and fresh vectors returned.

use std::collections::HashMap;

use super::{normalize, GroceryItem};

/// Collapses items sharing a (normalized name, unit) key.
///
/// Output order is the order in which each key was first seen. Quantities
/// are summed. Note and on-hand come from the last item seen for the key.
/// The output name is the normalized form.
pub fn merge_items(items: &[GroceryItem]) -> Vec<GroceryItem> {
    let mut merged: Vec<GroceryItem> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for item in items {
        let name = normalize(&item.name);
        let key = (name.clone(), item.unit_or_empty().to_string());

        match index.get(&key) {
            Some(&pos) => {
                let total = merged[pos].quantity_or_zero() + item.quantity_or_zero();
                merged[pos] = GroceryItem {
                    name,
                    quantity: Some(total),
                    ..item.clone()
                };
            }
            None => {
                index.insert(key, merged.len());
                merged.push(GroceryItem {
                    name,
                    ..item.clone()
                });
            }
        }
    }

    merged
}

/// Multiplies every quantity by `factor`, rounding half-up to two decimals.
///
/// A missing quantity scales as zero.
pub fn scale_items(items: &[GroceryItem], factor: f64) -> Vec<GroceryItem> {
    items
        .iter()
        .map(|item| GroceryItem {
            quantity: Some(round_to_cents(item.quantity_or_zero() * factor)),
            ..item.clone()
        })
        .collect()
}

/// Drops items flagged as already on hand.
pub fn exclude_pantry(items: &[GroceryItem]) -> Vec<GroceryItem> {
    items.iter().filter(|item| !item.is_on_hand()).cloned().collect()
}

/// Runs the shopping-list pipeline: merge, then scale, then exclude.
pub fn prepare_shopping_list(items: &[GroceryItem], factor: f64) -> Vec<GroceryItem> {
    let merged = merge_items(items);
    let scaled = scale_items(&merged, factor);
    exclude_pantry(&scaled)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
