//! Grocery domain module.
//!
//! Turns raw, possibly duplicated ingredient lines into a shopping list:
//! merge duplicates, scale to a household size, drop what is already on hand.
//!
//! The pipeline order is fixed (merge, then scale, then exclude) and is
//! exposed as [`prepare_shopping_list`].

mod aggregate;
mod item;
mod normalize;

pub use aggregate::{exclude_pantry, merge_items, prepare_shopping_list, scale_items};
pub use item::GroceryItem;
pub use normalize::normalize;
