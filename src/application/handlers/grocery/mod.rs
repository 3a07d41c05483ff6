//! Grocery handlers.
//!
//! ## Commands
//! - Building a shopping list from raw items
//! - Exporting a shopping list (paid tiers)

mod build_shopping_list;
mod export_shopping_list;

pub use build_shopping_list::{
    BuildShoppingListCommand, BuildShoppingListHandler, BuildShoppingListResult,
};
pub use export_shopping_list::{
    ExportShoppingListCommand, ExportShoppingListHandler, ExportShoppingListResult,
};
