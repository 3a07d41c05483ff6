//! BuildShoppingListHandler - Command handler for shopping list preparation.

use crate::domain::foundation::ValidationError;
use crate::domain::grocery::{prepare_shopping_list, GroceryItem};

/// Command to turn raw items into a shopping list.
#[derive(Debug, Clone)]
pub struct BuildShoppingListCommand {
    pub items: Vec<GroceryItem>,
    /// Household scaling factor. Defaults to 1.0.
    pub scale_factor: Option<f64>,
}

/// The prepared list.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildShoppingListResult {
    pub items: Vec<GroceryItem>,
}

/// Handler for building shopping lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildShoppingListHandler;

impl BuildShoppingListHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        cmd: BuildShoppingListCommand,
    ) -> Result<BuildShoppingListResult, ValidationError> {
        let factor = cmd.scale_factor.unwrap_or(1.0);
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ValidationError::invalid_format(
                "scale_factor",
                format!("must be a positive number, got {}", factor),
            ));
        }

        let items = prepare_shopping_list(&cmd.items, factor);
        tracing::debug!(
            input = cmd.items.len(),
            output = items.len(),
            factor,
            "Shopping list prepared"
        );

        Ok(BuildShoppingListResult { items })
    }
}
