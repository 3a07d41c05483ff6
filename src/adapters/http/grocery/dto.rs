//! Request and response DTOs for grocery endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::grocery::GroceryItem;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Raw items plus an optional household scaling factor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListRequest {
    #[serde(default)]
    pub items: Vec<GroceryItem>,
    #[serde(default)]
    pub scale_factor: Option<f64>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ShoppingListResponse {
    pub items: Vec<GroceryItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportResponse {
    pub items: Vec<GroceryItem>,
    pub lines: Vec<String>,
    /// Lines joined with newlines, ready to copy.
    pub text: String,
}

impl ExportResponse {
    pub fn new(items: Vec<GroceryItem>, lines: Vec<String>) -> Self {
        let text = lines.join("\n");
        Self { items, lines, text }
    }
}
