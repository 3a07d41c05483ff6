//! Grocery line item.

use serde::{Deserialize, Serialize};

/// One shopping-list line.
///
/// Items come from user input or from an AI-generated ingredient list, so
/// everything except the name is optional. A missing quantity counts as zero
/// wherever arithmetic is involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_hand: Option<bool>,
}

impl GroceryItem {
    /// Creates an item with a name and quantity only.
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity),
            unit: None,
            note: None,
            on_hand: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_on_hand(mut self, on_hand: bool) -> Self {
        self.on_hand = Some(on_hand);
        self
    }

    /// Quantity with a missing value read as zero.
    pub fn quantity_or_zero(&self) -> f64 {
        self.quantity.unwrap_or(0.0)
    }

    /// Unit, with a missing unit read as the empty string.
    pub fn unit_or_empty(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }

    /// True only when the item is explicitly flagged as already owned.
    pub fn is_on_hand(&self) -> bool {
        self.on_hand.unwrap_or(false)
    }

    /// Renders the item as `"<quantity> <unit> <name> (<note>)"`, skipping absent parts.
    pub fn display_line(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(quantity) = self.quantity {
            parts.push(quantity.to_string());
        }
        if let Some(unit) = self.unit.as_deref().filter(|u| !u.is_empty()) {
            parts.push(unit.to_string());
        }
        parts.push(self.name.clone());

        let line = parts.join(" ");
        match self.note.as_deref().filter(|n| !n.is_empty()) {
            Some(note) => format!("{} ({})", line, note),
            None => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_item() {
        let item: GroceryItem = serde_json::from_str(r#"{"name":"salt"}"#).unwrap();
        assert_eq!(item.name, "salt");
        assert_eq!(item.quantity, None);
        assert_eq!(item.quantity_or_zero(), 0.0);
        assert!(!item.is_on_hand());
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let json = serde_json::to_string(&GroceryItem::new("egg", 12.0).with_unit("ct")).unwrap();
        assert_eq!(json, r#"{"name":"egg","quantity":12.0,"unit":"ct"}"#);
    }

    #[test]
    fn display_line_includes_quantity_unit_and_note() {
        let item = GroceryItem::new("tomato", 3.0)
            .with_unit("pc")
            .with_note("ripe");
        assert_eq!(item.display_line(), "3 pc tomato (ripe)");
    }

    #[test]
    fn display_line_without_quantity_or_unit() {
        let item: GroceryItem = serde_json::from_str(r#"{"name":"pepper"}"#).unwrap();
        assert_eq!(item.display_line(), "pepper");
    }

    #[test]
    fn display_line_keeps_fractional_quantity() {
        let item = GroceryItem::new("rice", 1.5).with_unit("cup");
        assert_eq!(item.display_line(), "1.5 cup rice");
    }
}
