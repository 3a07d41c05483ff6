//! ExportShoppingListHandler - Command handler for exporting a shopping list.

use std::sync::Arc;

use crate::application::handlers::plan::{CheckFeatureHandler, CheckFeatureQuery};
use crate::domain::foundation::UserId;
use crate::domain::grocery::GroceryItem;
use crate::domain::plan::{Feature, PlanError};
use crate::ports::PlanProfileReader;

use super::{BuildShoppingListCommand, BuildShoppingListHandler};

/// Command to export a shopping list.
#[derive(Debug, Clone)]
pub struct ExportShoppingListCommand {
    pub user_id: UserId,
    pub items: Vec<GroceryItem>,
    pub scale_factor: Option<f64>,
}

/// The exported list, structured and as printable lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportShoppingListResult {
    pub items: Vec<GroceryItem>,
    pub lines: Vec<String>,
}

/// Handler for list export. Requires [`Feature::ExportList`].
pub struct ExportShoppingListHandler {
    feature_check: CheckFeatureHandler,
    builder: BuildShoppingListHandler,
}

impl ExportShoppingListHandler {
    pub fn new(reader: Arc<dyn PlanProfileReader>) -> Self {
        Self {
            feature_check: CheckFeatureHandler::new(reader),
            builder: BuildShoppingListHandler::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: ExportShoppingListCommand,
    ) -> Result<ExportShoppingListResult, PlanError> {
        self.feature_check
            .handle(CheckFeatureQuery {
                user_id: cmd.user_id,
                feature: Feature::ExportList,
            })
            .await?;

        let built = self.builder.handle(BuildShoppingListCommand {
            items: cmd.items,
            scale_factor: cmd.scale_factor,
        })?;
        let lines = built.items.iter().map(GroceryItem::display_line).collect();

        Ok(ExportShoppingListResult {
            items: built.items,
            lines,
        })
    }
}
