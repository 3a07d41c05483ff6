//! Shared application state for the HTTP adapters.

use std::sync::Arc;

use crate::application::handlers::affiliate::{
    GetAffiliateSummaryHandler, TrackAffiliateClickHandler, TrackingDefaults,
};
use crate::application::handlers::grocery::{BuildShoppingListHandler, ExportShoppingListHandler};
use crate::application::handlers::plan::{AuthorizeMeteredActionHandler, GetPlanGateHandler};
use crate::domain::admin::AdminPolicy;
use crate::ports::{
    AffiliateClickRepository, AffiliateConfigReader, PlanProfileReader, UsageRecorder,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub profile_reader: Arc<dyn PlanProfileReader>,
    pub usage_recorder: Arc<dyn UsageRecorder>,
    pub affiliate_config: Arc<dyn AffiliateConfigReader>,
    pub affiliate_clicks: Arc<dyn AffiliateClickRepository>,
    pub tracking_defaults: TrackingDefaults,
    pub admins: AdminPolicy,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn plan_gate_handler(&self) -> GetPlanGateHandler {
        GetPlanGateHandler::new(self.profile_reader.clone())
    }

    pub fn metered_action_handler(&self) -> AuthorizeMeteredActionHandler {
        AuthorizeMeteredActionHandler::new(
            self.profile_reader.clone(),
            self.usage_recorder.clone(),
        )
    }

    pub fn build_list_handler(&self) -> BuildShoppingListHandler {
        BuildShoppingListHandler::new()
    }

    pub fn export_list_handler(&self) -> ExportShoppingListHandler {
        ExportShoppingListHandler::new(self.profile_reader.clone())
    }

    pub fn track_click_handler(&self) -> TrackAffiliateClickHandler {
        TrackAffiliateClickHandler::new(
            self.profile_reader.clone(),
            self.affiliate_config.clone(),
            self.affiliate_clicks.clone(),
            self.tracking_defaults.clone(),
        )
    }

    pub fn affiliate_summary_handler(&self) -> GetAffiliateSummaryHandler {
        GetAffiliateSummaryHandler::new(self.affiliate_clicks.clone(), self.admins.clone())
    }
}
