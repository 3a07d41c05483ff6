//! TrackAffiliateClickHandler - Command handler for outbound order links.

use std::sync::Arc;

use crate::application::handlers::plan::{CheckFeatureHandler, CheckFeatureQuery};
use crate::domain::affiliate::{
    apply_affiliate_tracking, AffiliateClick, AffiliateError, AffiliateIds, Partner,
};
use crate::domain::foundation::{ClickId, UserId};
use crate::domain::plan::Feature;
use crate::ports::{AffiliateClickRepository, AffiliateConfigReader, PlanProfileReader};

/// Configured fallbacks for affiliate tracking.
#[derive(Debug, Clone)]
pub struct TrackingDefaults {
    pub ids: AffiliateIds,
    pub utm_source: String,
}

/// Command to build and record a tracked order link.
#[derive(Debug, Clone)]
pub struct TrackAffiliateClickCommand {
    pub user_id: UserId,
    pub partner: Partner,
    pub base_url: String,
}

/// The tracked link to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAffiliateClickResult {
    pub click_id: ClickId,
    pub url: String,
}

/// Handler for tracked order links. Requires [`Feature::Ordering`].
pub struct TrackAffiliateClickHandler {
    feature_check: CheckFeatureHandler,
    config_reader: Arc<dyn AffiliateConfigReader>,
    clicks: Arc<dyn AffiliateClickRepository>,
    defaults: TrackingDefaults,
}

impl TrackAffiliateClickHandler {
    pub fn new(
        profile_reader: Arc<dyn PlanProfileReader>,
        config_reader: Arc<dyn AffiliateConfigReader>,
        clicks: Arc<dyn AffiliateClickRepository>,
        defaults: TrackingDefaults,
    ) -> Self {
        Self {
            feature_check: CheckFeatureHandler::new(profile_reader),
            config_reader,
            clicks,
            defaults,
        }
    }

    pub async fn handle(
        &self,
        cmd: TrackAffiliateClickCommand,
    ) -> Result<TrackAffiliateClickResult, AffiliateError> {
        self.feature_check
            .handle(CheckFeatureQuery {
                user_id: cmd.user_id.clone(),
                feature: Feature::Ordering,
            })
            .await?;

        let ids = self.resolve_ids().await;
        let url = apply_affiliate_tracking(
            cmd.partner,
            &cmd.base_url,
            &ids,
            &self.defaults.utm_source,
        )?;

        let click = AffiliateClick::clicked(cmd.user_id, cmd.partner, url.clone());
        self.clicks.record(&click).await?;
        tracing::info!(
            click_id = %click.id,
            user_id = %click.user_id,
            partner = %click.partner,
            "Affiliate click recorded"
        );

        Ok(TrackAffiliateClickResult {
            click_id: click.id,
            url,
        })
    }

    /// Stored ids win; configured ids fill the gaps. A failing config store
    /// falls back to configured ids alone.
    async fn resolve_ids(&self) -> AffiliateIds {
        match self.config_reader.get_affiliate_ids().await {
            Ok(stored) => stored.or(&self.defaults.ids),
            Err(e) => {
                tracing::warn!(error = %e, "Affiliate config unavailable, using configured ids");
                self.defaults.ids.clone()
            }
        }
    }
}
