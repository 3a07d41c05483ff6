//! Request and response DTOs for affiliate endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::affiliate::{
    GetAffiliateSummaryResult, TrackAffiliateClickResult,
};
use crate::domain::affiliate::{AffiliateClick, AffiliateSummary, Partner};
use crate::domain::foundation::ClickId;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Partner and the cart or search URL to send the user to.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackClickRequest {
    pub partner: Partner,
    pub base_url: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackClickResponse {
    pub click_id: ClickId,
    pub url: String,
}

impl From<TrackAffiliateClickResult> for TrackClickResponse {
    fn from(result: TrackAffiliateClickResult) -> Self {
        Self {
            click_id: result.click_id,
            url: result.url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AffiliateSummaryResponse {
    pub summary: AffiliateSummary,
    pub clicks: Vec<AffiliateClick>,
}

impl From<GetAffiliateSummaryResult> for AffiliateSummaryResponse {
    fn from(result: GetAffiliateSummaryResult) -> Self {
        Self {
            summary: result.summary,
            clicks: result.clicks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_request_deserializes() {
        let json = r#"{"partner": "walmart", "baseUrl": "https://www.walmart.com/search?q=eggs"}"#;
        let request: TrackClickRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.partner, Partner::Walmart);
        assert_eq!(request.base_url, "https://www.walmart.com/search?q=eggs");
    }

    #[test]
    fn unknown_partner_is_rejected() {
        let json = r#"{"partner": "kroger", "baseUrl": "https://example.com"}"#;
        assert!(serde_json::from_str::<TrackClickRequest>(json).is_err());
    }
}
