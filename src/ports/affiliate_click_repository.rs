//! Repository port for outbound affiliate clicks.

use async_trait::async_trait;

use crate::domain::affiliate::AffiliateClick;
use crate::domain::foundation::DomainError;

/// Append-only click log.
#[async_trait]
pub trait AffiliateClickRepository: Send + Sync {
    /// Stores a click.
    async fn record(&self, click: &AffiliateClick) -> Result<(), DomainError>;

    /// Most recent clicks, newest first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<AffiliateClick>, DomainError>;
}
