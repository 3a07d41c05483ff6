//! Read port for stored affiliate partner ids.

use async_trait::async_trait;

use crate::domain::affiliate::AffiliateIds;
use crate::domain::foundation::DomainError;

/// Reader for the operator-managed affiliate configuration row.
///
/// Ids returned here take precedence over the ones in application config.
#[async_trait]
pub trait AffiliateConfigReader: Send + Sync {
    async fn get_affiliate_ids(&self) -> Result<AffiliateIds, DomainError>;
}
