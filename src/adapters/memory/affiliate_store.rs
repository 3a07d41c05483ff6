//! In-memory affiliate configuration and click log.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::affiliate::{AffiliateClick, AffiliateIds};
use crate::domain::foundation::DomainError;
use crate::ports::{AffiliateClickRepository, AffiliateConfigReader};

/// Stored partner ids plus an append-only click log.
#[derive(Debug, Default)]
pub struct InMemoryAffiliateStore {
    ids: RwLock<AffiliateIds>,
    clicks: RwLock<Vec<AffiliateClick>>,
}

impl InMemoryAffiliateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored partner ids.
    pub async fn set_ids(&self, ids: AffiliateIds) {
        *self.ids.write().await = ids;
    }

    pub async fn click_count(&self) -> usize {
        self.clicks.read().await.len()
    }
}

#[async_trait]
impl AffiliateConfigReader for InMemoryAffiliateStore {
    async fn get_affiliate_ids(&self) -> Result<AffiliateIds, DomainError> {
        Ok(self.ids.read().await.clone())
    }
}

#[async_trait]
impl AffiliateClickRepository for InMemoryAffiliateStore {
    async fn record(&self, click: &AffiliateClick) -> Result<(), DomainError> {
        self.clicks.write().await.push(click.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<AffiliateClick>, DomainError> {
        let clicks = self.clicks.read().await;
        let mut recent: Vec<AffiliateClick> = clicks.iter().rev().take(limit).cloned().collect();
        // Newest first by timestamp; ties keep reverse insertion order.
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(recent)
    }
}
