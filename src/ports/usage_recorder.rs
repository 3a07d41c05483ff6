//! Write port for metered usage counters.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::plan::{Limit, UsageMetric, UsageSnapshot};

/// Outcome of a capped increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementOutcome {
    /// The counter was below the limit and has been bumped.
    Recorded(UsageSnapshot),
    /// The counter had already reached the limit; nothing was written.
    AtLimit(UsageSnapshot),
}

/// Persists usage counter changes.
#[async_trait]
pub trait UsageRecorder: Send + Sync {
    /// Adds one to `metric` for the user unless the stored counter has
    /// already reached `limit`.
    ///
    /// The limit check and the write must be a single atomic step in the
    /// store, so concurrent callers cannot push a counter past its cap.
    async fn increment_within(
        &self,
        user_id: &UserId,
        metric: UsageMetric,
        limit: Limit,
    ) -> Result<IncrementOutcome, DomainError>;
}
