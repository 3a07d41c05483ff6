//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Plan Ports
//!
//! - `PlanProfileReader` - Tier and usage counters from the profile store
//! - `UsageRecorder` - Increments metered usage counters
//!
//! ## Affiliate Ports
//!
//! - `AffiliateConfigReader` - Stored partner ids that override configured defaults
//! - `AffiliateClickRepository` - Outbound click log

mod affiliate_click_repository;
mod affiliate_config_reader;
mod plan_profile_reader;
mod usage_recorder;

pub use affiliate_click_repository::AffiliateClickRepository;
pub use affiliate_config_reader::AffiliateConfigReader;
pub use plan_profile_reader::{PlanProfile, PlanProfileReader};
pub use usage_recorder::{IncrementOutcome, UsageRecorder};
