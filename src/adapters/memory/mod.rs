//! In-memory adapters.
//!
//! Used by the development server and tests in place of the hosted data
//! store. State lives for the life of the process.

mod affiliate_store;
mod profile_store;

pub use affiliate_store::InMemoryAffiliateStore;
pub use profile_store::InMemoryProfileStore;
