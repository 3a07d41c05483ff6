//! Admin domain module.
//!
//! Decides who may see operator-only views such as the affiliate dashboard.

mod policy;

pub use policy::AdminPolicy;
