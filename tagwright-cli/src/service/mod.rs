//! Service layer
//!
//! Business logic for workspace provisioning, separated from transport and
//! command plumbing. The provisioner depends only on the API capability
//! trait, so it runs identically against the HTTP client and an in-memory
//! test double.

mod builders;
mod provision;

pub use builders::{ga4_config_tag_body, ga4_event_tag_body, popup_tag_body};
pub use provision::{ProvisionOutcome, ProvisionPlan, Provisioner};
