//! The `signalfx_alert_muting_rule` resource.
//!
//! The platform rewrites a muting rule's start time to "now" when the
//! requested start is already past. The declared `start_time` therefore never
//! reflects what the server holds; the server's value is tracked separately as
//! `effective_start_time` and resent on updates once the declared start has
//! passed.

mod data;
mod filters;
mod payload;
mod projector;
mod resource;
pub mod schema;
mod window;

pub use data::{AlertMutingRuleConfig, MutingFilter, ResourceData};
pub use filters::{encode_filters, partition_filters, PartitionedFilters};
pub use payload::{build_payload, PayloadError};
pub use projector::project;
pub use resource::{AlertMutingRuleResource, TYPE_NAME};
pub use window::start_time_for_update;
