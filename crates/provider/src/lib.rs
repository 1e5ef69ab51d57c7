pub mod alert_muting;
pub mod config;
pub mod context;
pub mod resource;

pub use alert_muting::{AlertMutingRuleConfig, AlertMutingRuleResource, MutingFilter, ResourceData};
pub use context::ProviderContext;
pub use resource::{Operation, Resource, ResourceError};
