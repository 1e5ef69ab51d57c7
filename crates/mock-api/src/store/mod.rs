mod muting_store;

pub use muting_store::MutingRuleStore;
