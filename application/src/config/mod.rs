//! Application-level configuration.
//!
//! - [`BehaviorConfig`]: which model answers and whether answers are cached

pub mod behavior;

pub use behavior::BehaviorConfig;
