//! Detection-to-log reasoning: classifier, dedup/interval engine and the
//! aggregate updater.

pub mod aggregate;
pub mod classifier;
pub mod engine;

pub use aggregate::update_aggregate;
pub use classifier::{classify, classify_centroid};
pub use engine::{Decision, Engine, EngineSettings, Outcome, Policy, PriorState};
