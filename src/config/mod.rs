//! File/env backed configuration.

pub mod scoring;

pub use scoring::{ScoringConfig, ENV_SCORING_CONFIG_PATH};
