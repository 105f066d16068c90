// src/telemetry.rs
//! Logging and metrics plumbing shared by the library and the CLI.
//!
//! Learner answers are personal text. They are never logged raw: dev logs
//! carry a short SHA-256 prefix id instead.

use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_DEV_LOG: &str = "REVIEW_DEV_LOG";
pub const ENV_REVIEW_ENV: &str = "REVIEW_ENV";

pub(crate) const ANSWERS_SCORED: &str = "answers_scored_total";
pub(crate) const QUEUES_BUILT: &str = "review_queues_built_total";
pub(crate) const QUEUE_SHUFFLES: &str = "review_queue_shuffles_total";
pub(crate) const QUEUE_LEN: &str = "review_queue_len";

/// Install a compact stderr subscriber. `RUST_LOG` wins over the default
/// filter. Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("study_review_engine=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

/// One-time metric descriptions, so series carry help text once a recorder
/// is installed by the host.
pub fn describe_metrics() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(ANSWERS_SCORED, "Answers scored, labelled by rating.");
        describe_counter!(
            QUEUES_BUILT,
            "Review queues built, labelled by filter and sort."
        );
        describe_counter!(QUEUE_SHUFFLES, "Review queue shuffles.");
        describe_histogram!(QUEUE_LEN, "Number of cards in a built review queue.");
    });
}

/// Dev logging gate: REVIEW_DEV_LOG=1 AND dev env (debug build or
/// REVIEW_ENV in {local, development, dev}).
pub(crate) fn dev_logging_enabled() -> bool {
    static ON: OnceCell<bool> = OnceCell::new();
    *ON.get_or_init(|| {
        let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
        on && (cfg!(debug_assertions) || is_dev_env(std::env::var(ENV_REVIEW_ENV).ok()))
    })
}

fn is_dev_env(raw: Option<String>) -> bool {
    matches!(
        raw.unwrap_or_default().trim().to_ascii_lowercase().as_str(),
        "local" | "development" | "dev"
    )
}

/// 12 hex chars of SHA-256, enough to correlate log lines.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    use std::fmt::Write as _;

    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anon_hash_is_stable_and_short() {
        let a = anon_hash("mitochondria is the powerhouse");
        assert_eq!(a.len(), 12);
        assert_eq!(a, anon_hash("mitochondria is the powerhouse"));
        assert_ne!(a, anon_hash("mitochondria"));
        // sha256("") = e3b0c442 98fc...
        assert_eq!(anon_hash(""), "e3b0c44298fc");
    }

    #[test]
    fn dev_env_names() {
        assert!(is_dev_env(Some("Local".into())));
        assert!(is_dev_env(Some(" dev ".into())));
        assert!(!is_dev_env(Some("production".into())));
        assert!(!is_dev_env(None));
    }
}
