// src/lib.rs
// Public library surface for the CLI, integration tests and embedding hosts.

pub mod card;
pub mod config;
pub mod queue;
pub mod scoring;
pub mod telemetry;

// Opt-in SM-2 style schedule proposal (not used by scoring or queue building).
pub mod schedule;

// ---- Re-exports for stable public API ----
pub use crate::card::{CardStatus, Deck, Flashcard, RecallRating};
pub use crate::config::ScoringConfig;
pub use crate::queue::{
    build_queue, shuffle, shuffle_random, DeckStats, FilterType, QueueOptions, RatingSink,
    ReviewQueueBuilder, ReviewSession, SortType, Submission,
};
pub use crate::scoring::{
    extract_keywords, score_answer, similarity, AnswerScorer, Feedback, ScoringResult,
};
