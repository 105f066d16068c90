// src/queue/mod.rs
//! # Review Queue
//! Pure, deterministic ordering of a deck for one sitting.
//!
//! Order of operations:
//! 1) scope to a source note (optional)
//! 2) learner filter (all / difficult / easy / new / mastered)
//! 3) sort (default / newest / oldest / difficulty), always stable
//!
//! The queue is re-derived from `(cards, options, now)` every time, so a
//! shuffle never destroys the canonical order.

pub mod session;
pub mod shuffle;
pub mod stats;

use chrono::{DateTime, Utc};
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::card::{CardStatus, Flashcard, RecallRating};
use crate::telemetry;

pub use session::{RatingSink, ReviewSession, Submission};
pub use shuffle::{shuffle, shuffle_random};
pub use stats::DeckStats;

/// Learner-facing filter. Mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    All,
    /// Last rating was `hard` or `forgot`.
    Difficult,
    /// Last rating was `easy`.
    Easy,
    New,
    /// Status `known`.
    Mastered,
}

impl FilterType {
    pub const ALL: [FilterType; 5] = [
        FilterType::All,
        FilterType::Difficult,
        FilterType::Easy,
        FilterType::New,
        FilterType::Mastered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterType::All => "all",
            FilterType::Difficult => "difficult",
            FilterType::Easy => "easy",
            FilterType::New => "new",
            FilterType::Mastered => "mastered",
        }
    }

    pub fn keeps(self, card: &Flashcard) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Difficult => card.last_recall_rating.is_some_and(RecallRating::is_difficult),
            FilterType::Easy => card.last_recall_rating == Some(RecallRating::Easy),
            FilterType::New => card.status == CardStatus::New,
            FilterType::Mastered => card.status == CardStatus::Known,
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FilterType::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| anyhow::anyhow!("unknown filter: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Due before not due, then new < learning < known.
    #[default]
    Default,
    /// `created_at` descending.
    Newest,
    /// `created_at` ascending.
    Oldest,
    /// Hardest last rating first; unrated counts as `forgot`.
    Difficulty,
}

impl SortType {
    pub const ALL: [SortType; 4] = [
        SortType::Default,
        SortType::Newest,
        SortType::Oldest,
        SortType::Difficulty,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortType::Default => "default",
            SortType::Newest => "newest",
            SortType::Oldest => "oldest",
            SortType::Difficulty => "difficulty",
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SortType::ALL
            .into_iter()
            .find(|o| o.as_str() == wanted)
            .ok_or_else(|| anyhow::anyhow!("unknown sort: {s}"))
    }
}

/// Transient UI state: what the learner asked to see.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueueOptions {
    #[serde(default)]
    pub filter: FilterType,
    #[serde(default)]
    pub sort: SortType,
    /// Keep only cards generated from this note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_note_id: Option<String>,
}

impl QueueOptions {
    pub fn new(filter: FilterType, sort: SortType) -> Self {
        Self {
            filter,
            sort,
            scope_note_id: None,
        }
    }

    pub fn scoped_to(mut self, note_id: impl Into<String>) -> Self {
        self.scope_note_id = Some(note_id.into());
        self
    }

    fn in_scope(&self, card: &Flashcard) -> bool {
        match &self.scope_note_id {
            None => true,
            Some(id) => card.source_note_id.as_deref() == Some(id.as_str()),
        }
    }
}

/// Builds review queues against a fixed "now".
#[derive(Debug, Clone, Copy)]
pub struct ReviewQueueBuilder {
    now: DateTime<Utc>,
}

impl ReviewQueueBuilder {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Builder pinned to the current wall-clock time.
    pub fn at_now() -> Self {
        Self::new(Utc::now())
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Filtered, sorted copy of `cards`. An empty result is a normal outcome.
    pub fn build(&self, cards: &[Flashcard], opts: &QueueOptions) -> Vec<Flashcard> {
        telemetry::describe_metrics();

        let mut queue: Vec<Flashcard> = cards
            .iter()
            .filter(|c| opts.in_scope(c))
            .filter(|c| opts.filter.keeps(c))
            .cloned()
            .collect();

        self.sort(&mut queue, opts.sort);

        counter!(
            telemetry::QUEUES_BUILT,
            "filter" => opts.filter.as_str(),
            "sort" => opts.sort.as_str()
        )
        .increment(1);
        histogram!(telemetry::QUEUE_LEN).record(queue.len() as f64);
        debug!(
            target: "queue",
            filter = opts.filter.as_str(),
            sort = opts.sort.as_str(),
            scoped = opts.scope_note_id.is_some(),
            total = cards.len(),
            kept = queue.len(),
            "review queue built"
        );

        queue
    }

    // `sort_by*` on slices is stable, so ties keep deck order.
    fn sort(&self, queue: &mut [Flashcard], sort: SortType) {
        let now = self.now;
        match sort {
            SortType::Default => {
                queue.sort_by_key(|c| (!c.is_due(now), c.status.queue_rank()));
            }
            SortType::Newest => queue.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortType::Oldest => queue.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortType::Difficulty => {
                queue.sort_by_key(|c| c.last_recall_rating.map_or(0, RecallRating::severity));
            }
        }
    }
}

/// One-shot helper for callers that don't keep a builder around.
pub fn build_queue(
    cards: &[Flashcard],
    filter: FilterType,
    sort: SortType,
    scope_note_id: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<Flashcard> {
    let opts = QueueOptions {
        filter,
        sort,
        scope_note_id: scope_note_id.map(str::to_string),
    };
    ReviewQueueBuilder::new(now).build(cards, &opts)
}
