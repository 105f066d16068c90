//! # Flashcards
//! Read-only card records as handed over by the persistence layer.
//!
//! The engine never mutates these fields. It reads them to order a queue and
//! proposes ratings or schedule updates that the caller may persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The full set of cards eligible for a session, before filtering/sorting.
pub type Deck = Vec<Flashcard>;

/// Learning status of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    #[default]
    New,
    Learning,
    Known,
}

impl CardStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CardStatus::New => "new",
            CardStatus::Learning => "learning",
            CardStatus::Known => "known",
        }
    }

    /// Secondary key of the default queue order (new first).
    pub(crate) fn queue_rank(self) -> u8 {
        match self {
            CardStatus::New => 0,
            CardStatus::Learning => 1,
            CardStatus::Known => 2,
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(CardStatus::New),
            "learning" => Ok(CardStatus::Learning),
            "known" => Ok(CardStatus::Known),
            other => anyhow::bail!("unknown card status: {other}"),
        }
    }
}

/// Outcome of a single review, self-assessed or computed by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecallRating {
    Easy,
    Good,
    Hard,
    Forgot,
}

impl RecallRating {
    pub fn as_str(self) -> &'static str {
        match self {
            RecallRating::Easy => "easy",
            RecallRating::Good => "good",
            RecallRating::Hard => "hard",
            RecallRating::Forgot => "forgot",
        }
    }

    /// Severity used by the `difficulty` sort: lower means harder.
    pub(crate) fn severity(self) -> u8 {
        match self {
            RecallRating::Forgot => 0,
            RecallRating::Hard => 1,
            RecallRating::Good => 2,
            RecallRating::Easy => 3,
        }
    }

    /// `hard` and `forgot` both count as a struggle.
    pub fn is_difficult(self) -> bool {
        matches!(self, RecallRating::Hard | RecallRating::Forgot)
    }
}

impl fmt::Display for RecallRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecallRating {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(RecallRating::Easy),
            "good" => Ok(RecallRating::Good),
            "hard" => Ok(RecallRating::Hard),
            "forgot" => Ok(RecallRating::Forgot),
            other => anyhow::bail!("unknown recall rating: {other}"),
        }
    }
}

/// A flashcard row. Field names follow the UI payload (camelCase); the
/// snake_case column names of the storage rows are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    /// Reference text the learner's answer is scored against.
    pub answer: String,
    #[serde(default)]
    pub status: CardStatus,
    #[serde(default, alias = "last_recall_rating")]
    pub last_recall_rating: Option<RecallRating>,
    /// `None` means the card is always due.
    #[serde(default, alias = "next_review_at")]
    pub next_review_at: Option<DateTime<Utc>>,
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "source_note_id")]
    pub source_note_id: Option<String>,

    // Schedule fields, only read by `schedule`.
    #[serde(default, alias = "ease_factor", skip_serializing_if = "Option::is_none")]
    pub ease_factor: Option<f64>,
    #[serde(default, alias = "review_interval", skip_serializing_if = "Option::is_none")]
    pub review_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u32>,
}

impl Flashcard {
    /// A fresh `new` card with no review history.
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            status: CardStatus::New,
            last_recall_rating: None,
            next_review_at: None,
            created_at,
            source_note_id: None,
            ease_factor: None,
            review_interval: None,
            repetitions: None,
        }
    }

    pub fn with_status(mut self, status: CardStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_rating(mut self, rating: RecallRating) -> Self {
        self.last_recall_rating = Some(rating);
        self
    }

    pub fn with_next_review(mut self, at: DateTime<Utc>) -> Self {
        self.next_review_at = Some(at);
        self
    }

    pub fn with_source_note(mut self, note_id: impl Into<String>) -> Self {
        self.source_note_id = Some(note_id.into());
        self
    }

    /// Due when no review is scheduled or the scheduled time has passed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.next_review_at {
            None => true,
            Some(at) => at <= now,
        }
    }
}
