//! # Schedule proposal (extension)
//!
//! SM-2 style update of a card's schedule after a rating. This is an opt-in
//! extension: queue building and scoring never call it, and it only
//! *proposes* values for the persistence layer to store.
//!
//! Rating to SM-2 quality: forgot=1, hard=3, good=4, easy=5.
//!
//! - forgot: repetitions reset to 0, interval 1 day, ease - 0.2
//! - otherwise: repetitions + 1; interval 1, then 6, then round(prev * ease);
//!   ease += 0.1 - (5-q) * (0.08 + (5-q) * 0.02)
//! - ease never drops below 1.3
//! - intervals are capped at 36500 days (100 years)
//! - status becomes `known` at 3+ repetitions with an interval of 21+ days,
//!   `learning` otherwise

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::card::{CardStatus, Flashcard, RecallRating};

pub const DEFAULT_EASE_FACTOR: f64 = 2.5;
pub const MIN_EASE_FACTOR: f64 = 1.3;
/// Upper bound on any proposed interval, in days.
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

const KNOWN_MIN_REPETITIONS: u32 = 3;
const KNOWN_MIN_INTERVAL_DAYS: u32 = 21;

/// Proposed field values after one review.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    pub last_recall_rating: RecallRating,
    pub status: CardStatus,
    pub ease_factor: f64,
    /// Days until the next review.
    pub review_interval: u32,
    pub repetitions: u32,
    pub next_review_at: DateTime<Utc>,
}

pub fn quality(rating: RecallRating) -> u8 {
    match rating {
        RecallRating::Forgot => 1,
        RecallRating::Hard => 3,
        RecallRating::Good => 4,
        RecallRating::Easy => 5,
    }
}

/// Propose the next schedule for `card` given `rating` at `now`.
/// Missing schedule fields start from ease 2.5, interval 0, repetitions 0.
pub fn propose(card: &Flashcard, rating: RecallRating, now: DateTime<Utc>) -> ScheduleUpdate {
    let ease = card
        .ease_factor
        .filter(|e| e.is_finite())
        .unwrap_or(DEFAULT_EASE_FACTOR);
    let interval = card.review_interval.unwrap_or(0).min(MAX_INTERVAL_DAYS);
    let repetitions = card.repetitions.unwrap_or(0);

    let (ease_factor, review_interval, repetitions) = if rating == RecallRating::Forgot {
        ((ease - 0.2).max(MIN_EASE_FACTOR), 1, 0)
    } else {
        let q = (5 - quality(rating)) as f64;
        let ease_factor = (ease + (0.1 - q * (0.08 + q * 0.02))).max(MIN_EASE_FACTOR);
        let repetitions = repetitions.saturating_add(1);
        let review_interval = match repetitions {
            1 => 1,
            2 => 6,
            _ => ((interval.max(1) as f64) * ease_factor)
                .round()
                .min(MAX_INTERVAL_DAYS as f64) as u32,
        };
        (ease_factor, review_interval, repetitions)
    };

    let status = if repetitions >= KNOWN_MIN_REPETITIONS && review_interval >= KNOWN_MIN_INTERVAL_DAYS
    {
        CardStatus::Known
    } else {
        CardStatus::Learning
    };

    ScheduleUpdate {
        last_recall_rating: rating,
        status,
        ease_factor,
        review_interval,
        repetitions,
        next_review_at: now
            .checked_add_signed(Duration::days(review_interval as i64))
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
    }
}
