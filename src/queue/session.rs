//! One sitting over a deck: the ordered queue plus the cursor of the card on
//! screen. Ordering stays in `ReviewQueueBuilder`; the session only owns
//! navigation state.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::{shuffle, QueueOptions, ReviewQueueBuilder};
use crate::card::{Flashcard, RecallRating};
use crate::scoring::{AnswerScorer, ScoringResult};

/// Persistence collaborator that records a rating (and recomputes
/// status/schedule on its side).
pub trait RatingSink {
    fn apply_rating(&mut self, card_id: &str, rating: RecallRating) -> anyhow::Result<()>;
}

/// What `submit` hands back for the card that was just answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub card_id: String,
    /// Cursor value the answered card had.
    pub position: usize,
    pub result: ScoringResult,
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    deck: Vec<Flashcard>,
    options: QueueOptions,
    builder: ReviewQueueBuilder,
    queue: Vec<Flashcard>,
    cursor: usize,
}

impl ReviewSession {
    pub fn new(deck: Vec<Flashcard>, options: QueueOptions, now: DateTime<Utc>) -> Self {
        let builder = ReviewQueueBuilder::new(now);
        let queue = builder.build(&deck, &options);
        Self {
            deck,
            options,
            builder,
            queue,
            cursor: 0,
        }
    }

    pub fn options(&self) -> &QueueOptions {
        &self.options
    }

    pub fn queue(&self) -> &[Flashcard] {
        &self.queue
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// No card matched the options; the UI should offer to reset the filter.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.queue.get(self.cursor)
    }

    /// Step to the next card. Saturates at `len()` (finished).
    pub fn advance(&mut self) -> Option<&Flashcard> {
        if self.cursor < self.queue.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Shuffle the current queue and go back to its first card.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.queue = shuffle(&self.queue, rng);
        self.cursor = 0;
        debug!(target: "queue", len = self.queue.len(), "session shuffled");
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Rebuild the canonical order from the deck and options; drops any shuffle.
    pub fn restart(&mut self) {
        self.queue = self.builder.build(&self.deck, &self.options);
        self.cursor = 0;
        info!(target: "queue", len = self.queue.len(), "session restarted");
    }

    /// Switch filter/sort/scope and start over.
    pub fn set_options(&mut self, options: QueueOptions) {
        self.options = options;
        self.restart();
    }

    /// Score `answer` against the current card, report the rating to `sink`
    /// and move on. The cursor only advances once the sink accepted the
    /// rating. `Ok(None)` when there is no current card.
    pub fn submit(
        &mut self,
        scorer: &AnswerScorer,
        answer: &str,
        sink: &mut dyn RatingSink,
    ) -> anyhow::Result<Option<Submission>> {
        let Some(card) = self.current() else {
            return Ok(None);
        };
        let card_id = card.id.clone();
        let result = scorer.score(answer, &card.answer);

        sink.apply_rating(&card_id, result.rating)
            .map_err(|e| e.context(format!("recording rating for card {card_id}")))?;

        let position = self.cursor;
        self.cursor += 1;
        debug!(
            target: "queue",
            position,
            rating = result.rating.as_str(),
            remaining = self.queue.len() - self.cursor,
            "answer submitted"
        );
        Ok(Some(Submission {
            card_id,
            position,
            result,
        }))
    }
}
