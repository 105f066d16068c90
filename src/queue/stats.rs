//! Per-filter counts, so a UI can label filters and show an empty state
//! before building a queue.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::FilterType;
use crate::card::{CardStatus, Flashcard};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub total: usize,
    pub due: usize,
    pub new: usize,
    pub learning: usize,
    pub known: usize,
    pub difficult: usize,
    pub easy: usize,
}

impl DeckStats {
    pub fn collect(cards: &[Flashcard], now: DateTime<Utc>) -> Self {
        let mut s = DeckStats {
            total: cards.len(),
            ..Default::default()
        };
        for c in cards {
            if c.is_due(now) {
                s.due += 1;
            }
            match c.status {
                CardStatus::New => s.new += 1,
                CardStatus::Learning => s.learning += 1,
                CardStatus::Known => s.known += 1,
            }
            if FilterType::Difficult.keeps(c) {
                s.difficult += 1;
            }
            if FilterType::Easy.keeps(c) {
                s.easy += 1;
            }
        }
        s
    }

    /// Size of the queue `filter` would produce (unscoped).
    pub fn count_for(&self, filter: FilterType) -> usize {
        match filter {
            FilterType::All => self.total,
            FilterType::Difficult => self.difficult,
            FilterType::Easy => self.easy,
            FilterType::New => self.new,
            FilterType::Mastered => self.known,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::RecallRating;
    use crate::queue::{build_queue, SortType};
    use chrono::{Duration, TimeZone};

    #[test]
    fn counts_agree_with_built_queues() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let later = now + Duration::days(2);
        let deck = vec![
            Flashcard::new("a", "q", "a", now),
            Flashcard::new("b", "q", "a", now)
                .with_status(CardStatus::Known)
                .with_rating(RecallRating::Hard)
                .with_next_review(later),
            Flashcard::new("c", "q", "a", now)
                .with_status(CardStatus::Learning)
                .with_rating(RecallRating::Easy),
            Flashcard::new("d", "q", "a", now)
                .with_status(CardStatus::Learning)
                .with_rating(RecallRating::Forgot)
                .with_next_review(later),
        ];

        let stats = DeckStats::collect(&deck, now);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.due, 2);
        assert_eq!((stats.new, stats.learning, stats.known), (1, 2, 1));

        for f in FilterType::ALL {
            let q = build_queue(&deck, f, SortType::Default, None, now);
            assert_eq!(stats.count_for(f), q.len(), "filter {f}");
        }
    }

    #[test]
    fn empty_deck() {
        let s = DeckStats::collect(&[], Utc::now());
        assert_eq!(s, DeckStats::default());
        assert_eq!(s.count_for(FilterType::All), 0);
    }
}
