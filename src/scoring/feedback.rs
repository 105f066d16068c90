//! Learner-facing summary of a scoring result.

use serde::Serialize;
use std::collections::HashSet;

use super::ScoringResult;
use crate::card::RecallRating;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// `final_score` as a rounded percentage, 0..=100.
    pub percent: u8,
    pub rating: RecallRating,
    pub headline: &'static str,
    /// Missing keywords for display: each listed once, first occurrence order.
    pub missing_keywords: Vec<String>,
}

impl ScoringResult {
    pub fn feedback(&self) -> Feedback {
        let mut seen = HashSet::new();
        let missing_keywords = self
            .missing_keywords
            .iter()
            .filter(|k| seen.insert(k.as_str()))
            .cloned()
            .collect();

        Feedback {
            percent: (self.final_score.clamp(0.0, 1.0) * 100.0).round() as u8,
            rating: self.rating,
            headline: headline(self.rating),
            missing_keywords,
        }
    }
}

fn headline(rating: RecallRating) -> &'static str {
    match rating {
        RecallRating::Easy => "Excellent! You nailed it.",
        RecallRating::Good => "Good job, most of the key ideas are there.",
        RecallRating::Hard => "Partially correct. Review the missing concepts.",
        RecallRating::Forgot => "Not quite. Take another look at this card.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(final_score: f64, rating: RecallRating, missing: &[&str]) -> ScoringResult {
        ScoringResult {
            overall_similarity: 0.0,
            keyword_score: 0.0,
            missing_keywords: missing.iter().map(|s| s.to_string()).collect(),
            final_score,
            rating,
        }
    }

    #[test]
    fn percent_is_rounded() {
        assert_eq!(result(0.846, RecallRating::Good, &[]).feedback().percent, 85);
        assert_eq!(result(1.0, RecallRating::Easy, &[]).feedback().percent, 100);
        assert_eq!(result(0.0, RecallRating::Forgot, &[]).feedback().percent, 0);
    }

    #[test]
    fn missing_keywords_deduplicated_for_display() {
        let fb = result(0.3, RecallRating::Forgot, &["energy", "light", "energy"]).feedback();
        assert_eq!(fb.missing_keywords, vec!["energy", "light"]);
        assert_eq!(fb.rating, RecallRating::Forgot);

        let v = serde_json::to_value(&fb).unwrap();
        assert_eq!(v["missingKeywords"], serde_json::json!(["energy", "light"]));
    }
}
