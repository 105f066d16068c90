// src/scoring/mod.rs
//! Answer scoring: compares a typed answer with the card's reference answer
//! locally and maps the result onto a recall rating.
//!
//! final = keyword_weight * keyword_score + similarity_weight * overall_similarity
//!
//! - overall_similarity: bigram Dice of the full texts
//! - keyword_score: share of reference keywords that some user keyword
//!   matches with similarity above the match threshold

pub mod feedback;
pub mod keywords;
pub mod similarity;

use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::RecallRating;
use crate::config::ScoringConfig;
use crate::telemetry::{self, anon_hash, dev_logging_enabled};

pub use feedback::Feedback;
pub use keywords::extract_keywords;
pub use similarity::similarity;

/// Outcome of scoring one answer. Ephemeral; the caller decides what to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    #[serde(alias = "overall_similarity")]
    pub overall_similarity: f64,
    /// 1.0 when the reference has no keywords (nothing to miss).
    #[serde(alias = "keyword_score")]
    pub keyword_score: f64,
    /// Reference keywords no user keyword matched, in reference order.
    #[serde(alias = "missing_keywords")]
    pub missing_keywords: Vec<String>,
    #[serde(alias = "final_score")]
    pub final_score: f64,
    pub rating: RecallRating,
}

/// Scorer with its tunables. `AnswerScorer::default()` is the shipped behaviour.
#[derive(Debug, Clone, Default)]
pub struct AnswerScorer {
    cfg: ScoringConfig,
}

impl AnswerScorer {
    pub fn new(cfg: ScoringConfig) -> Self {
        Self {
            cfg: cfg.sanitized(),
        }
    }

    /// Scorer configured via `$SCORING_CONFIG_PATH` / `config/scoring.*`.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(ScoringConfig::load_default()?))
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.cfg
    }

    /// Total over all inputs: empty or symbol-only text just scores low.
    pub fn score(&self, user_answer: &str, reference_answer: &str) -> ScoringResult {
        telemetry::describe_metrics();

        let reference_keywords = extract_keywords(reference_answer);
        let user_keywords = extract_keywords(user_answer);

        let mut missing_keywords = Vec::new();
        let mut matched = 0usize;
        for k in &reference_keywords {
            let hit = user_keywords
                .iter()
                .any(|w| similarity(w, k) > self.cfg.keyword_match_threshold);
            if hit {
                matched += 1;
            } else {
                missing_keywords.push(k.clone());
            }
        }

        let keyword_score = if reference_keywords.is_empty() {
            1.0
        } else {
            matched as f64 / reference_keywords.len() as f64
        };

        let overall_similarity = similarity(user_answer, reference_answer);
        let final_score = (self.cfg.keyword_weight * keyword_score
            + self.cfg.similarity_weight * overall_similarity)
            .clamp(0.0, 1.0);
        let rating = rating_for(final_score, &self.cfg);

        counter!(telemetry::ANSWERS_SCORED, "rating" => rating.as_str()).increment(1);
        if dev_logging_enabled() {
            debug!(
                target: "scoring",
                answer_id = %anon_hash(user_answer),
                reference_id = %anon_hash(reference_answer),
                keyword_score, overall_similarity, final_score,
                rating = rating.as_str(),
                missing = missing_keywords.len(),
                "answer scored"
            );
        } else {
            debug!(target: "scoring", final_score, rating = rating.as_str(), "answer scored");
        }

        ScoringResult {
            overall_similarity,
            keyword_score,
            missing_keywords,
            final_score,
            rating,
        }
    }
}

/// First matching cut-off wins: easy, good, hard, else forgot.
pub fn rating_for(final_score: f64, cfg: &ScoringConfig) -> RecallRating {
    if final_score >= cfg.easy_threshold {
        RecallRating::Easy
    } else if final_score >= cfg.good_threshold {
        RecallRating::Good
    } else if final_score >= cfg.hard_threshold {
        RecallRating::Hard
    } else {
        RecallRating::Forgot
    }
}

/// Score with the default tunables.
pub fn score_answer(user_answer: &str, reference_answer: &str) -> ScoringResult {
    AnswerScorer::default().score(user_answer, reference_answer)
}
