// tests/scoring_properties.rs
// Behavioural properties of the answer scorer through the public API.

use study_review_engine::{extract_keywords, score_answer, similarity, AnswerScorer, RecallRating};

const SAMPLES: &[&str] = &[
    "Mitochondria are the powerhouse of the cell",
    "DNA replication is semi-conservative",
    "The mitochondrion produces ATP",
    "ab",
    "Newton's second law: F = m * a",
    "  osmosis  ",
    "élan vital",
];

#[test]
fn similarity_is_reflexive() {
    for s in SAMPLES {
        assert_eq!(similarity(s, s), 1.0, "{s:?}");
    }
}

#[test]
fn similarity_is_symmetric_and_bounded() {
    for a in SAMPLES {
        for b in SAMPLES {
            let ab = similarity(a, b);
            assert_eq!(ab, similarity(b, a), "{a:?} vs {b:?}");
            assert!((0.0..=1.0).contains(&ab));
        }
    }
}

#[test]
fn keyword_examples() {
    assert!(extract_keywords("The cat sat").is_empty());
    assert_eq!(
        extract_keywords("elephants migrate annually"),
        vec!["elephants", "migrate", "annually"]
    );
}

#[test]
fn empty_answer_never_reaches_hard() {
    for reference in SAMPLES.iter().filter(|s| !extract_keywords(s).is_empty()) {
        let r = score_answer("", reference);
        assert!(r.final_score < 0.5, "{reference:?} -> {}", r.final_score);
        assert_eq!(r.rating, RecallRating::Forgot);
    }
    assert_eq!(score_answer("", "any reference text").rating, RecallRating::Forgot);
}

#[test]
fn keywordless_reference_gives_wrong_answers_the_keyword_share() {
    // Short references like "ATP" have no keyword of 4+ chars, so the keyword
    // part is a full 0.6 and any answer lands on `hard` at least.
    for (answer, reference) in [("", "ATP"), ("glucose", "DNA"), ("", "to be or")] {
        let r = score_answer(answer, reference);
        assert_eq!(r.keyword_score, 1.0, "{answer:?} / {reference:?}");
        assert_eq!(r.overall_similarity, 0.0);
        assert!((r.final_score - 0.6).abs() < 1e-9);
        assert_eq!(r.rating, RecallRating::Hard);
    }
}

#[test]
fn answer_equal_to_reference_is_perfect() {
    for s in SAMPLES.iter().filter(|s| !s.trim().is_empty()) {
        let r = score_answer(s, s);
        assert_eq!(r.final_score, 1.0, "{s:?}");
        assert_eq!(r.rating, RecallRating::Easy);
    }
}

#[test]
fn zero_keyword_reference_is_not_nan() {
    let r = score_answer("whatever you like", "to be or");
    assert_eq!(r.keyword_score, 1.0);
    assert!(r.final_score.is_finite());
    assert!(r.missing_keywords.is_empty());
}

#[test]
fn symbol_only_input_is_handled() {
    let r = score_answer("!!! ###", "(){}");
    assert!(r.final_score.is_finite());
    assert!((0.0..=1.0).contains(&r.final_score));
}

#[test]
fn paraphrase_ranks_between_miss_and_exact() {
    let scorer = AnswerScorer::default();
    let reference = "Photosynthesis converts light energy into chemical energy stored in glucose";
    let exact = scorer.score(reference, reference);
    let close = scorer.score(
        "photosynthesis turns light energy into chemical energy in glucose",
        reference,
    );
    let miss = scorer.score("the heart pumps blood", reference);

    assert!(exact.final_score > close.final_score);
    assert!(close.final_score > miss.final_score);
    assert!(matches!(close.rating, RecallRating::Good | RecallRating::Easy));
    assert_eq!(miss.rating, RecallRating::Forgot);
    // "converts" and "stored" are absent from the paraphrase.
    assert_eq!(close.missing_keywords, vec!["converts", "stored"]);
}

#[test]
fn feedback_reflects_result() {
    let r = score_answer("glucose", "glucose and oxygen, oxygen again");
    let fb = r.feedback();
    assert_eq!(fb.rating, r.rating);
    assert_eq!(fb.percent, (r.final_score * 100.0).round() as u8);
    assert_eq!(r.missing_keywords, vec!["oxygen", "oxygen", "again"]);
    assert_eq!(fb.missing_keywords, vec!["oxygen", "again"]);
}
