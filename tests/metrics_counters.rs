// tests/metrics_counters.rs
// Counters emitted by scoring and queue building, captured with a local
// debugging recorder (no global recorder is installed).

use chrono::Utc;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use rand::{rngs::StdRng, SeedableRng};
use study_review_engine::{
    build_queue, score_answer, shuffle, FilterType, Flashcard, SortType,
};

#[test]
fn scoring_and_queue_counters_are_emitted() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let reference = "ribosomes synthesize proteins";
        score_answer(reference, reference);
        score_answer("", reference);
        score_answer("", reference);

        let now = Utc::now();
        let deck = vec![
            Flashcard::new("a", "q", "a", now),
            Flashcard::new("b", "q", "b", now),
        ];
        let q = build_queue(&deck, FilterType::All, SortType::Newest, None, now);
        shuffle(&q, &mut StdRng::seed_from_u64(1));
    });

    let snapshot = snapshotter.snapshot().into_vec();
    let counter_value = |name: &str, label: Option<(&str, &str)>| -> u64 {
        snapshot
            .iter()
            .filter(|(key, _, _, _)| key.key().name() == name)
            .filter(|(key, _, _, _)| match label {
                None => true,
                Some((k, v)) => key.key().labels().any(|l| l.key() == k && l.value() == v),
            })
            .map(|(_, _, _, value)| match value {
                DebugValue::Counter(n) => *n,
                _ => 0,
            })
            .sum()
    };
    assert_eq!(
        counter_value("answers_scored_total", Some(("rating", "easy"))),
        1
    );
    assert_eq!(
        counter_value("answers_scored_total", Some(("rating", "forgot"))),
        2
    );
    assert_eq!(
        counter_value("review_queues_built_total", Some(("sort", "newest"))),
        1
    );
    assert_eq!(counter_value("review_queue_shuffles_total", None), 1);
}
