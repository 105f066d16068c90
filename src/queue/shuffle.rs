//! Fisher-Yates shuffle that leaves the input untouched.

use metrics::counter;
use rand::Rng;

use crate::telemetry;

/// Uniform random permutation of `queue`, returned as a new vector.
///
/// The RNG is injected so tests (and replayable sessions) can pass a seeded one.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(queue: &[T], rng: &mut R) -> Vec<T> {
    let mut out = queue.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    counter!(telemetry::QUEUE_SHUFFLES).increment(1);
    out
}

/// `shuffle` with the thread-local RNG.
pub fn shuffle_random<T: Clone>(queue: &[T]) -> Vec<T> {
    shuffle(queue, &mut rand::rng())
}
