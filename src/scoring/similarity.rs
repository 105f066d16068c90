//! Dice coefficient over character bigrams.
//!
//! `2 * |common bigrams| / (|bigrams(a)| + |bigrams(b)|)` on trimmed,
//! lower-cased text. Bigrams are a multiset: a repeated pair only matches as
//! often as it occurs on both sides. Strings shorter than two characters have
//! no bigrams and are compared for equality instead.

use std::collections::HashMap;

/// Similarity in [0,1]; symmetric, and 1.0 for identical input.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a.len() < 2 || b.len() < 2 {
        return if a == b { 1.0 } else { 0.0 };
    }

    let mut counts: HashMap<(char, char), usize> = HashMap::with_capacity(a.len());
    for pair in a.windows(2) {
        *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut common = 0usize;
    for pair in b.windows(2) {
        if let Some(n) = counts.get_mut(&(pair[0], pair[1])) {
            if *n > 0 {
                *n -= 1;
                common += 1;
            }
        }
    }

    let total = (a.len() - 1) + (b.len() - 1);
    (2 * common) as f64 / total as f64
}

fn normalize(s: &str) -> Vec<char> {
    s.trim().to_lowercase().chars().collect()
}
