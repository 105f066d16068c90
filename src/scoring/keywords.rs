//! Keyword extraction for answer scoring.

use once_cell::sync::Lazy;
use regex::Regex;

/// Punctuation removed before splitting: . , / # ! $ % ^ & * ; : { } = - _ ` ~ ( )
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()]").expect("punctuation regex"));

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Tokens of four or more characters are candidate keywords.
const MIN_KEYWORD_CHARS: usize = 4;

/// Lower-cased content words of `text`, in original order, duplicates kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, "");
    stripped
        .split_whitespace()
        .filter(|w| w.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|w| !is_stop_word(w))
        .map(str::to_string)
        .collect()
}

fn is_stop_word(w: &str) -> bool {
    STOP_WORDS.contains(&w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_stop_words_are_dropped() {
        assert!(extract_keywords("The cat sat").is_empty());
        assert_eq!(
            extract_keywords("elephants migrate annually"),
            vec!["elephants", "migrate", "annually"]
        );
    }

    #[test]
    fn punctuation_is_removed_not_split() {
        // "cell-wall" loses the hyphen and stays one token.
        assert_eq!(
            extract_keywords("Plant cells: cell-wall (cellulose)!"),
            vec!["plant", "cells", "cellwall", "cellulose"]
        );
    }

    #[test]
    fn duplicates_keep_their_order() {
        assert_eq!(
            extract_keywords("Energy flows; energy transforms, energy"),
            vec!["energy", "flows", "energy", "transforms", "energy"]
        );
    }

    #[test]
    fn characters_outside_the_set_survive() {
        // '?' and '\'' are not in the stripped set.
        assert_eq!(extract_keywords("what's osmosis?"), vec!["what's", "osmosis?"]);
    }

    #[test]
    fn empty_and_symbol_only_text() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ").is_empty());
        assert!(extract_keywords("#### $$$$ ((()))").is_empty());
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(
            extract_keywords("  nucleus\t\tcontains\n  chromosomes "),
            vec!["nucleus", "contains", "chromosomes"]
        );
    }
}
