use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::config::WordCloudSettings;

/// A word and its frequency relative to the most common word.
#[derive(Clone, Debug, PartialEq)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
    /// `count / max_count`, in `(0, 1]`.
    pub weight: f32,
}

const STOPWORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "but", "by", "can", "could", "did", "do", "does",
    "doing", "down", "for", "from", "further", "had", "has", "have", "having", "he", "her",
    "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just",
    "me", "more", "most", "my", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "with", "would", "you", "your", "yours",
];

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w[\w']+").expect("token regex must compile"))
}

/// Count words in `text`, most frequent first.
///
/// Tokens are runs of at least two word characters (apostrophes allowed after
/// the first), lowercased. Built-in and configured stopwords are dropped. Ties
/// are broken alphabetically and the list is capped at `settings.max_words`.
pub fn word_frequencies(text: &str, settings: &WordCloudSettings) -> Vec<WordWeight> {
    let extra: HashSet<&str> = settings
        .extra_stopwords
        .iter()
        .map(String::as_str)
        .collect();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in token_pattern().find_iter(text) {
        let word = token.as_str().to_lowercase();
        if STOPWORDS.contains(&word.as_str()) || extra.contains(word.as_str()) {
            continue;
        }
        *counts.entry(word).or_default() += 1;
    }

    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|(a_word, a_count), (b_word, b_count)| {
        b_count.cmp(a_count).then_with(|| a_word.cmp(b_word))
    });
    sorted.truncate(settings.max_words);

    let max_count = sorted.first().map(|(_, count)| *count).unwrap_or(1) as f32;
    sorted
        .into_iter()
        .map(|(word, count)| WordWeight {
            weight: count as f32 / max_count,
            word,
            count,
        })
        .collect()
}
