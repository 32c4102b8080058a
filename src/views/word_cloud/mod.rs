//! Word frequency rendering for one sentiment class.

mod frequency;
mod layout;
mod palette;

pub use frequency::{WordWeight, word_frequencies};
pub use layout::{FontRange, LAYOUT_CANVAS, PlacedWord, layout_words, to_screen};
pub use palette::{CANVAS_BACKGROUND, word_color};

use crate::config::WordCloudSettings;
use crate::dataset::Dataset;
use crate::labeling::Sentiment;

/// Warning shown instead of a cloud when a class has no text.
pub const NO_DATA_MESSAGE: &str = "No reviews for this sentiment.";
/// Warning shown when a class has words but none fit on the canvas.
pub const NOTHING_PLACED_MESSAGE: &str = "No words fit on the word cloud canvas.";

/// Space-joined review text of every record labeled `sentiment`.
///
/// Missing text is skipped; order follows the dataset.
pub fn text_blob(dataset: &Dataset, sentiment: Sentiment) -> String {
    dataset
        .with_sentiment(sentiment)
        .filter_map(|record| record.content.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result of preparing a cloud for one sentiment.
#[derive(Clone, Debug, PartialEq)]
pub enum WordCloudOutcome {
    /// Nothing to draw: no text, or every token was a stopword.
    NoData,
    /// Words ordered by descending frequency.
    Words(Vec<WordWeight>),
}

impl WordCloudOutcome {
    pub fn build(dataset: &Dataset, sentiment: Sentiment, settings: &WordCloudSettings) -> Self {
        let blob = text_blob(dataset, sentiment);
        if blob.trim().is_empty() {
            tracing::debug!("No text for {sentiment} word cloud");
            return WordCloudOutcome::NoData;
        }
        let words = word_frequencies(&blob, settings);
        if words.is_empty() {
            tracing::debug!("Every {sentiment} token was filtered as a stopword");
            return WordCloudOutcome::NoData;
        }
        WordCloudOutcome::Words(words)
    }
}

/// Warning to show in place of the cloud, if there is nothing to paint.
pub fn layout_notice(layout: Option<&[PlacedWord]>) -> Option<&'static str> {
    match layout {
        None => Some(NO_DATA_MESSAGE),
        Some([]) => Some(NOTHING_PLACED_MESSAGE),
        Some(_) => None,
    }
}
