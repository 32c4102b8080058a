use std::path::{Path, PathBuf};

use crate::labeling::{LabelStats, Sentiment, label_rows};

/// One row as read from the dataset file, before labeling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawReview {
    /// Cleaned review text; `None` when the cell is empty.
    pub content: Option<String>,
    /// Numeric score; `None` when empty or not a number.
    pub score: Option<f64>,
    /// Raw sentiment cell; `None` when the file has no sentiment column.
    pub sentiment: Option<String>,
}

/// A labeled review.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRecord {
    pub content: Option<String>,
    pub score: Option<f64>,
    pub sentiment: Sentiment,
}

/// Ordered, labeled reviews. Never mutated after construction.
#[derive(Clone, Debug)]
pub struct Dataset {
    source: PathBuf,
    records: Vec<ReviewRecord>,
    label_stats: LabelStats,
}

impl Dataset {
    /// Label `rows` and wrap them in a dataset that remembers its source path.
    pub fn new(source: impl Into<PathBuf>, rows: Vec<RawReview>) -> Self {
        let (records, label_stats) = label_rows(rows);
        Self {
            source: source.into(),
            records,
            label_stats,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// How the labels were obtained while loading.
    pub fn label_stats(&self) -> LabelStats {
        self.label_stats
    }

    /// Records carrying `sentiment`, in dataset order.
    pub fn with_sentiment(&self, sentiment: Sentiment) -> impl Iterator<Item = &ReviewRecord> {
        self.records
            .iter()
            .filter(move |record| record.sentiment == sentiment)
    }
}
