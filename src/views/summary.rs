//! Sentiment counts behind the bar and pie charts.

use crate::dataset::{Dataset, ReviewRecord};
use crate::labeling::Sentiment;

/// Number of reviews per sentiment. Zero counts are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// One wedge of the composition chart, as fractions of a full turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub sentiment: Sentiment,
    /// Start of the wedge, counter-clockwise from the top.
    pub start: f32,
    /// Size of the wedge; slices of one chart sum to `1.0`.
    pub sweep: f32,
}

impl SentimentCounts {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::from_records(dataset.records())
    }

    pub fn from_records(records: &[ReviewRecord]) -> Self {
        records.iter().fold(Self::default(), |mut counts, record| {
            *counts.slot(record.sentiment) += 1;
            counts
        })
    }

    fn slot(&mut self, sentiment: Sentiment) -> &mut usize {
        match sentiment {
            Sentiment::Positive => &mut self.positive,
            Sentiment::Neutral => &mut self.neutral,
            Sentiment::Negative => &mut self.negative,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Counts in display order: positive, neutral, negative.
    pub fn ordered(&self) -> [(Sentiment, usize); 3] {
        Sentiment::DISPLAY_ORDER.map(|sentiment| (sentiment, self.get(sentiment)))
    }

    /// Largest single count; used to scale the bar chart axis.
    pub fn max(&self) -> usize {
        self.positive.max(self.neutral).max(self.negative)
    }

    /// Percentage of all reviews carrying `sentiment`; `0.0` for an empty dataset.
    pub fn share(&self, sentiment: Sentiment) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(sentiment) as f32 * 100.0 / total as f32
    }

    /// Wedges for the composition chart. Empty categories produce no wedge.
    pub fn pie_slices(&self) -> Vec<PieSlice> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let mut start = 0.0;
        let mut slices = Vec::with_capacity(3);
        for (sentiment, count) in self.ordered() {
            if count == 0 {
                continue;
            }
            let sweep = count as f32 / total as f32;
            slices.push(PieSlice {
                sentiment,
                start,
                sweep,
            });
            start += sweep;
        }
        slices
    }

    /// Breakdown lines shown under the charts.
    pub fn breakdown_lines(&self) -> Vec<String> {
        self.ordered()
            .iter()
            .map(|(sentiment, count)| format!("{}: {count}", sentiment.title()))
            .collect()
    }
}

/// Format a share for chart labels, e.g. `33.3%`.
pub fn format_share(percent: f32) -> String {
    format!("{percent:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawReview;

    fn dataset(scores: &[f64]) -> Dataset {
        let rows = scores
            .iter()
            .map(|score| RawReview {
                content: Some("text".to_string()),
                score: Some(*score),
                sentiment: None,
            })
            .collect();
        Dataset::new("memory.csv", rows)
    }

    #[test]
    fn one_of_each_class() {
        let counts = SentimentCounts::from_dataset(&dataset(&[1.0, 3.0, 5.0]));
        assert_eq!(
            counts,
            SentimentCounts {
                positive: 1,
                neutral: 1,
                negative: 1
            }
        );
        assert_eq!(counts.total(), 3);
        assert_eq!(format_share(counts.share(Sentiment::Neutral)), "33.3%");
    }

    #[test]
    fn empty_dataset_reports_all_zero_counts() {
        let counts = SentimentCounts::from_dataset(&dataset(&[]));
        assert_eq!(counts.total(), 0);
        assert_eq!(
            counts.ordered(),
            [
                (Sentiment::Positive, 0),
                (Sentiment::Neutral, 0),
                (Sentiment::Negative, 0)
            ]
        );
        assert_eq!(counts.share(Sentiment::Positive), 0.0);
        assert!(counts.pie_slices().is_empty());
    }

    #[test]
    fn counts_sum_to_dataset_length() {
        let data = dataset(&[1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 9.0]);
        let counts = SentimentCounts::from_dataset(&data);
        assert_eq!(counts.total(), data.len());
        assert_eq!(counts.max(), 4);
    }

    #[test]
    fn zero_categories_stay_in_breakdown_but_not_in_pie() {
        let counts = SentimentCounts::from_dataset(&dataset(&[5.0, 4.0, 1.0]));
        assert_eq!(
            counts.breakdown_lines(),
            ["Positive: 2", "Neutral: 0", "Negative: 1"]
        );
        let slices = counts.pie_slices();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].sentiment, Sentiment::Positive);
        assert_eq!(slices[1].sentiment, Sentiment::Negative);
        assert!((slices[1].start - 2.0 / 3.0).abs() < 1e-6);
        let total: f32 = slices.iter().map(|slice| slice.sweep).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }
}
