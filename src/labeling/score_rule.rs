//! Score threshold rule for reviews that arrive without a sentiment label.

use super::Sentiment;
use crate::dataset::{RawReview, ReviewRecord};

/// Where a record's label came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelOrigin {
    /// A recognised value from the dataset's sentiment column.
    Column,
    /// Derived from the score because the dataset has no sentiment column.
    Score,
    /// The sentiment cell was empty or unrecognised, so the score decided.
    Fallback,
}

/// Per-origin counts collected while labeling a dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelStats {
    pub from_column: usize,
    pub from_score: usize,
    pub fallback: usize,
    /// Records whose score was missing; these are labeled neutral.
    pub missing_score: usize,
}

impl LabelStats {
    fn record(&mut self, origin: LabelOrigin, score: Option<f64>) {
        match origin {
            LabelOrigin::Column => self.from_column += 1,
            LabelOrigin::Score => self.from_score += 1,
            LabelOrigin::Fallback => self.fallback += 1,
        }
        if origin != LabelOrigin::Column && score.is_none() {
            self.missing_score += 1;
        }
    }
}

/// Map a review score to a sentiment.
///
/// `<= 2` is negative, exactly `3` is neutral and every other value is
/// positive. A missing score is neutral.
pub fn label_for_score(score: Option<f64>) -> Sentiment {
    match score {
        None => Sentiment::Neutral,
        Some(value) if value <= 2.0 => Sentiment::Negative,
        Some(value) if value == 3.0 => Sentiment::Neutral,
        Some(_) => Sentiment::Positive,
    }
}

fn resolve(existing: Option<&str>, score: Option<f64>) -> (Sentiment, LabelOrigin) {
    match existing {
        None => (label_for_score(score), LabelOrigin::Score),
        Some(cell) => match Sentiment::parse(cell) {
            Some(sentiment) => (sentiment, LabelOrigin::Column),
            None => (label_for_score(score), LabelOrigin::Fallback),
        },
    }
}

/// Attach a sentiment to every row, keeping labels the dataset already has.
pub fn label_rows(rows: Vec<RawReview>) -> (Vec<ReviewRecord>, LabelStats) {
    let mut stats = LabelStats::default();
    let records = rows
        .into_iter()
        .map(|row| {
            let (sentiment, origin) = resolve(row.sentiment.as_deref(), row.score);
            stats.record(origin, row.score);
            ReviewRecord {
                content: row.content,
                score: row.score,
                sentiment,
            }
        })
        .collect();
    (records, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(score: Option<f64>, sentiment: Option<&str>) -> RawReview {
        RawReview {
            content: Some("ok".to_string()),
            score,
            sentiment: sentiment.map(str::to_string),
        }
    }

    #[test]
    fn thresholds_split_scores_into_three_classes() {
        assert_eq!(label_for_score(Some(0.0)), Sentiment::Negative);
        assert_eq!(label_for_score(Some(1.0)), Sentiment::Negative);
        assert_eq!(label_for_score(Some(2.0)), Sentiment::Negative);
        assert_eq!(label_for_score(Some(3.0)), Sentiment::Neutral);
        assert_eq!(label_for_score(Some(4.0)), Sentiment::Positive);
        assert_eq!(label_for_score(Some(5.0)), Sentiment::Positive);
    }

    #[test]
    fn out_of_range_and_fractional_scores_are_positive() {
        assert_eq!(label_for_score(Some(2.5)), Sentiment::Positive);
        assert_eq!(label_for_score(Some(3.5)), Sentiment::Positive);
        assert_eq!(label_for_score(Some(42.0)), Sentiment::Positive);
        assert_eq!(label_for_score(Some(-1.0)), Sentiment::Negative);
    }

    #[test]
    fn missing_score_is_neutral() {
        assert_eq!(label_for_score(None), Sentiment::Neutral);
    }

    #[test]
    fn derives_labels_when_column_is_absent() {
        let (records, stats) = label_rows(vec![
            raw(Some(1.0), None),
            raw(Some(3.0), None),
            raw(Some(5.0), None),
        ]);
        let labels: Vec<_> = records.iter().map(|r| r.sentiment).collect();
        assert_eq!(
            labels,
            [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive]
        );
        assert_eq!(stats.from_score, 3);
        assert_eq!(stats.from_column, 0);
    }

    #[test]
    fn existing_labels_win_over_scores() {
        let (records, stats) = label_rows(vec![raw(Some(1.0), Some("positif"))]);
        assert_eq!(records[0].sentiment, Sentiment::Positive);
        assert_eq!(stats.from_column, 1);
    }

    #[test]
    fn unrecognised_cells_fall_back_to_score() {
        let (records, stats) = label_rows(vec![raw(Some(2.0), Some("??")), raw(None, Some(""))]);
        assert_eq!(records[0].sentiment, Sentiment::Negative);
        assert_eq!(records[1].sentiment, Sentiment::Neutral);
        assert_eq!(stats.fallback, 2);
        assert_eq!(stats.missing_score, 1);
    }

    #[test]
    fn relabeling_labeled_rows_is_a_no_op() {
        let (first, _) = label_rows(vec![
            raw(Some(1.0), None),
            raw(Some(3.0), None),
            raw(Some(4.0), None),
            raw(None, None),
        ]);
        let again: Vec<RawReview> = first
            .iter()
            .map(|record| RawReview {
                content: record.content.clone(),
                score: record.score,
                sentiment: Some(record.sentiment.as_str().to_string()),
            })
            .collect();
        let (second, stats) = label_rows(again);
        assert_eq!(first, second);
        assert_eq!(stats.from_column, 4);
    }
}
