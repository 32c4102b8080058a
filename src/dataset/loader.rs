//! CSV loader for review exports.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use super::record::{Dataset, RawReview};
use crate::labeling::Sentiment;

/// Column holding the cleaned review text. Always required.
pub const CONTENT_COLUMN: &str = "clean_content";
/// Column holding the numeric review score.
pub const SCORE_COLUMN: &str = "score";
/// Optional column holding a precomputed sentiment label.
pub const SENTIMENT_COLUMN: &str = "sentiment";

#[derive(Debug, Error)]
pub enum DatasetError {
    /// A column needed to label or display reviews is absent from the header.
    #[error("Column '{column}' not found in {path}")]
    MissingColumn { column: &'static str, path: PathBuf },
    /// The file could not be opened or a record could not be parsed.
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: csv::Error },
}

/// Parser settings for the dataset file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

struct Columns {
    content: usize,
    score: Option<usize>,
    sentiment: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord, path: &Path) -> Result<Self, DatasetError> {
        let find = |name: &str| headers.iter().position(|header| header == name);
        let missing = |column| DatasetError::MissingColumn {
            column,
            path: path.to_path_buf(),
        };
        let content = find(CONTENT_COLUMN).ok_or_else(|| missing(CONTENT_COLUMN))?;
        let score = find(SCORE_COLUMN);
        let sentiment = find(SENTIMENT_COLUMN);
        // Without a label column the score is the only way to derive one.
        if sentiment.is_none() && score.is_none() {
            return Err(missing(SCORE_COLUMN));
        }
        Ok(Self {
            content,
            score,
            sentiment,
        })
    }

    fn read(&self, row: &StringRecord) -> RawReview {
        let content = row
            .get(self.content)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string);
        let score = self.score.and_then(|idx| row.get(idx)).and_then(parse_score);
        let sentiment = self
            .sentiment
            .map(|idx| row.get(idx).unwrap_or_default().to_string());
        RawReview {
            content,
            score,
            sentiment,
        }
    }
}

fn parse_score(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// A non-empty score cell that is not a number, on a row the score rule labels.
fn score_unusable(raw: &RawReview, cell: Option<&str>) -> bool {
    raw.score.is_none()
        && cell.is_some_and(|cell| !cell.is_empty())
        && raw.sentiment.as_deref().and_then(Sentiment::parse).is_none()
}

/// Read and label the dataset at `path`.
///
/// A missing `clean_content` column is an error; so is a file with neither a
/// `sentiment` nor a `score` column.
pub fn load_dataset(path: &Path, options: LoadOptions) -> Result<Dataset, DatasetError> {
    let read_error = |source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(options.delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(read_error)?;
    let headers = reader.headers().map_err(read_error)?.clone();
    let columns = Columns::locate(&headers, path)?;

    let mut rows = Vec::new();
    let mut unparsed_scores = 0usize;
    for result in reader.records() {
        let row = result.map_err(read_error)?;
        let raw = columns.read(&row);
        if score_unusable(&raw, columns.score.and_then(|idx| row.get(idx))) {
            unparsed_scores += 1;
        }
        rows.push(raw);
    }

    let dataset = Dataset::new(path, rows);
    let stats = dataset.label_stats();
    if unparsed_scores > 0 {
        tracing::warn!("{unparsed_scores} score cells were not numeric and count as missing");
    }
    if stats.fallback > 0 {
        tracing::warn!(
            "{} rows had an unrecognised sentiment and were labeled from their score",
            stats.fallback
        );
    }
    if stats.missing_score > 0 {
        tracing::warn!("{} rows without a score were labeled neutral", stats.missing_score);
    }
    tracing::info!(
        "Loaded {} reviews from {} ({} labels from file, {} derived)",
        dataset.len(),
        path.display(),
        stats.from_column,
        stats.from_score + stats.fallback
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_csv(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn derives_sentiment_from_score_column() {
        let (_dir, path) = write_csv("clean_content,score\nbad app,1\nso so,3\ngreat,5\n");
        let dataset = load_dataset(&path, LoadOptions::default()).unwrap();
        let labels: Vec<_> = dataset.records().iter().map(|r| r.sentiment).collect();
        assert_eq!(
            labels,
            [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive]
        );
        assert_eq!(dataset.records()[0].content.as_deref(), Some("bad app"));
        assert_eq!(dataset.source(), path.as_path());
    }

    #[test]
    fn missing_content_column_is_reported() {
        let (_dir, path) = write_csv("content,score\nhello,5\n");
        let err = load_dataset(&path, LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn {
                column: CONTENT_COLUMN,
                ..
            }
        ));
        assert!(err.to_string().contains("clean_content"));
    }

    #[test]
    fn score_is_optional_when_sentiment_exists() {
        let (_dir, path) = write_csv("clean_content,sentiment\nmantap,positif\nlambat,negatif\n");
        let dataset = load_dataset(&path, LoadOptions::default()).unwrap();
        assert_eq!(dataset.records()[0].sentiment, Sentiment::Positive);
        assert_eq!(dataset.records()[1].sentiment, Sentiment::Negative);
        assert_eq!(dataset.label_stats().from_column, 2);
    }

    #[test]
    fn no_score_and_no_sentiment_is_an_error() {
        let (_dir, path) = write_csv("clean_content,rating\nhello,5\n");
        let err = load_dataset(&path, LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn {
                column: SCORE_COLUMN,
                ..
            }
        ));
    }

    #[test]
    fn empty_cells_become_missing_values() {
        let (_dir, path) = write_csv("clean_content,score\n,4\nhi,\nyo,abc\nfine,4.0\n");
        let dataset = load_dataset(&path, LoadOptions::default()).unwrap();
        let records = dataset.records();
        assert_eq!(records[0].content, None);
        assert_eq!(records[1].score, None);
        assert_eq!(records[1].sentiment, Sentiment::Neutral);
        assert_eq!(records[2].score, None);
        assert_eq!(records[3].score, Some(4.0));
        assert_eq!(records[3].sentiment, Sentiment::Positive);
    }

    #[test]
    fn honours_custom_delimiter_and_quoted_fields() {
        let (_dir, path) = write_csv("score;clean_content\n2;\"slow; crashes\"\n");
        let dataset = load_dataset(&path, LoadOptions { delimiter: b';' }).unwrap();
        assert_eq!(dataset.records()[0].content.as_deref(), Some("slow; crashes"));
        assert_eq!(dataset.records()[0].sentiment, Sentiment::Negative);
    }

    #[test]
    fn header_only_file_yields_empty_dataset() {
        let (_dir, path) = write_csv("clean_content,score\n");
        let dataset = load_dataset(&path, LoadOptions::default()).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn unreadable_path_reports_read_error() {
        let dir = tempdir().unwrap();
        let err = load_dataset(&dir.path().join("absent.csv"), LoadOptions::default()).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn bad_scores_only_matter_without_a_usable_label() {
        let score_only = RawReview {
            content: Some("lambat".to_string()),
            score: None,
            sentiment: None,
        };
        assert!(score_unusable(&score_only, Some("lima")));
        assert!(!score_unusable(&score_only, Some("")));
        assert!(!score_unusable(&score_only, None));

        let labeled = RawReview {
            sentiment: Some("negatif".to_string()),
            ..score_only.clone()
        };
        assert!(!score_unusable(&labeled, Some("lima")));

        let unrecognised = RawReview {
            sentiment: Some("campur".to_string()),
            ..score_only
        };
        assert!(score_unusable(&unrecognised, Some("lima")));
    }
}
