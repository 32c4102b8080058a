//! Pagination for the review table.

use std::ops::Range;

use crate::dataset::{Dataset, ReviewRecord};
use crate::labeling::Sentiment;

/// Header of the review text column.
pub const REVIEW_HEADER: &str = "Review";
/// Header of the sentiment column.
pub const SENTIMENT_HEADER: &str = "Sentiment";

/// Rows per page offered by the page-size selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    Ten,
    #[default]
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn rows(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Match a row count to one of the allowed sizes.
    pub fn from_rows(rows: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.rows() == rows)
    }
}

/// Highest page the page input accepts: `total_rows / page_size + 1`.
///
/// When `total_rows` is a multiple of the page size the last page is empty.
pub fn max_page(total_rows: usize, size: PageSize) -> usize {
    total_rows / size.rows() + 1
}

/// 1-based page over the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub size: PageSize,
    pub page: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(PageSize::default(), 1)
    }
}

impl PageWindow {
    pub fn new(size: PageSize, page: usize) -> Self {
        Self { size, page }
    }

    /// Row indices covered by this page, before clipping to the dataset.
    ///
    /// Page `0` is read as page `1`.
    pub fn range(&self) -> Range<usize> {
        let rows = self.size.rows();
        let start = self.page.max(1).saturating_sub(1).saturating_mul(rows);
        start..start.saturating_add(rows)
    }

    /// Copy of this window with the page pulled into `1..=max_page`.
    pub fn clamped(self, total_rows: usize) -> Self {
        let page = self.page.clamp(1, max_page(total_rows, self.size));
        Self { page, ..self }
    }
}

/// Records on `window`'s page. Pages past the end give an empty slice.
pub fn page_slice(dataset: &Dataset, window: PageWindow) -> &[ReviewRecord] {
    let records = dataset.records();
    let range = window.range();
    let start = range.start.min(records.len());
    let end = range.end.min(records.len());
    &records[start..end]
}

/// Displayed table row: the review text and its label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableRow<'a> {
    /// Cleaned review text; empty when the source cell was missing.
    pub review: &'a str,
    pub sentiment: Sentiment,
}

/// One rendered page of the review table.
#[derive(Clone, Debug, PartialEq)]
pub struct TablePage<'a> {
    pub rows: Vec<TableRow<'a>>,
    /// Dataset index of the first row on the page.
    pub offset: usize,
    pub total_rows: usize,
}

impl<'a> TablePage<'a> {
    pub fn build(dataset: &'a Dataset, window: PageWindow) -> Self {
        let rows = page_slice(dataset, window)
            .iter()
            .map(|record| TableRow {
                review: record.content.as_deref().unwrap_or_default(),
                sentiment: record.sentiment,
            })
            .collect();
        Self {
            rows,
            offset: window.range().start,
            total_rows: dataset.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Caption such as `Rows 21–25 of 25`.
    pub fn caption(&self) -> String {
        if self.rows.is_empty() {
            return format!("No rows on this page ({} total)", self.total_rows);
        }
        format!(
            "Rows {}–{} of {}",
            self.offset + 1,
            self.offset + self.rows.len(),
            self.total_rows
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawReview;

    fn dataset(len: usize) -> Dataset {
        let rows = (0..len)
            .map(|idx| RawReview {
                content: Some(format!("review {idx}")),
                score: Some((idx % 5 + 1) as f64),
                sentiment: None,
            })
            .collect();
        Dataset::new("memory.csv", rows)
    }

    #[test]
    fn partial_last_page_returns_remaining_rows() {
        let data = dataset(25);
        let rows = page_slice(&data, PageWindow::new(PageSize::Ten, 3));
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].content.as_deref(), Some("review 20"));
        assert_eq!(rows[4].content.as_deref(), Some("review 24"));
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let data = dataset(10);
        let window = PageWindow::new(PageSize::TwentyFive, 2);
        assert_eq!(window.range(), 25..50);
        assert!(page_slice(&data, window).is_empty());
        let page = TablePage::build(&data, window);
        assert!(page.is_empty());
        assert_eq!(page.caption(), "No rows on this page (10 total)");
    }

    #[test]
    fn slices_follow_dataset_order() {
        let data = dataset(60);
        for page in 1..=3 {
            let window = PageWindow::new(PageSize::TwentyFive, page);
            let expected = &data.records()[window.range().start..window.range().end.min(60)];
            assert_eq!(page_slice(&data, window), expected);
        }
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let data = dataset(12);
        let rows = page_slice(&data, PageWindow::new(PageSize::Ten, 0));
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].content.as_deref(), Some("review 0"));
    }

    #[test]
    fn max_page_allows_one_page_beyond_full_pages() {
        assert_eq!(max_page(25, PageSize::Ten), 3);
        assert_eq!(max_page(20, PageSize::Ten), 3);
        assert_eq!(max_page(10, PageSize::TwentyFive), 1);
        assert_eq!(max_page(0, PageSize::Hundred), 1);
    }

    #[test]
    fn clamping_keeps_page_inside_bounds() {
        let window = PageWindow::new(PageSize::Ten, 9).clamped(25);
        assert_eq!(window.page, 3);
        let window = PageWindow::new(PageSize::Hundred, 0).clamped(25);
        assert_eq!(window.page, 1);
    }

    #[test]
    fn rows_keep_review_text_and_label_only() {
        let data = Dataset::new(
            "memory.csv",
            vec![
                RawReview {
                    content: None,
                    score: Some(1.0),
                    sentiment: None,
                },
                RawReview {
                    content: Some("mantap".to_string()),
                    score: Some(5.0),
                    sentiment: None,
                },
            ],
        );
        let page = TablePage::build(&data, PageWindow::new(PageSize::Ten, 1));
        assert_eq!(
            page.rows,
            [
                TableRow {
                    review: "",
                    sentiment: Sentiment::Negative
                },
                TableRow {
                    review: "mantap",
                    sentiment: Sentiment::Positive
                },
            ]
        );
        assert_eq!(page.caption(), "Rows 1–2 of 2");
    }

    #[test]
    fn page_sizes_match_selector_options() {
        let rows: Vec<_> = PageSize::ALL.iter().map(|size| size.rows()).collect();
        assert_eq!(rows, [10, 25, 50, 100]);
        assert_eq!(PageSize::from_rows(50), Some(PageSize::Fifty));
        assert_eq!(PageSize::from_rows(30), None);
        assert_eq!(PageSize::default().rows(), 25);
    }
}
