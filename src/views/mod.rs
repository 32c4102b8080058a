//! View models for the three dashboard pages.
//!
//! Each view reads the shared [`Dataset`](crate::dataset::Dataset) and returns
//! plain data for the egui layer to paint. Nothing here mutates the dataset or
//! remembers what another view produced.

pub mod summary;
pub mod table;
pub mod word_cloud;

/// Page selected in the navigation sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Summary,
    WordCloud,
    ReviewTable,
}

impl ViewMode {
    /// Sidebar order.
    pub const ALL: [ViewMode; 3] = [ViewMode::Summary, ViewMode::WordCloud, ViewMode::ReviewTable];

    /// Sidebar entry label.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Summary => "Home",
            ViewMode::WordCloud => "Word Cloud",
            ViewMode::ReviewTable => "Review Table",
        }
    }

    /// Heading shown above the page content.
    pub fn heading(self) -> &'static str {
        match self {
            ViewMode::Summary => "Review Sentiment Summary",
            ViewMode::WordCloud => "Word Cloud per Sentiment",
            ViewMode::ReviewTable => "Review Table",
        }
    }
}
