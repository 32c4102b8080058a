//! UI state owned by the dashboard controller.

use crate::labeling::Sentiment;
use crate::views::ViewMode;
use crate::views::table::PageWindow;
use crate::views::word_cloud::PlacedWord;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub view: ViewMode,
    pub status: StatusBarState,
    pub word_cloud: WordCloudState,
    pub table: TableState,
}

/// Tone of the footer badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTone {
    #[default]
    Info,
    Warning,
}

/// Badge + text shown in the footer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
}

/// Controls and cached layout for the word cloud page.
#[derive(Clone, Debug)]
pub struct WordCloudState {
    pub sentiment: Sentiment,
    /// Last layout, reused while the sentiment stays the same.
    pub layout: Option<CloudLayout>,
}

impl Default for WordCloudState {
    fn default() -> Self {
        Self {
            sentiment: Sentiment::Positive,
            layout: None,
        }
    }
}

/// Positioned words for one sentiment on the logical layout canvas.
#[derive(Clone, Debug)]
pub struct CloudLayout {
    pub sentiment: Sentiment,
    pub words: Vec<PlacedWord>,
}

/// Pagination controls for the review table.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableState {
    pub window: PageWindow,
}
