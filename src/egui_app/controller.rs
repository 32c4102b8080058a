//! Bridges the loaded dataset and the egui renderer.

use std::collections::HashMap;
use std::sync::Arc;

use egui::Vec2;

use crate::config::{AppConfig, WordCloudSettings};
use crate::dataset::Dataset;
use crate::egui_app::state::{CloudLayout, StatusBarState, StatusTone, UiState};
use crate::labeling::Sentiment;
use crate::ml::ModelArtifacts;
use crate::views::ViewMode;
use crate::views::summary::SentimentCounts;
use crate::views::table::{PageSize, PageWindow, TablePage, max_page};
use crate::views::word_cloud::{
    FontRange, LAYOUT_CANVAS, PlacedWord, WordCloudOutcome, layout_words,
};


/// Holds the session's read-only data plus the UI state built from it.
pub struct DashboardController {
    pub ui: UiState,
    dataset: Arc<Dataset>,
    artifacts: ModelArtifacts,
    word_cloud_settings: WordCloudSettings,
    counts: SentimentCounts,
    clouds: HashMap<Sentiment, WordCloudOutcome>,
}

impl DashboardController {
    pub fn new(dataset: Arc<Dataset>, artifacts: ModelArtifacts, config: &AppConfig) -> Self {
        let counts = SentimentCounts::from_dataset(&dataset);
        let mut ui = UiState::default();
        ui.table.window = PageWindow::new(config.table.page_size(), 1);
        ui.status = startup_status(&dataset);
        Self {
            ui,
            dataset,
            artifacts,
            word_cloud_settings: config.word_cloud.clone(),
            counts,
            clouds: HashMap::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn artifacts(&self) -> &ModelArtifacts {
        &self.artifacts
    }

    pub fn view(&self) -> ViewMode {
        self.ui.view
    }

    /// Switch the active page. Other pages keep only their controls.
    pub fn select_view(&mut self, view: ViewMode) {
        if self.ui.view == view {
            return;
        }
        tracing::debug!("Switching view to {}", view.label());
        self.ui.view = view;
    }

    pub fn summary_counts(&self) -> SentimentCounts {
        self.counts
    }

    pub fn selected_sentiment(&self) -> Sentiment {
        self.ui.word_cloud.sentiment
    }

    pub fn select_sentiment(&mut self, sentiment: Sentiment) {
        self.ui.word_cloud.sentiment = sentiment;
    }

    /// Word frequencies for the selected sentiment, computed once per class.
    pub fn word_cloud(&mut self) -> &WordCloudOutcome {
        let sentiment = self.ui.word_cloud.sentiment;
        let dataset = &self.dataset;
        let settings = &self.word_cloud_settings;
        self.clouds
            .entry(sentiment)
            .or_insert_with(|| WordCloudOutcome::build(dataset, sentiment, settings))
    }

    /// Placed words for the selected sentiment on [`LAYOUT_CANVAS`].
    ///
    /// Returns `None` when the class has nothing to draw. The layout is kept
    /// until the sentiment changes; the renderer scales it to the space it has.
    pub fn word_cloud_layout(
        &mut self,
        measure: impl FnMut(&str, f32) -> Vec2,
    ) -> Option<&[PlacedWord]> {
        let sentiment = self.ui.word_cloud.sentiment;
        let cached = self
            .ui
            .word_cloud
            .layout
            .as_ref()
            .is_some_and(|layout| layout.sentiment == sentiment);
        if !cached {
            let fonts = FontRange {
                min: self.word_cloud_settings.min_font_size,
                max: self.word_cloud_settings.max_font_size,
            };
            let words = match self.word_cloud() {
                WordCloudOutcome::NoData => return None,
                WordCloudOutcome::Words(words) => {
                    let placed = layout_words(words, LAYOUT_CANVAS, fonts, measure);
                    tracing::debug!(
                        "Laid out {} of {} words for {sentiment} cloud",
                        placed.len(),
                        words.len()
                    );
                    placed
                }
            };
            self.ui.word_cloud.layout = Some(CloudLayout { sentiment, words });
        }
        self.ui
            .word_cloud
            .layout
            .as_ref()
            .map(|layout| layout.words.as_slice())
    }

    pub fn page_window(&self) -> PageWindow {
        self.ui.table.window
    }

    /// Upper bound for the page number input.
    pub fn max_page(&self) -> usize {
        max_page(self.dataset.len(), self.ui.table.window.size)
    }

    /// Change rows per page, keeping the page number inside the new bound.
    pub fn set_page_size(&mut self, size: PageSize) {
        let window = PageWindow::new(size, self.ui.table.window.page);
        self.ui.table.window = window.clamped(self.dataset.len());
    }

    /// Jump to `page`, clamped to `1..=max_page`.
    pub fn set_page(&mut self, page: usize) {
        let window = PageWindow::new(self.ui.table.window.size, page);
        self.ui.table.window = window.clamped(self.dataset.len());
    }

    pub fn table_page(&self) -> TablePage<'_> {
        TablePage::build(&self.dataset, self.ui.table.window)
    }
}

fn startup_status(dataset: &Dataset) -> StatusBarState {
    let loaded = format!(
        "{} reviews loaded from {}",
        dataset.len(),
        dataset.source().display()
    );
    let fallback = dataset.label_stats().fallback;
    if fallback > 0 {
        return StatusBarState {
            text: format!("{loaded}; {fallback} unrecognised labels derived from score"),
            tone: StatusTone::Warning,
        };
    }
    StatusBarState {
        text: loaded,
        tone: StatusTone::Info,
    }
}
