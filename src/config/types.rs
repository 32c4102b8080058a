use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults::{
    MIN_FONT_SIZE_FLOOR, clamp_max_words, default_classifier_path, default_dataset_path,
    default_delimiter, default_max_font_size, default_max_words, default_min_font_size,
    default_page_size, default_vectorizer_path, default_window_title,
};
use crate::dataset::LoadOptions;
use crate::views::table::PageSize;

/// Dashboard settings.
///
/// Config keys (TOML): `dataset_path`, `delimiter`, `window_title`, `models`,
/// `table`, `word_cloud`. Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    /// Single ASCII field separator of the dataset file.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default)]
    pub models: ModelPaths,
    #[serde(default)]
    pub table: TableSettings,
    #[serde(default)]
    pub word_cloud: WordCloudSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            delimiter: default_delimiter(),
            window_title: default_window_title(),
            models: ModelPaths::default(),
            table: TableSettings::default(),
            word_cloud: WordCloudSettings::default(),
        }
    }
}

impl AppConfig {
    pub(super) fn normalized(mut self) -> Self {
        if !self.delimiter.is_ascii() || self.delimiter == '"' {
            tracing::warn!(
                "Unsupported delimiter {:?}; using {:?}",
                self.delimiter,
                default_delimiter()
            );
            self.delimiter = default_delimiter();
        }
        self.table.default_page_size = self.table.page_size().rows();
        self.word_cloud = self.word_cloud.normalized();
        self
    }

    /// Parser settings derived from this config.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: u8::try_from(self.delimiter).unwrap_or(b','),
        }
    }
}

/// Locations of the optional model artifacts.
///
/// Config keys: `classifier_path`, `vectorizer_path`. A key left out of an
/// existing `[models]` table disables that artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPaths {
    #[serde(default)]
    pub classifier_path: Option<PathBuf>,
    #[serde(default)]
    pub vectorizer_path: Option<PathBuf>,
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self {
            classifier_path: default_classifier_path(),
            vectorizer_path: default_vectorizer_path(),
        }
    }
}

/// Review table preferences.
///
/// Config keys: `default_page_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSettings {
    /// Rows per page on launch; snapped to 10, 25, 50 or 100.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

impl TableSettings {
    pub fn page_size(&self) -> PageSize {
        PageSize::from_rows(self.default_page_size).unwrap_or_default()
    }
}

/// Word cloud rendering preferences.
///
/// Config keys: `max_words`, `min_font_size`, `max_font_size`, `extra_stopwords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloudSettings {
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default = "default_min_font_size")]
    pub min_font_size: f32,
    #[serde(default = "default_max_font_size")]
    pub max_font_size: f32,
    /// Additional words hidden from the cloud, matched case-insensitively.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl Default for WordCloudSettings {
    fn default() -> Self {
        Self {
            max_words: default_max_words(),
            min_font_size: default_min_font_size(),
            max_font_size: default_max_font_size(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl WordCloudSettings {
    fn normalized(mut self) -> Self {
        self.max_words = clamp_max_words(self.max_words);
        if !self.min_font_size.is_finite() {
            self.min_font_size = default_min_font_size();
        }
        if !self.max_font_size.is_finite() {
            self.max_font_size = default_max_font_size();
        }
        self.min_font_size = self.min_font_size.max(MIN_FONT_SIZE_FLOOR);
        self.max_font_size = self.max_font_size.max(self.min_font_size);
        self.extra_stopwords = self
            .extra_stopwords
            .into_iter()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        self
    }
}
