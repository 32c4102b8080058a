use std::path::PathBuf;

pub(super) const MAX_WORD_CLOUD_WORDS: usize = 1_000;
pub(super) const MIN_FONT_SIZE_FLOOR: f32 = 4.0;

pub(super) fn default_dataset_path() -> PathBuf {
    PathBuf::from("reviews.csv")
}

pub(super) fn default_classifier_path() -> Option<PathBuf> {
    Some(PathBuf::from("svm_model.json"))
}

pub(super) fn default_vectorizer_path() -> Option<PathBuf> {
    Some(PathBuf::from("tfidf_vectorizer.json"))
}

pub(super) fn default_delimiter() -> char {
    ','
}

pub(super) fn default_window_title() -> String {
    "Review Sentiment Dashboard".to_string()
}

pub(super) fn default_page_size() -> usize {
    25
}

pub(super) fn default_max_words() -> usize {
    200
}

pub(super) fn default_min_font_size() -> f32 {
    10.0
}

pub(super) fn default_max_font_size() -> f32 {
    64.0
}

pub(super) fn clamp_max_words(value: usize) -> usize {
    value.clamp(1, MAX_WORD_CLOUD_WORDS)
}
