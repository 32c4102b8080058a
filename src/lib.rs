//! Library exports for the dashboard binary and integration tests.
/// App directory resolution.
pub mod app_dirs;
/// Persistent dashboard settings.
pub mod config;
/// Review dataset loading.
pub mod dataset;
/// Shared egui UI modules.
pub mod egui_app;
/// Sentiment labels and the score rule.
pub mod labeling;
/// Tracing setup with per-launch log files.
pub mod logging;
/// Optional model artifacts.
pub mod ml;
/// View models for the dashboard pages.
pub mod views;
