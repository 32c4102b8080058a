#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui review sentiment dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;
use sentiboard::config::{self, AppConfig};
use sentiboard::dataset::load_dataset;
use sentiboard::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use sentiboard::logging;
use sentiboard::ml::ModelArtifacts;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let mut config = load_config();
    if let Some(path) = dataset_override() {
        tracing::info!("Dataset path overridden from command line: {}", path.display());
        config.dataset_path = path;
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title(config.window_title.clone())
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_maximized(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let title = config.window_title.clone();
    let app: Box<dyn eframe::App> = match load_dataset(&config.dataset_path, config.load_options())
    {
        Ok(dataset) => {
            let artifacts = ModelArtifacts::load(
                config.models.classifier_path.as_deref(),
                config.models.vectorizer_path.as_deref(),
            );
            Box::new(EguiApp::new(Arc::new(dataset), artifacts, &config))
        }
        Err(err) => {
            tracing::error!("Dataset load failed: {err}");
            Box::new(LaunchError {
                message: err.to_string(),
            })
        }
    };

    eframe::run_native(&title, native_options, Box::new(move |_cc| Ok(app)))?;
    Ok(())
}

/// Read the saved config, falling back to defaults when it cannot be used.
fn load_config() -> AppConfig {
    match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Using default config: {err}");
            AppConfig::default()
        }
    }
}

/// First positional argument, when given, replaces the configured dataset path.
fn dataset_override() -> Option<PathBuf> {
    std::env::args_os().nth(1).map(PathBuf::from)
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to load dataset");
                ui.label(&self.message);
            });
        });
    }
}
