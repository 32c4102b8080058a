//! egui renderer for the dashboard.

mod charts;
mod sidebar;
pub mod style;
mod summary_panel;
mod table_panel;
mod word_cloud_panel;

use std::sync::Arc;

use eframe::egui::{self, Frame, RichText, Vec2};

use crate::config::AppConfig;
use crate::dataset::Dataset;
use crate::egui_app::controller::DashboardController;
use crate::ml::ModelArtifacts;
use crate::views::ViewMode;

/// Smallest window size that still fits the charts side by side.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(900.0, 600.0);

/// Renders the dashboard from the controller state.
pub struct EguiApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(dataset: Arc<Dataset>, artifacts: ModelArtifacts, config: &AppConfig) -> Self {
        Self {
            controller: DashboardController::new(dataset, artifacts, config),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::default().fill(style::palette().bg_primary))
            .show(ctx, |ui| {
                let palette = style::palette();
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (label, color) = style::status_badge(status.tone);
                    ui.label(RichText::new(label).color(color).strong());
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
                        ui.label(RichText::new(APP_VERSION).color(palette.text_muted));
                    });
                });
            });
    }

    fn render_center(&mut self, ui: &mut egui::Ui) {
        let view = self.controller.view();
        ui.heading(view.heading());
        ui.add_space(8.0);
        match view {
            ViewMode::Summary => self.render_summary(ui),
            ViewMode::WordCloud => self.render_word_cloud(ui),
            ViewMode::ReviewTable => self.render_review_table(ui),
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_status(ctx);
        egui::SidePanel::left("navigation")
            .resizable(true)
            .default_width(240.0)
            .min_width(200.0)
            .max_width(420.0)
            .show(ctx, |ui| self.render_sidebar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.render_center(ui));
    }
}
