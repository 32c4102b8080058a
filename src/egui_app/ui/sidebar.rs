use eframe::egui::{self, RichText};

use super::EguiApp;
use super::style;
use crate::views::ViewMode;

impl EguiApp {
    pub(super) fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.add_space(8.0);
        ui.label(RichText::new("Dashboard").color(palette.text_primary).strong());
        ui.add_space(6.0);
        let current = self.controller.view();
        for view in ViewMode::ALL {
            if ui.selectable_label(current == view, view.label()).clicked() {
                self.controller.select_view(view);
            }
        }

        ui.add_space(12.0);
        ui.separator();
        ui.label(RichText::new("Dataset").color(palette.text_muted));
        let dataset = self.controller.dataset();
        ui.add(
            egui::Label::new(
                RichText::new(dataset.source().display().to_string()).color(palette.text_primary),
            )
            .wrap(),
        );
        ui.label(format!("{} reviews", dataset.len()));
        let stats = dataset.label_stats();
        if stats.from_column > 0 {
            ui.label(
                RichText::new(format!("{} labels from file", stats.from_column))
                    .color(palette.text_muted),
            );
        }
        let derived = stats.from_score + stats.fallback;
        if derived > 0 {
            ui.label(
                RichText::new(format!("{derived} labels derived from score"))
                    .color(palette.text_muted),
            );
        }

        ui.add_space(12.0);
        ui.separator();
        ui.label(RichText::new("Models").color(palette.text_muted));
        let artifacts = self.controller.artifacts();
        let classifier = artifacts
            .classifier
            .as_ref()
            .map(|classifier| classifier.describe());
        let vectorizer = artifacts
            .vectorizer
            .as_ref()
            .map(|vectorizer| vectorizer.describe());
        artifact_row(ui, "Classifier", classifier);
        artifact_row(ui, "Vectorizer", vectorizer);
    }
}

fn artifact_row(ui: &mut egui::Ui, name: &str, description: Option<String>) {
    let palette = style::palette();
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(format!("{name}:")).color(palette.text_muted));
        match description {
            Some(text) => ui.label(RichText::new(text).color(palette.success)),
            None => ui.label(RichText::new("not loaded").color(palette.warning)),
        };
    });
}
