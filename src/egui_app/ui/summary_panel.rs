use eframe::egui::{self, Rect, RichText, Sense, vec2};

use super::EguiApp;
use super::charts;
use super::style;

const CHART_HEIGHT: f32 = 300.0;

impl EguiApp {
    pub(super) fn render_summary(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let counts = self.controller.summary_counts();
        ui.columns(2, |columns| {
            chart_column(&mut columns[0], "Sentiment Distribution", |painter, rect| {
                charts::paint_bar_chart(painter, rect, &counts)
            });
            chart_column(&mut columns[1], "Sentiment Composition", |painter, rect| {
                charts::paint_pie_chart(painter, rect, &counts)
            });
        });

        ui.add_space(12.0);
        ui.label(
            RichText::new(format!("Total reviews: {}", counts.total()))
                .color(palette.text_primary)
                .strong(),
        );
        for (line, (sentiment, _)) in counts.breakdown_lines().iter().zip(counts.ordered()) {
            ui.label(RichText::new(format!("• {line}")).color(style::sentiment_color(sentiment)));
        }
    }
}

fn chart_column(ui: &mut egui::Ui, title: &str, paint: impl FnOnce(&egui::Painter, Rect)) {
    ui.label(RichText::new(title).strong());
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(vec2(width, CHART_HEIGHT), Sense::hover());
    paint(&ui.painter_at(rect), rect);
}
