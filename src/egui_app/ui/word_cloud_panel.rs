use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense};

use super::EguiApp;
use super::style;
use crate::labeling::Sentiment;
use crate::views::word_cloud::{
    CANVAS_BACKGROUND, LAYOUT_CANVAS, layout_notice, to_screen, word_color,
};

const MIN_CANVAS_WIDTH: f32 = 320.0;
const MIN_CANVAS_HEIGHT: f32 = 160.0;

impl EguiApp {
    pub(super) fn render_word_cloud(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let selected = self.controller.selected_sentiment();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Sentiment:").color(palette.text_muted));
            for sentiment in Sentiment::DISPLAY_ORDER {
                if ui
                    .radio(selected == sentiment, sentiment.title())
                    .clicked()
                {
                    self.controller.select_sentiment(sentiment);
                }
            }
        });
        ui.add_space(8.0);

        let sentiment = self.controller.selected_sentiment();
        let measurer = ui.painter().clone();
        let measure = |word: &str, size: f32| {
            measurer
                .layout_no_wrap(word.to_string(), FontId::proportional(size), Color32::BLACK)
                .size()
        };
        let layout = self.controller.word_cloud_layout(measure);
        if let Some(notice) = layout_notice(layout) {
            ui.colored_label(palette.warning, notice);
            return;
        }
        let words = layout.unwrap_or_default();

        let scale = (ui.available_width().max(MIN_CANVAS_WIDTH) / LAYOUT_CANVAS.x)
            .min(ui.available_height().max(MIN_CANVAS_HEIGHT) / LAYOUT_CANVAS.y);
        let (rect, _) = ui.allocate_exact_size(LAYOUT_CANVAS * scale, Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, CANVAS_BACKGROUND);
        for word in words {
            painter.text(
                to_screen(word.rect, rect.min, scale).center(),
                Align2::CENTER_CENTER,
                &word.word,
                FontId::proportional(word.font_size * scale),
                word_color(sentiment, word.weight),
            );
        }
    }
}
