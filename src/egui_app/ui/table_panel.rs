use eframe::egui::{self, RichText};

use super::EguiApp;
use super::style;
use crate::views::table::{PageSize, REVIEW_HEADER, SENTIMENT_HEADER};

const SENTIMENT_COLUMN_WIDTH: f32 = 96.0;

impl EguiApp {
    pub(super) fn render_review_table(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let window = self.controller.page_window();
        let max_page = self.controller.max_page();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Rows per page").color(palette.text_muted));
            let mut size = window.size;
            egui::ComboBox::from_id_salt("review_page_size")
                .selected_text(size.rows().to_string())
                .show_ui(ui, |ui| {
                    for option in PageSize::ALL {
                        ui.selectable_value(&mut size, option, option.rows().to_string());
                    }
                });
            if size != window.size {
                self.controller.set_page_size(size);
            }

            ui.add_space(16.0);
            ui.label(RichText::new("Page").color(palette.text_muted));
            let mut page = window.page;
            ui.add(egui::DragValue::new(&mut page).range(1..=max_page).speed(0.1));
            ui.label(RichText::new(format!("of {max_page}")).color(palette.text_muted));
            if page != window.page {
                self.controller.set_page(page);
            }
        });

        let page = self.controller.table_page();
        ui.label(RichText::new(page.caption()).color(palette.text_muted));
        ui.add_space(6.0);

        let review_width = (ui.available_width() - SENTIMENT_COLUMN_WIDTH - 24.0).max(120.0);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("review_table")
                    .striped(true)
                    .num_columns(2)
                    .min_col_width(SENTIMENT_COLUMN_WIDTH)
                    .show(ui, |ui| {
                        ui.label(RichText::new(REVIEW_HEADER).strong());
                        ui.label(RichText::new(SENTIMENT_HEADER).strong());
                        ui.end_row();
                        for row in &page.rows {
                            ui.scope(|ui| {
                                ui.set_max_width(review_width);
                                ui.add(egui::Label::new(row.review).wrap());
                            });
                            ui.label(
                                RichText::new(row.sentiment.as_str())
                                    .color(style::sentiment_color(row.sentiment)),
                            );
                            ui.end_row();
                        }
                    });
            });
    }
}
