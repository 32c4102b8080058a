//! Bar and pie charts painted straight onto the egui canvas.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Shape, Stroke, pos2, vec2};

use super::style;
use crate::views::summary::{SentimentCounts, format_share};

const AXIS_MARGIN_LEFT: f32 = 48.0;
const AXIS_MARGIN_BOTTOM: f32 = 40.0;
const GRID_LINES: usize = 4;
const MAX_WEDGE_STEP: f32 = 0.2;

/// Paint the count per sentiment as vertical bars.
pub(super) fn paint_bar_chart(painter: &egui::Painter, rect: Rect, counts: &SentimentCounts) {
    let palette = style::palette();
    let plot = Rect::from_min_max(
        pos2(rect.left() + AXIS_MARGIN_LEFT, rect.top() + 16.0),
        pos2(rect.right() - 8.0, rect.bottom() - AXIS_MARGIN_BOTTOM),
    );
    let axis_max = nice_axis_max(counts.max());

    for step in 0..=GRID_LINES {
        let value = axis_max * step / GRID_LINES;
        let y = plot.bottom() - plot.height() * step as f32 / GRID_LINES as f32;
        painter.line_segment([pos2(plot.left(), y), pos2(plot.right(), y)], style::chart_grid());
        painter.text(
            pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            value.to_string(),
            FontId::proportional(11.0),
            palette.text_muted,
        );
    }
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], style::chart_axis());
    painter.line_segment([plot.left_bottom(), plot.left_top()], style::chart_axis());

    let ordered = counts.ordered();
    let slot_width = plot.width() / ordered.len() as f32;
    for (idx, (sentiment, count)) in ordered.iter().enumerate() {
        let center_x = plot.left() + slot_width * (idx as f32 + 0.5);
        let height = plot.height() * *count as f32 / axis_max as f32;
        let bar = Rect::from_min_max(
            pos2(center_x - slot_width * 0.3, plot.bottom() - height),
            pos2(center_x + slot_width * 0.3, plot.bottom()),
        );
        painter.rect_filled(bar, 0.0, style::sentiment_color(*sentiment));
        painter.text(
            pos2(center_x, bar.top() - 2.0),
            Align2::CENTER_BOTTOM,
            count.to_string(),
            FontId::proportional(12.0),
            palette.text_primary,
        );
        painter.text(
            pos2(center_x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            sentiment.title(),
            FontId::proportional(12.0),
            palette.text_primary,
        );
    }
    painter.text(
        pos2(plot.center().x, rect.bottom() - 2.0),
        Align2::CENTER_BOTTOM,
        "Sentiment",
        FontId::proportional(12.0),
        palette.text_muted,
    );
    painter.text(
        pos2(rect.left() + 2.0, rect.top()),
        Align2::LEFT_TOP,
        "Count",
        FontId::proportional(12.0),
        palette.text_muted,
    );
}

/// Paint each sentiment's share as a wedge, starting at 12 o'clock and
/// running counter-clockwise, with a legend on the right.
pub(super) fn paint_pie_chart(painter: &egui::Painter, rect: Rect, counts: &SentimentCounts) {
    let palette = style::palette();
    let legend_width = 110.0;
    let pie_area = Rect::from_min_max(rect.min, pos2(rect.right() - legend_width, rect.bottom()));
    let center = pie_area.center();
    let radius = pie_area.width().min(pie_area.height()) * 0.45;

    let slices = counts.pie_slices();
    if slices.is_empty() {
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "No reviews to chart",
            FontId::proportional(13.0),
            palette.text_muted,
        );
    }
    for slice in &slices {
        let color = style::sentiment_color(slice.sentiment);
        let start = FRAC_PI_2 + slice.start * TAU;
        let sweep = slice.sweep * TAU;
        paint_wedge(painter, center, radius, start, sweep, color);
        let mid = start + sweep * 0.5;
        painter.text(
            polar(center, radius * 0.62, mid),
            Align2::CENTER_CENTER,
            format_share(slice.sweep * 100.0),
            FontId::proportional(12.0),
            Color32::BLACK,
        );
    }

    let mut legend_y = rect.top() + 16.0;
    for (sentiment, _) in counts.ordered() {
        let swatch = Rect::from_min_size(
            pos2(rect.right() - legend_width + 8.0, legend_y),
            vec2(12.0, 12.0),
        );
        painter.rect_filled(swatch, 0.0, style::sentiment_color(sentiment));
        painter.text(
            pos2(swatch.right() + 6.0, swatch.center().y),
            Align2::LEFT_CENTER,
            sentiment.title(),
            FontId::proportional(12.0),
            palette.text_primary,
        );
        legend_y += 20.0;
    }
}

/// Wedges wider than a half turn are not convex, so paint in narrow strips.
fn paint_wedge(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    color: Color32,
) {
    let steps = (sweep / MAX_WEDGE_STEP).ceil().max(1.0) as usize;
    let step = sweep / steps as f32;
    for idx in 0..steps {
        let from = start + step * idx as f32;
        let arc = (0..=4).map(|k| polar(center, radius, from + step * k as f32 / 4.0));
        let points: Vec<Pos2> = std::iter::once(center).chain(arc).collect();
        painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
    }
}

/// Screen position at `angle` (radians, counter-clockwise from 3 o'clock).
fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    pos2(center.x + radius * angle.cos(), center.y - radius * angle.sin())
}

/// Round the tallest bar up to a tidy axis limit divisible by the grid.
fn nice_axis_max(max_count: usize) -> usize {
    if max_count == 0 {
        return GRID_LINES;
    }
    let magnitude = 10usize.pow(max_count.ilog10());
    let unit = (magnitude / 2).max(1);
    let rounded = max_count.div_ceil(unit) * unit;
    rounded.div_ceil(GRID_LINES) * GRID_LINES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_max_covers_the_tallest_bar() {
        for count in [0, 1, 3, 7, 12, 99, 100, 1_234, 50_001] {
            let axis = nice_axis_max(count);
            assert!(axis >= count, "{axis} < {count}");
            assert_eq!(axis % GRID_LINES, 0);
        }
        assert_eq!(nice_axis_max(0), GRID_LINES);
    }

    #[test]
    fn polar_puts_quarter_turn_at_the_top() {
        let top = polar(pos2(50.0, 50.0), 10.0, FRAC_PI_2);
        assert!((top.x - 50.0).abs() < 1e-4);
        assert!((top.y - 40.0).abs() < 1e-4);
    }
}
