use egui::Color32;

use crate::labeling::Sentiment;

/// Canvas fill behind the words.
pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

// Light and dark ends of each class scale; frequent words sit at the dark end.
const GREENS: (Color32, Color32) = (Color32::from_rgb(161, 217, 155), Color32::from_rgb(0, 90, 50));
const GRAYS: (Color32, Color32) = (Color32::from_rgb(189, 189, 189), Color32::from_rgb(37, 37, 37));
const REDS: (Color32, Color32) = (Color32::from_rgb(252, 146, 114), Color32::from_rgb(103, 0, 13));

/// Lowest position on the scale, so rare words stay readable on white.
const MIN_INTENSITY: f32 = 0.35;

/// Colour of a word with relative frequency `weight` in a `sentiment` cloud.
pub fn word_color(sentiment: Sentiment, weight: f32) -> Color32 {
    let (light, dark) = match sentiment {
        Sentiment::Positive => GREENS,
        Sentiment::Neutral => GRAYS,
        Sentiment::Negative => REDS,
    };
    let t = MIN_INTENSITY + (1.0 - MIN_INTENSITY) * weight.clamp(0.0, 1.0);
    lerp(light, dark, t)
}

fn lerp(from: Color32, to: Color32, t: f32) -> Color32 {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}
