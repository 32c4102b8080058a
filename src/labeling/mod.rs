//! Sentiment labels and the rules that assign them to reviews.

use std::fmt;

use serde::{Deserialize, Serialize};

mod score_rule;
pub use score_rule::{LabelOrigin, LabelStats, label_for_score, label_rows};

/// Sentiment class attached to every review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Order used by the summary charts, selectors and breakdown text.
    pub const DISPLAY_ORDER: [Sentiment; 3] =
        [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Canonical lowercase name, as written in datasets.
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Capitalized name for UI labels.
    pub fn title(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Parse a label cell. Accepts English and Indonesian spellings.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "positive" | "positif" => Some(Sentiment::Positive),
            "neutral" | "netral" => Some(Sentiment::Neutral),
            "negative" | "negatif" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_languages_and_ignores_case() {
        assert_eq!(Sentiment::parse("Positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::parse(" netral "), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::parse("NEGATIF"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::parse("mixed"), None);
        assert_eq!(Sentiment::parse(""), None);
    }

    #[test]
    fn display_order_is_positive_neutral_negative() {
        let names: Vec<_> = Sentiment::DISPLAY_ORDER.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["positive", "neutral", "negative"]);
    }
}
