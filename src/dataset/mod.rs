//! Review dataset loaded once at startup and shared read-only afterwards.

mod loader;
mod record;

pub use loader::{
    CONTENT_COLUMN, DatasetError, LoadOptions, SCORE_COLUMN, SENTIMENT_COLUMN, load_dataset,
};
pub use record::{Dataset, RawReview, ReviewRecord};
