//! Standard font names and width tables used to lay out placeholder labels.

mod font;
mod metrics;

pub use font::Font;
pub use metrics::{measure_text, FontMetrics};
