//! Draw-time capability for annotations that paint their own appearance.
//!
//! A display surface hands each drawable annotation a [`GraphicsContext`] and
//! the page-space bounds to paint into. Implementations must leave the
//! context's graphics state as they found it.

use crate::error::Result;
use crate::geometry::Rectangle;
use crate::graphics::{Color, GraphicsContext};
use crate::text::Font;
use serde::{Deserialize, Serialize};

/// Something that can paint itself inside page-space bounds.
pub trait Drawable {
    fn draw(&self, ctx: &mut GraphicsContext, bounds: &Rectangle) -> Result<()>;
}

/// Inset from the left and bottom edges of the bounds to the label box.
pub const LABEL_INSET: f64 = 5.0;

/// Font size used for placeholder labels.
pub const LABEL_FONT_SIZE: f64 = 10.0;

/// How a placeholder's label text is painted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font: Font,
    pub font_size: f64,
    /// Distance from the left and bottom edges of the bounds
    pub inset: f64,
    pub text_color: Color,
    /// Fill painted behind the glyphs, `None` for no background
    pub background: Option<Color>,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: Font::Helvetica,
            font_size: LABEL_FONT_SIZE,
            inset: LABEL_INSET,
            text_color: Color::black(),
            background: Some(Color::white()),
        }
    }
}

impl LabelStyle {
    /// Width and height of the box `text` occupies in this style.
    pub fn text_box(&self, text: &str) -> (f64, f64) {
        (
            crate::text::measure_text(text, self.font, self.font_size),
            self.font.line_height(self.font_size),
        )
    }

    /// Distance from the bottom of the text box up to the baseline.
    pub fn baseline_offset(&self) -> f64 {
        -self.font.descent() / 1000.0 * self.font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label_style() {
        let style = LabelStyle::default();
        assert_eq!(style.font, Font::Helvetica);
        assert_eq!(style.font_size, 10.0);
        assert_eq!(style.inset, 5.0);
        assert_eq!(style.background, Some(Color::white()));
    }

    #[test]
    fn test_text_box_and_baseline() {
        let style = LabelStyle::default();
        let (w, h) = style.text_box("---");
        assert!((w - 9.99).abs() < 1e-9);
        assert!((h - 9.25).abs() < 1e-9);
        assert!((style.baseline_offset() - 2.07).abs() < 1e-9);
    }

    #[test]
    fn test_label_style_partial_json() {
        let style: LabelStyle = serde_json::from_str(r#"{"font_size": 12.0}"#).unwrap();
        assert_eq!(style.font_size, 12.0);
        assert_eq!(style.inset, LABEL_INSET);
    }
}
