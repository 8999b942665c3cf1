use serde::{Deserialize, Serialize};

/// Standard 14 fonts usable for placeholder labels without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Font {
    /// Helvetica (sans-serif)
    #[default]
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// Courier (monospace)
    Courier,
}

impl Font {
    /// Get the PDF base font name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::Courier => "Courier",
        }
    }

    /// Ascender height in 1/1000 em (AFM `Ascender`)
    pub fn ascent(&self) -> f64 {
        match self {
            Font::Helvetica | Font::HelveticaBold => 718.0,
            Font::Courier => 629.0,
        }
    }

    /// Descender depth in 1/1000 em (AFM `Descender`, negative)
    pub fn descent(&self) -> f64 {
        match self {
            Font::Helvetica | Font::HelveticaBold => -207.0,
            Font::Courier => -157.0,
        }
    }

    /// Height of one line of text at `size`, from descender to ascender.
    pub fn line_height(&self, size: f64) -> f64 {
        (self.ascent() - self.descent()) / 1000.0 * size
    }
}
