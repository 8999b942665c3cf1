use serde::{Deserialize, Serialize};

/// Represents a color in PDF documents.
///
/// Supports RGB, Grayscale, and CMYK color spaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// RGB color (red, green, blue) with values from 0.0 to 1.0
    Rgb(f64, f64, f64),
    /// Grayscale color with value from 0.0 (black) to 1.0 (white)
    Gray(f64),
    /// CMYK color (cyan, magenta, yellow, key/black) with values from 0.0 to 1.0
    Cmyk(f64, f64, f64, f64),
}

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Creates a grayscale color with value clamped to 0.0-1.0.
    pub fn gray(value: f64) -> Self {
        Color::Gray(value.clamp(0.0, 1.0))
    }

    /// Black color (gray 0.0).
    pub fn black() -> Self {
        Color::Gray(0.0)
    }

    /// White color (gray 1.0).
    pub fn white() -> Self {
        Color::Gray(1.0)
    }

    pub fn red() -> Self {
        Color::Rgb(1.0, 0.0, 0.0)
    }

    /// Operator for this color as a stroking (`uppercase`) or
    /// non-stroking color.
    pub(crate) fn operator(&self, stroking: bool) -> String {
        let (values, op) = match *self {
            Color::Rgb(r, g, b) => (format!("{r:.3} {g:.3} {b:.3}"), "rg"),
            Color::Gray(g) => (format!("{g:.3}"), "g"),
            Color::Cmyk(c, m, y, k) => (format!("{c:.3} {m:.3} {y:.3} {k:.3}"), "k"),
        };
        if stroking {
            format!("{values} {}", op.to_uppercase())
        } else {
            format!("{values} {op}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}
