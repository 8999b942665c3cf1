mod color;

pub use color::Color;

use crate::text::Font;
use serde::{Deserialize, Serialize};

/// Direction of the y axis of the surface a context draws onto.
///
/// PDF page space grows upwards from the bottom-left corner. Screen-style
/// surfaces usually grow downwards from the top-left, and anything drawing
/// text on them must flip its local frame first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAxis {
    /// Origin bottom-left, y grows upwards
    #[default]
    Up,
    /// Origin top-left, y grows downwards
    Down,
}

/// Records PDF content stream operators for one page's overlays.
#[derive(Debug, Clone)]
pub struct GraphicsContext {
    operations: String,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
    y_axis: YAxis,
}

impl Default for GraphicsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self::with_y_axis(YAxis::Up)
    }

    pub fn with_y_axis(y_axis: YAxis) -> Self {
        Self {
            operations: String::new(),
            fill_color: Color::black(),
            stroke_color: Color::black(),
            line_width: 1.0,
            y_axis,
        }
    }

    fn push_op(&mut self, op: impl AsRef<str>) {
        self.operations.push_str(op.as_ref());
        self.operations.push('\n');
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.push_op(format!("{x:.2} {y:.2} {width:.2} {height:.2} re"));
        self
    }

    pub fn stroke(&mut self) -> &mut Self {
        let color = self.stroke_color.operator(true);
        self.push_op(color);
        self.push_op("S");
        self
    }

    pub fn fill(&mut self) -> &mut Self {
        let color = self.fill_color.operator(false);
        self.push_op(color);
        self.push_op("f");
        self
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        self.stroke_color = color;
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.fill_color = color;
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.line_width = width;
        self.push_op(format!("{width:.2} w"));
        self
    }

    /// Set the line dash pattern (`d`). An empty pattern means a solid line.
    pub fn set_dash_pattern(&mut self, pattern: &[f64], phase: f64) -> &mut Self {
        let dashes = pattern
            .iter()
            .map(|d| format!("{d:.2}"))
            .collect::<Vec<_>>()
            .join(" ");
        self.push_op(format!("[{dashes}] {phase:.2} d"));
        self
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.push_op("q");
        self
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.push_op("Q");
        self
    }

    pub fn translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.push_op(format!("1 0 0 1 {tx:.2} {ty:.2} cm"));
        self
    }

    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.push_op(format!("{sx:.2} 0 0 {sy:.2} 0 0 cm"));
        self
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.push_op("BT");
        self
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.push_op("ET");
        self
    }

    pub fn set_font(&mut self, font: Font, size: f64) -> &mut Self {
        self.push_op(format!("/{} {size:.2} Tf", font.pdf_name()));
        self
    }

    pub fn set_text_matrix(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.push_op(format!("{a:.2} {b:.2} {c:.2} {d:.2} {e:.2} {f:.2} Tm"));
        self
    }

    /// Show `text` with the current fill color as a literal string (`Tj`).
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        let color = self.fill_color.operator(false);
        self.push_op(color);
        let literal = escape_literal(text);
        self.push_op(format!("({literal}) Tj"));
        self
    }

    /// Get the current fill color
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Get the current stroke color
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Get the current line width
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    /// Get the operations string
    pub fn operations(&self) -> &str {
        &self.operations
    }
}

/// Escape text for a PDF literal string. Characters outside Latin-1 have no
/// single-byte code in the standard fonts and are replaced with `?`.
fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' '..='~' => out.push(ch),
            _ if (ch as u32) <= 0xFF => out.push_str(&format!("\\{:03o}", ch as u32)),
            _ => out.push('?'),
        }
    }
    out
}
