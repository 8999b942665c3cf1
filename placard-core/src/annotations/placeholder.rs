//! Dashed, labelled stand-in for a removed signature field

use crate::annotations::BorderStyle;
use crate::error::{PlacardError, Result};
use crate::geometry::Rectangle;
use crate::graphics::{Color, GraphicsContext, YAxis};
use crate::render::{Drawable, LabelStyle};
use serde::{Deserialize, Serialize};

/// Label used when the replaced field had no usable name.
pub const FALLBACK_LABEL: &str = "---";

/// Uniform 4pt dash with equal gaps.
pub const DEFAULT_DASH_PATTERN: [f64; 1] = [4.0];

/// Pick the label for a field: its name when non-empty, otherwise `fallback`.
pub fn resolve_label(name: Option<&str>, fallback: &str) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => fallback.to_string(),
    }
}

/// Placeholder annotation painted as a dashed rectangle with a text label in
/// its bottom-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    pub rect: Rectangle,
    /// Name of the field this placeholder stands in for, as it was found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Text painted inside the bounds
    pub label: String,
    pub border: BorderStyle,
    /// Border stroke color
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub label_style: LabelStyle,
}

impl Placeholder {
    pub fn builder(rect: Rectangle) -> PlaceholderBuilder {
        PlaceholderBuilder::new(rect)
    }

    /// Reject border settings that would produce invalid stroke operators.
    fn check_border(&self) -> Result<()> {
        let width = self.border.width;
        if !width.is_finite() || width < 0.0 {
            return Err(PlacardError::Drawing(format!(
                "placeholder '{}' has invalid border width {width}",
                self.label
            )));
        }
        if width == 0.0 {
            return Ok(());
        }

        let dash = self.border.effective_dash();
        let bad_length = dash.iter().any(|d| !d.is_finite() || *d < 0.0);
        let all_zero = !dash.is_empty() && dash.iter().all(|d| *d == 0.0);
        if bad_length || all_zero {
            return Err(PlacardError::Drawing(format!(
                "placeholder '{}' has invalid dash pattern {dash:?}",
                self.label
            )));
        }
        Ok(())
    }

    fn draw_border(&self, ctx: &mut GraphicsContext, bounds: &Rectangle) {
        let width = self.border.width;
        if width == 0.0 {
            return;
        }

        // Keep the stroke inside the bounds.
        let half = width / 2.0;
        ctx.set_line_width(width)
            .set_dash_pattern(&self.border.effective_dash(), 0.0)
            .set_stroke_color(self.color)
            .rect(
                bounds.lower_left.x + half,
                bounds.lower_left.y + half,
                (bounds.width() - width).max(0.0),
                (bounds.height() - width).max(0.0),
            )
            .stroke();
    }

    fn draw_label(&self, ctx: &mut GraphicsContext, bounds: &Rectangle) {
        if self.label.is_empty() {
            return;
        }

        let style = &self.label_style;
        let (text_width, text_height) = style.text_box(&self.label);

        // (x, y) is the bottom-left of the text box in the frame being drawn
        // in; `glyph_dir` is the text matrix d component for that frame.
        let (x, y, baseline, glyph_dir) = match ctx.y_axis() {
            YAxis::Up => {
                let x = bounds.lower_left.x + style.inset;
                let y = bounds.lower_left.y + style.inset;
                (x, y, y + style.baseline_offset(), 1.0)
            }
            YAxis::Down => {
                ctx.translate(bounds.lower_left.x, bounds.upper_right.y)
                    .scale(1.0, -1.0);
                let top = bounds.height() - text_height - style.inset;
                (
                    style.inset,
                    top,
                    top + text_height - style.baseline_offset(),
                    -1.0,
                )
            }
        };

        if let Some(background) = style.background {
            ctx.set_fill_color(background)
                .rect(x, y, text_width, text_height)
                .fill();
        }

        ctx.begin_text()
            .set_font(style.font, style.font_size)
            .set_text_matrix(1.0, 0.0, 0.0, glyph_dir, x, baseline)
            .set_fill_color(style.text_color)
            .show_text(&self.label)
            .end_text();
    }
}

impl Drawable for Placeholder {
    fn draw(&self, ctx: &mut GraphicsContext, bounds: &Rectangle) -> Result<()> {
        if !bounds.is_finite() {
            return Err(PlacardError::Drawing(format!(
                "placeholder '{}' has non-finite bounds",
                self.label
            )));
        }

        self.check_border()?;

        ctx.save_state();
        self.draw_border(ctx, bounds);
        self.draw_label(ctx, bounds);
        ctx.restore_state();
        Ok(())
    }
}

/// Typed constructor for [`Placeholder`].
#[derive(Debug, Clone)]
pub struct PlaceholderBuilder {
    rect: Rectangle,
    name: Option<String>,
    label: Option<String>,
    fallback_label: String,
    border: BorderStyle,
    color: Color,
    label_style: LabelStyle,
}

impl PlaceholderBuilder {
    pub fn new(rect: Rectangle) -> Self {
        Self {
            rect,
            name: None,
            label: None,
            fallback_label: FALLBACK_LABEL.to_string(),
            border: BorderStyle::dashed(1.0, DEFAULT_DASH_PATTERN.to_vec()),
            color: Color::black(),
            label_style: LabelStyle::default(),
        }
    }

    /// Name of the replaced field; also the label unless one is set.
    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Override the painted label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn fallback_label(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_label = fallback.into();
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn build(self) -> Placeholder {
        let label = self
            .label
            .unwrap_or_else(|| resolve_label(self.name.as_deref(), &self.fallback_label));

        Placeholder {
            rect: self.rect,
            name: self.name,
            label,
            border: self.border,
            color: self.color,
            label_style: self.label_style,
        }
    }
}
