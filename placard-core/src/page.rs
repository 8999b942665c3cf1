use crate::annotations::Annotation;
use crate::error::Result;
use crate::graphics::{GraphicsContext, YAxis};
use serde::{Deserialize, Serialize};

fn default_width() -> f64 {
    612.0
}

fn default_height() -> f64 {
    792.0
}

/// A single page: its media size and the annotations attached to it.
///
/// Annotation order is significant only for rendering; later annotations
/// paint over earlier ones.
///
/// # Example
///
/// ```rust
/// use placard::{Page, Rectangle, SignatureField};
///
/// let mut page = Page::letter();
/// page.add_annotation(SignatureField::named(
///     Rectangle::from_array([72.0, 72.0, 272.0, 112.0]),
///     "Signer1",
/// ));
/// assert_eq!(page.annotations().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default = "default_width")]
    width: f64,
    #[serde(default = "default_height")]
    height: f64,
    #[serde(default)]
    annotations: Vec<Annotation>,
}

impl Default for Page {
    fn default() -> Self {
        Self::letter()
    }
}

impl Page {
    /// Creates an empty page with the specified width and height in points.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            annotations: Vec::new(),
        }
    }

    /// Creates a new A4 page (595 x 842 points).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// Creates a new US Letter page (612 x 792 points).
    pub fn letter() -> Self {
        Self::new(default_width(), default_height())
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Appends an annotation after all existing ones.
    pub fn add_annotation(&mut self, annotation: impl Into<Annotation>) {
        self.annotations.push(annotation.into());
    }

    /// Removes every annotation matching `predicate` and returns them in
    /// their original order. The matches are decided against the unmodified
    /// list; the annotations left behind keep their relative order.
    pub fn extract_annotations<F>(&mut self, predicate: F) -> Vec<Annotation>
    where
        F: FnMut(&Annotation) -> bool,
    {
        let (extracted, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.annotations)
            .into_iter()
            .partition(predicate);
        self.annotations = kept;
        extracted
    }

    pub fn with_annotation(mut self, annotation: impl Into<Annotation>) -> Self {
        self.add_annotation(annotation);
        self
    }

    /// Renders every annotation that paints itself into a fresh content
    /// stream, in annotation order.
    pub fn render_overlays(&self, y_axis: YAxis) -> Result<GraphicsContext> {
        let mut ctx = GraphicsContext::with_y_axis(y_axis);
        for annotation in &self.annotations {
            if let Some(drawable) = annotation.as_drawable() {
                drawable.draw(&mut ctx, annotation.rect())?;
            }
        }
        Ok(ctx)
    }
}
