//! Load → substitute → present pipeline for a single document.
//!
//! A session never hands a surface a document that is only partly
//! substituted, and a document that fails to load leaves the session empty
//! rather than failing the caller.

use crate::document::Document;
use crate::error::Result;
use crate::graphics::{Color, GraphicsContext, YAxis};
use crate::loader::{load_document, DocumentSource};
use crate::substitute::{AnnotationSubstitutor, SubstitutionOptions, SubstitutionSummary};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How pages are laid out by the display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    SinglePage,
    #[default]
    SinglePageContinuous,
    TwoUp,
    TwoUpContinuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// Presentation settings passed through to the display surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Fit pages to the surface width
    pub auto_scales: bool,
    pub display_mode: DisplayMode,
    pub direction: DisplayDirection,
    /// Surface background, `None` for transparent
    pub background: Option<Color>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            auto_scales: true,
            display_mode: DisplayMode::SinglePageContinuous,
            direction: DisplayDirection::Vertical,
            background: None,
        }
    }
}

/// Everything a session needs, supplied explicitly by the caller.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub source: DocumentSource,
    pub substitution: SubstitutionOptions,
    pub display: DisplayOptions,
}

impl ViewerConfig {
    pub fn new(source: impl Into<DocumentSource>) -> Self {
        Self {
            source: source.into(),
            substitution: SubstitutionOptions::default(),
            display: DisplayOptions::default(),
        }
    }

    pub fn with_substitution(mut self, options: SubstitutionOptions) -> Self {
        self.substitution = options;
        self
    }

    pub fn with_display(mut self, options: DisplayOptions) -> Self {
        self.display = options;
        self
    }
}

/// Paginates and renders a finished document.
pub trait DisplaySurface {
    fn configure(&mut self, options: &DisplayOptions);

    fn show(&mut self, document: &Document) -> Result<()>;
}

/// Surface that renders each page's self-drawing annotations into one
/// content stream per page.
#[derive(Debug, Clone, Default)]
pub struct ContentStreamSurface {
    y_axis: YAxis,
    options: Option<DisplayOptions>,
    pages: Vec<GraphicsContext>,
}

impl ContentStreamSurface {
    pub fn new(y_axis: YAxis) -> Self {
        Self {
            y_axis,
            options: None,
            pages: Vec::new(),
        }
    }

    pub fn options(&self) -> Option<&DisplayOptions> {
        self.options.as_ref()
    }

    /// Content streams in page order, empty until a document is shown
    pub fn page_streams(&self) -> &[GraphicsContext] {
        &self.pages
    }
}

impl DisplaySurface for ContentStreamSurface {
    fn configure(&mut self, options: &DisplayOptions) {
        self.options = Some(options.clone());
    }

    fn show(&mut self, document: &Document) -> Result<()> {
        self.pages = document
            .pages()
            .iter()
            .map(|page| page.render_overlays(self.y_axis))
            .collect::<Result<Vec<_>>>()?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum SessionState {
    Empty { reason: String },
    Ready(Document),
}

/// One loaded, substituted document waiting to be presented.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    display: DisplayOptions,
    state: SessionState,
    summary: SubstitutionSummary,
}

impl ViewerSession {
    /// Load the configured document and substitute its signature fields.
    ///
    /// A load failure is logged and produces an empty session.
    pub fn open(config: &ViewerConfig) -> Self {
        match load_document(&config.source) {
            Ok(document) => {
                Self::from_document(document, &config.substitution, config.display.clone())
            }
            Err(e) => {
                warn!(source = %config.source, error = %e, "could not load document, nothing to display");
                Self::empty(config.display.clone(), e.to_string())
            }
        }
    }

    /// Build a session around a document that is already loaded.
    ///
    /// Documents with non-finite annotation bounds are logged and produce an
    /// empty session, the same as a failed load.
    pub fn from_document(
        mut document: Document,
        options: &SubstitutionOptions,
        display: DisplayOptions,
    ) -> Self {
        if let Err(e) = document.validate() {
            warn!(error = %e, "document failed validation, nothing to display");
            return Self::empty(display, e.to_string());
        }

        let summary = AnnotationSubstitutor::with_options(options.clone()).substitute(&mut document);
        Self {
            display,
            state: SessionState::Ready(document),
            summary,
        }
    }

    fn empty(display: DisplayOptions, reason: String) -> Self {
        Self {
            display,
            state: SessionState::Empty { reason },
            summary: SubstitutionSummary::default(),
        }
    }

    pub fn document(&self) -> Option<&Document> {
        match &self.state {
            SessionState::Ready(document) => Some(document),
            SessionState::Empty { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.document().is_none()
    }

    /// Why the session is empty, if it is
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Empty { reason } => Some(reason),
            SessionState::Ready(_) => None,
        }
    }

    pub fn summary(&self) -> SubstitutionSummary {
        self.summary
    }

    pub fn display_options(&self) -> &DisplayOptions {
        &self.display
    }

    /// Hand the document to `surface`. Returns `false` when there is
    /// nothing to display.
    pub fn present(&self, surface: &mut dyn DisplaySurface) -> Result<bool> {
        let Some(document) = self.document() else {
            debug!("empty session, nothing presented");
            return Ok(false);
        };
        surface.configure(&self.display);
        surface.show(document)?;
        Ok(true)
    }

    /// Take ownership of the substituted document.
    pub fn into_document(self) -> Option<Document> {
        match self.state {
            SessionState::Ready(document) => Some(document),
            SessionState::Empty { .. } => None,
        }
    }
}
