//! # placard
//!
//! Replaces the signature form fields of a document with dashed placeholder
//! annotations that show each field's name.
//!
//! ## Features
//!
//! - **Substitution**: every signature field is swapped for a placeholder
//!   with the same bounds, labelled with the field name or `"---"`
//! - **Self-drawing placeholders**: dashed border plus a label painted into a
//!   PDF content stream, on y-up or y-down surfaces
//! - **Typed document model**: pages and annotations as plain Rust types,
//!   loaded from JSON files or in-memory buffers
//! - **Viewer pipeline**: load → substitute → present, with an empty state
//!   when loading fails
//!
//! ## Quick Start
//!
//! ```rust
//! use placard::{transform, Annotation, Document, Page, Rectangle, SignatureField};
//!
//! let mut doc = Document::new();
//! doc.add_page(Page::letter().with_annotation(SignatureField::named(
//!     Rectangle::from_array([10.0, 10.0, 100.0, 20.0]),
//!     "Signer1",
//! )));
//!
//! transform(&mut doc);
//!
//! match &doc.pages()[0].annotations()[0] {
//!     Annotation::Placeholder(p) => assert_eq!(p.label, "Signer1"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ### Presenting a document
//!
//! ```rust,no_run
//! use placard::{ContentStreamSurface, DocumentSource, ViewerConfig, ViewerSession, YAxis};
//!
//! # fn main() -> placard::Result<()> {
//! let config = ViewerConfig::new(DocumentSource::path("Sample-Document-to-Sign.json"));
//! let session = ViewerSession::open(&config);
//!
//! let mut surface = ContentStreamSurface::new(YAxis::Up);
//! if session.present(&mut surface)? {
//!     for (i, stream) in surface.page_streams().iter().enumerate() {
//!         println!("page {i}:\n{}", stream.operations());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod annotations;
pub mod document;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod loader;
pub mod page;
pub mod render;
pub mod substitute;
pub mod text;
pub mod viewer;

pub use annotations::{
    Annotation, AnnotationType, BorderStyle, BorderStyleType, FieldType, GenericAnnotation,
    Placeholder, PlaceholderBuilder, SignatureField, FALLBACK_LABEL,
};
pub use document::Document;
pub use error::{PlacardError, Result};
pub use geometry::{Point, Rectangle};
pub use graphics::{Color, GraphicsContext, YAxis};
pub use loader::{load_document, parse_document, DocumentSource};
pub use page::Page;
pub use render::{Drawable, LabelStyle};
pub use substitute::{transform, AnnotationSubstitutor, SubstitutionOptions, SubstitutionSummary};
pub use text::Font;
pub use viewer::{
    ContentStreamSurface, DisplayDirection, DisplayMode, DisplayOptions, DisplaySurface,
    ViewerConfig, ViewerSession,
};

/// Current version of placard
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
