//! Page annotations as a closed set of variants.
//!
//! Signature fields are the input of substitution, placeholders its output,
//! and everything else is carried through as [`GenericAnnotation`].

mod annotation;
mod placeholder;
mod signature;

pub use annotation::{AnnotationType, BorderStyle, BorderStyleType, FieldType, GenericAnnotation};
pub use placeholder::{
    resolve_label, Placeholder, PlaceholderBuilder, DEFAULT_DASH_PATTERN, FALLBACK_LABEL,
};
pub use signature::SignatureField;

use crate::geometry::Rectangle;
use crate::render::Drawable;
use serde::{Deserialize, Serialize};

/// An annotation attached to a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    SignatureField(SignatureField),
    Placeholder(Placeholder),
    Other(GenericAnnotation),
}

impl Annotation {
    /// Page-space bounds
    pub fn rect(&self) -> &Rectangle {
        match self {
            Annotation::SignatureField(field) => &field.rect,
            Annotation::Placeholder(placeholder) => &placeholder.rect,
            Annotation::Other(other) => &other.rect,
        }
    }

    /// Form field type when the annotation is a widget.
    pub fn widget_field_type(&self) -> Option<FieldType> {
        match self {
            Annotation::SignatureField(_) => Some(FieldType::Signature),
            Annotation::Placeholder(_) => None,
            Annotation::Other(other) if other.subtype == AnnotationType::Widget => {
                other.field_type
            }
            Annotation::Other(_) => None,
        }
    }

    /// Whether this is a signature form field, whichever variant carries it.
    pub fn is_signature_field(&self) -> bool {
        self.widget_field_type() == Some(FieldType::Signature)
    }

    /// Field or annotation name, as stored
    pub fn name(&self) -> Option<&str> {
        match self {
            Annotation::SignatureField(field) => field.field_name.as_deref(),
            Annotation::Placeholder(placeholder) => placeholder.name.as_deref(),
            Annotation::Other(other) => other.name.as_deref(),
        }
    }

    /// Short description used in logs and listings
    pub fn kind_name(&self) -> &'static str {
        match self {
            Annotation::SignatureField(_) => "SignatureField",
            Annotation::Placeholder(_) => "Placeholder",
            Annotation::Other(other) => other.subtype.pdf_name(),
        }
    }

    /// The annotation's draw-time capability, if it paints itself
    pub fn as_drawable(&self) -> Option<&dyn Drawable> {
        match self {
            Annotation::Placeholder(placeholder) => Some(placeholder),
            _ => None,
        }
    }
}

impl From<SignatureField> for Annotation {
    fn from(field: SignatureField) -> Self {
        Annotation::SignatureField(field)
    }
}

impl From<Placeholder> for Annotation {
    fn from(placeholder: Placeholder) -> Self {
        Annotation::Placeholder(placeholder)
    }
}

impl From<GenericAnnotation> for Annotation {
    fn from(other: GenericAnnotation) -> Self {
        Annotation::Other(other)
    }
}
