use crate::geometry::Rectangle;
use serde::{Deserialize, Serialize};

/// Widget annotation of an interactive signature field (`/FT /Sig`).
///
/// Carries no appearance of its own here; only its position and the
/// partial field name matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureField {
    pub rect: Rectangle,
    /// Field name (`/T`), absent on some generated forms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
}

impl SignatureField {
    pub fn new(rect: Rectangle) -> Self {
        Self {
            rect,
            field_name: None,
        }
    }

    pub fn named(rect: Rectangle, field_name: impl Into<String>) -> Self {
        Self {
            rect,
            field_name: Some(field_name.into()),
        }
    }
}
