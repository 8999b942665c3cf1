//! Shared annotation vocabulary: subtypes, field types and border styles

use crate::geometry::Rectangle;
use serde::{Deserialize, Serialize};

/// Annotation subtypes according to ISO 32000-1 Table 169
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationType {
    /// Text annotation (sticky note)
    Text,
    /// Link annotation
    Link,
    /// Free text annotation
    FreeText,
    /// Line annotation
    Line,
    /// Square annotation
    Square,
    /// Circle annotation
    Circle,
    /// Polygon annotation
    Polygon,
    /// Polyline annotation
    PolyLine,
    /// Highlight annotation
    Highlight,
    /// Underline annotation
    Underline,
    /// Squiggly underline annotation
    Squiggly,
    /// Strikeout annotation
    StrikeOut,
    /// Rubber stamp annotation
    Stamp,
    /// Caret annotation
    Caret,
    /// Ink annotation
    Ink,
    /// Popup annotation
    Popup,
    /// File attachment annotation
    FileAttachment,
    /// Widget annotation (form field)
    Widget,
    /// Watermark annotation
    Watermark,
}

impl AnnotationType {
    /// Get PDF subtype name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            AnnotationType::Text => "Text",
            AnnotationType::Link => "Link",
            AnnotationType::FreeText => "FreeText",
            AnnotationType::Line => "Line",
            AnnotationType::Square => "Square",
            AnnotationType::Circle => "Circle",
            AnnotationType::Polygon => "Polygon",
            AnnotationType::PolyLine => "PolyLine",
            AnnotationType::Highlight => "Highlight",
            AnnotationType::Underline => "Underline",
            AnnotationType::Squiggly => "Squiggly",
            AnnotationType::StrikeOut => "StrikeOut",
            AnnotationType::Stamp => "Stamp",
            AnnotationType::Caret => "Caret",
            AnnotationType::Ink => "Ink",
            AnnotationType::Popup => "Popup",
            AnnotationType::FileAttachment => "FileAttachment",
            AnnotationType::Widget => "Widget",
            AnnotationType::Watermark => "Watermark",
        }
    }
}

/// Interactive form field type of a widget (ISO 32000-1 Section 12.7.4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Push button, checkbox or radio button
    #[serde(rename = "Btn")]
    Button,
    /// Text field
    #[serde(rename = "Tx")]
    Text,
    /// List box or combo box
    #[serde(rename = "Ch")]
    Choice,
    /// Signature field
    #[serde(rename = "Sig")]
    Signature,
}

impl FieldType {
    /// Get the PDF `/FT` value
    pub fn pdf_name(&self) -> &'static str {
        match self {
            FieldType::Button => "Btn",
            FieldType::Text => "Tx",
            FieldType::Choice => "Ch",
            FieldType::Signature => "Sig",
        }
    }
}

/// Border style type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyleType {
    /// Solid border
    #[default]
    Solid,
    /// Dashed border
    Dashed,
    /// Beveled border
    Beveled,
    /// Inset border
    Inset,
    /// Underline only
    Underline,
}

impl BorderStyleType {
    /// Get PDF name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            BorderStyleType::Solid => "S",
            BorderStyleType::Dashed => "D",
            BorderStyleType::Beveled => "B",
            BorderStyleType::Inset => "I",
            BorderStyleType::Underline => "U",
        }
    }
}

/// Border style for annotations (`/BS`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    /// Width in points
    pub width: f64,
    /// Style: S (solid), D (dashed), B (beveled), I (inset), U (underline)
    pub style: BorderStyleType,
    /// Dash pattern for dashed borders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<Vec<f64>>,
}

impl BorderStyle {
    /// Dash array a reader uses when a dashed border omits `/D`
    pub const DEFAULT_DASH: [f64; 1] = [3.0];

    /// A dashed border with the given dash array
    pub fn dashed(width: f64, pattern: Vec<f64>) -> Self {
        Self {
            width,
            style: BorderStyleType::Dashed,
            dash_pattern: Some(pattern),
        }
    }

    /// The dash array to stroke with, or an empty array for solid lines.
    pub fn effective_dash(&self) -> Vec<f64> {
        match self.style {
            BorderStyleType::Dashed => self
                .dash_pattern
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| Self::DEFAULT_DASH.to_vec()),
            _ => Vec::new(),
        }
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            style: BorderStyleType::Solid,
            dash_pattern: None,
        }
    }
}

/// Any annotation this crate passes through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericAnnotation {
    /// PDF subtype
    pub subtype: AnnotationType,
    /// Rectangle defining annotation position
    pub rect: Rectangle,
    /// Field type when the annotation is a form widget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    /// Optional annotation or field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional content text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl GenericAnnotation {
    pub fn new(subtype: AnnotationType, rect: Rectangle) -> Self {
        Self {
            subtype,
            rect,
            field_type: None,
            name: None,
            contents: None,
        }
    }

    /// Set contents
    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    /// Set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark as a form widget of the given field type
    pub fn with_field_type(mut self, field_type: FieldType) -> Self {
        self.subtype = AnnotationType::Widget;
        self.field_type = Some(field_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_annotation_type() {
        assert_eq!(AnnotationType::Text.pdf_name(), "Text");
        assert_eq!(AnnotationType::Widget.pdf_name(), "Widget");
        assert_eq!(
            serde_json::to_string(&AnnotationType::FreeText).unwrap(),
            "\"FreeText\""
        );
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::Signature.pdf_name(), "Sig");
        assert_eq!(serde_json::to_string(&FieldType::Text).unwrap(), "\"Tx\"");
        let ft: FieldType = serde_json::from_str("\"Sig\"").unwrap();
        assert_eq!(ft, FieldType::Signature);
    }

    #[test]
    fn test_border_style() {
        let border = BorderStyle::dashed(2.0, vec![3.0, 1.0]);
        assert_eq!(border.width, 2.0);
        assert_eq!(border.style.pdf_name(), "D");
        assert_eq!(border.effective_dash(), vec![3.0, 1.0]);
    }

    #[test]
    fn test_effective_dash_defaults() {
        let solid = BorderStyle::default();
        assert!(solid.effective_dash().is_empty());

        let dashed_without_pattern = BorderStyle {
            style: BorderStyleType::Dashed,
            ..Default::default()
        };
        assert_eq!(dashed_without_pattern.effective_dash(), vec![3.0]);
    }

    #[test]
    fn test_generic_annotation_builder() {
        let rect = Rectangle::new(Point::new(0.0, 0.0), Point::new(50.0, 10.0));
        let widget = GenericAnnotation::new(AnnotationType::Text, rect)
            .with_field_type(FieldType::Text)
            .with_name("email");

        assert_eq!(widget.subtype, AnnotationType::Widget);
        assert_eq!(widget.field_type, Some(FieldType::Text));
        assert_eq!(widget.name.as_deref(), Some("email"));
        assert!(widget.contents.is_none());
    }
}
