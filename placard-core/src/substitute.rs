//! Signature field substitution.
//!
//! Every signature form field on every page is removed and a [`Placeholder`]
//! with the same bounds is appended in its place, labelled with the field's
//! name. Running the substitution twice changes nothing the second time.

use crate::annotations::{
    resolve_label, Annotation, BorderStyle, Placeholder, DEFAULT_DASH_PATTERN, FALLBACK_LABEL,
};
use crate::document::Document;
use crate::graphics::Color;
use crate::render::LabelStyle;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How replacement placeholders are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstitutionOptions {
    /// Label for fields with an absent or empty name
    pub fallback_label: String,
    /// Border dash array
    pub dash_pattern: Vec<f64>,
    pub border_width: f64,
    pub border_color: Color,
    pub label_style: LabelStyle,
}

impl Default for SubstitutionOptions {
    fn default() -> Self {
        Self {
            fallback_label: FALLBACK_LABEL.to_string(),
            dash_pattern: DEFAULT_DASH_PATTERN.to_vec(),
            border_width: 1.0,
            border_color: Color::black(),
            label_style: LabelStyle::default(),
        }
    }
}

impl SubstitutionOptions {
    pub fn with_fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = label.into();
        self
    }

    pub fn with_dash_pattern(mut self, pattern: Vec<f64>) -> Self {
        self.dash_pattern = pattern;
        self
    }

    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }
}

/// Counts from one substitution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubstitutionSummary {
    pub pages_visited: usize,
    pub pages_changed: usize,
    pub fields_replaced: usize,
    /// Replacements that fell back to the sentinel label
    pub fallback_labels: usize,
}

/// Replaces signature form fields with labelled placeholders.
#[derive(Debug, Clone, Default)]
pub struct AnnotationSubstitutor {
    options: SubstitutionOptions,
}

impl AnnotationSubstitutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SubstitutionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SubstitutionOptions {
        &self.options
    }

    /// Build the placeholder standing in for `field`.
    pub fn placeholder_for(&self, field: &Annotation) -> Placeholder {
        let name = field.name().map(str::to_string);
        let label = resolve_label(name.as_deref(), &self.options.fallback_label);

        Placeholder::builder(*field.rect())
            .name(name)
            .label(label)
            .border(BorderStyle::dashed(
                self.options.border_width,
                self.options.dash_pattern.clone(),
            ))
            .color(self.options.border_color)
            .label_style(self.options.label_style.clone())
            .build()
    }

    /// Substitute every signature field in `document`, page by page.
    pub fn substitute(&self, document: &mut Document) -> SubstitutionSummary {
        let mut summary = SubstitutionSummary::default();

        for (page_index, page) in document.pages_mut().enumerate() {
            summary.pages_visited += 1;

            let fields = page.extract_annotations(Annotation::is_signature_field);
            if fields.is_empty() {
                continue;
            }
            summary.pages_changed += 1;

            for field in &fields {
                let placeholder = self.placeholder_for(field);
                if field.name().map_or(true, str::is_empty) {
                    summary.fallback_labels += 1;
                }
                debug!(
                    page = page_index,
                    field = field.name().unwrap_or("none"),
                    label = %placeholder.label,
                    "replacing signature field with placeholder"
                );
                page.add_annotation(placeholder);
                summary.fields_replaced += 1;
            }
        }

        if summary.fields_replaced > 0 {
            info!(
                fields = summary.fields_replaced,
                pages = summary.pages_changed,
                "substituted signature fields"
            );
        } else {
            debug!(pages = summary.pages_visited, "no signature fields found");
        }

        summary
    }
}

/// Replace every signature field in `document` using default options.
pub fn transform(document: &mut Document) {
    AnnotationSubstitutor::new().substitute(document);
}
