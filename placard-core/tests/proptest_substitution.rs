//! Property-based tests for signature field substitution
//!
//! Generates documents with a random mix of signature fields, placeholders
//! and unrelated annotations and checks the substitution invariants hold
//! for all of them.

use placard::annotations::{AnnotationType, FieldType, GenericAnnotation};
use placard::{transform, Annotation, Document, Page, Placeholder, Rectangle, SignatureField};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![-1e4..1e4f64, Just(0.0), Just(612.0), Just(792.0)]
}

prop_compose! {
    fn rectangle_strategy()(
        x1 in coordinate(),
        y1 in coordinate(),
        x2 in coordinate(),
        y2 in coordinate()
    ) -> Rectangle {
        Rectangle::from_array([x1, y1, x2, y2])
    }
}

fn field_name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[A-Za-z][A-Za-z0-9_ ]{0,15}".prop_map(Some),
    ]
}

fn annotation_strategy() -> impl Strategy<Value = Annotation> {
    prop_oneof![
        (rectangle_strategy(), field_name()).prop_map(|(rect, field_name)| {
            Annotation::SignatureField(SignatureField { rect, field_name })
        }),
        (rectangle_strategy(), field_name()).prop_map(|(rect, name)| {
            let mut widget = GenericAnnotation::new(AnnotationType::Widget, rect)
                .with_field_type(FieldType::Signature);
            widget.name = name;
            Annotation::Other(widget)
        }),
        rectangle_strategy().prop_map(|rect| {
            Annotation::Other(GenericAnnotation::new(AnnotationType::Text, rect))
        }),
        rectangle_strategy().prop_map(|rect| {
            Annotation::Other(
                GenericAnnotation::new(AnnotationType::Widget, rect)
                    .with_field_type(FieldType::Text),
            )
        }),
        rectangle_strategy().prop_map(|rect| {
            Annotation::Placeholder(Placeholder::builder(rect).label("existing").build())
        }),
    ]
}

fn document_strategy() -> impl Strategy<Value = Document> {
    prop::collection::vec(prop::collection::vec(annotation_strategy(), 0..8), 0..5).prop_map(
        |pages| {
            let mut doc = Document::new();
            for annotations in pages {
                let mut page = Page::letter();
                for annotation in annotations {
                    page.add_annotation(annotation);
                }
                doc.add_page(page);
            }
            doc
        },
    )
}

fn sorted_bounds<'a>(annotations: impl Iterator<Item = &'a Annotation>) -> Vec<[f64; 4]> {
    let mut bounds: Vec<[f64; 4]> = annotations.map(|a| a.rect().to_array()).collect();
    bounds.sort_by(|a, b| a.partial_cmp(b).expect("finite coordinates"));
    bounds
}

fn new_placeholders(page: &Page, existing: usize) -> Vec<&Placeholder> {
    page.annotations()
        .iter()
        .filter_map(|a| match a {
            Annotation::Placeholder(p) => Some(p),
            _ => None,
        })
        .skip(existing)
        .collect()
}

proptest! {
    #[test]
    fn no_signature_field_survives(mut doc in document_strategy()) {
        transform(&mut doc);
        for page in doc.pages() {
            prop_assert!(page.annotations().iter().all(|a| !a.is_signature_field()));
        }
    }

    #[test]
    fn page_count_is_unchanged(mut doc in document_strategy()) {
        let before = doc.page_count();
        transform(&mut doc);
        prop_assert_eq!(doc.page_count(), before);
    }

    #[test]
    fn placeholder_bounds_match_removed_fields(doc in document_strategy()) {
        let mut after = doc.clone();
        transform(&mut after);

        for (before, after) in doc.pages().iter().zip(after.pages()) {
            let fields: Vec<&Annotation> = before
                .annotations()
                .iter()
                .filter(|a| a.is_signature_field())
                .collect();
            let existing = before
                .annotations()
                .iter()
                .filter(|a| matches!(a, Annotation::Placeholder(_)))
                .count();

            let added = new_placeholders(after, existing);
            prop_assert_eq!(added.len(), fields.len());

            let removed_bounds = sorted_bounds(fields.iter().copied());
            let mut added_bounds: Vec<[f64; 4]> = added.iter().map(|p| p.rect.to_array()).collect();
            added_bounds.sort_by(|a, b| a.partial_cmp(b).expect("finite coordinates"));
            prop_assert_eq!(removed_bounds, added_bounds);
        }
    }

    #[test]
    fn labels_follow_names_in_order(doc in document_strategy()) {
        let mut after = doc.clone();
        transform(&mut after);

        for (before, after) in doc.pages().iter().zip(after.pages()) {
            let expected: Vec<String> = before
                .annotations()
                .iter()
                .filter(|a| a.is_signature_field())
                .map(|a| match a.name() {
                    Some(name) if !name.is_empty() => name.to_string(),
                    _ => "---".to_string(),
                })
                .collect();
            let existing = before
                .annotations()
                .iter()
                .filter(|a| matches!(a, Annotation::Placeholder(_)))
                .count();

            let labels: Vec<String> = new_placeholders(after, existing)
                .iter()
                .map(|p| p.label.clone())
                .collect();
            prop_assert_eq!(labels, expected);
        }
    }

    #[test]
    fn other_annotations_keep_relative_order(doc in document_strategy()) {
        let mut after = doc.clone();
        transform(&mut after);

        for (before, after) in doc.pages().iter().zip(after.pages()) {
            let kept_before: Vec<&Annotation> = before
                .annotations()
                .iter()
                .filter(|a| !a.is_signature_field())
                .collect();
            let kept_after: Vec<&Annotation> = after
                .annotations()
                .iter()
                .take(kept_before.len())
                .collect();
            prop_assert_eq!(kept_before, kept_after);
        }
    }

    #[test]
    fn second_transform_is_noop(mut doc in document_strategy()) {
        transform(&mut doc);
        let once = doc.clone();
        transform(&mut doc);
        prop_assert_eq!(doc, once);
    }
}
