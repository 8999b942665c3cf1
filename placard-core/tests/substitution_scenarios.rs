//! End-to-end substitution scenarios
//!
//! Builds documents the way a loader would, runs the substitution and checks
//! the resulting pages annotation by annotation.

use placard::annotations::{AnnotationType, GenericAnnotation};
use placard::{
    load_document, transform, Annotation, ContentStreamSurface, Document, DocumentSource, Page,
    Placeholder, Rectangle, SignatureField, ViewerConfig, ViewerSession, YAxis,
};
use pretty_assertions::assert_eq;

fn placeholders(page: &Page) -> Vec<&Placeholder> {
    page.annotations()
        .iter()
        .filter_map(|a| match a {
            Annotation::Placeholder(p) => Some(p),
            _ => None,
        })
        .collect()
}

#[test]
fn test_two_page_document_with_unrelated_annotation() {
    let bounds = Rectangle::from_array([10.0, 10.0, 100.0, 20.0]);
    let note = GenericAnnotation::new(AnnotationType::Text, Rectangle::from_array([200.0, 200.0, 220.0, 220.0]))
        .with_contents("Please sign below");

    let mut doc = Document::new();
    doc.add_page(
        Page::letter()
            .with_annotation(SignatureField::named(bounds, "Signer1"))
            .with_annotation(note.clone()),
    );
    doc.add_page(Page::letter());

    transform(&mut doc);

    let page0 = &doc.pages()[0];
    assert_eq!(page0.annotations().len(), 2);
    assert_eq!(page0.annotations()[0], Annotation::Other(note));

    let placeholders = placeholders(page0);
    assert_eq!(placeholders.len(), 1);
    assert_eq!(placeholders[0].rect, bounds);
    assert_eq!(placeholders[0].label, "Signer1");

    assert!(doc.pages()[1].annotations().is_empty());
    assert_eq!(doc.page_count(), 2);
}

#[test]
fn test_two_fields_on_one_page() {
    let a = Rectangle::from_array([10.0, 10.0, 100.0, 20.0]);
    let b = Rectangle::from_array([10.0, 50.0, 100.0, 60.0]);

    let mut doc = Document::new();
    doc.add_page(
        Page::letter()
            .with_annotation(SignatureField::named(a, "A"))
            .with_annotation(SignatureField::named(b, "B")),
    );

    transform(&mut doc);

    let page = &doc.pages()[0];
    assert!(page.annotations().iter().all(|a| !a.is_signature_field()));

    let found: Vec<_> = placeholders(page)
        .into_iter()
        .map(|p| (p.label.as_str(), p.rect))
        .collect();
    assert_eq!(found, vec![("A", a), ("B", b)]);
}

#[test]
fn test_unnamed_fields_get_sentinel() {
    let bounds = Rectangle::from_array([0.0, 0.0, 50.0, 20.0]);
    let mut doc = Document::new();
    doc.add_page(
        Page::letter()
            .with_annotation(SignatureField::new(bounds))
            .with_annotation(SignatureField::named(bounds, "")),
    );

    transform(&mut doc);

    let labels: Vec<_> = placeholders(&doc.pages()[0])
        .into_iter()
        .map(|p| p.label.as_str())
        .collect();
    assert_eq!(labels, vec!["---", "---"]);
}

#[test]
fn test_pages_without_fields_are_untouched() {
    let mut doc = Document::new();
    doc.add_page(Page::a4().with_annotation(GenericAnnotation::new(
        AnnotationType::Link,
        Rectangle::from_array([0.0, 0.0, 10.0, 10.0]),
    )));
    doc.add_page(Page::letter());
    let before = doc.clone();

    transform(&mut doc);
    assert_eq!(doc, before);
}

#[test]
fn test_loaded_fixture_renders_placeholders() {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/sample-document-to-sign.json");
    let doc = load_document(&DocumentSource::path(fixture)).expect("fixture should load");
    let fields_before: usize = doc
        .pages()
        .iter()
        .map(|p| p.annotations().iter().filter(|a| a.is_signature_field()).count())
        .sum();
    assert!(fields_before > 0);

    let session = ViewerSession::open(&ViewerConfig::new(DocumentSource::path(fixture)));
    assert_eq!(session.summary().fields_replaced, fields_before);

    let mut surface = ContentStreamSurface::new(YAxis::Up);
    assert!(session.present(&mut surface).unwrap());
    let rendered: String = surface
        .page_streams()
        .iter()
        .map(|s| s.operations().to_string())
        .collect();
    assert!(rendered.contains("[4.00] 0.00 d"));
    assert!(rendered.contains("(Signer1) Tj"));
}
