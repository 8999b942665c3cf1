use crate::error::{PlacardError, Result};
use crate::page::Page;
use serde::{Deserialize, Serialize};

/// An ordered sequence of pages.
///
/// Documents are built by a loader and owned by the caller; substitution
/// borrows one mutably and edits the annotations of existing pages only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default)]
    pages: Vec<Page>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Adds a page after the last one.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> impl Iterator<Item = &mut Page> {
        self.pages.iter_mut()
    }

    pub fn page(&self, index: usize) -> Result<&Page> {
        self.pages
            .get(index)
            .ok_or(PlacardError::InvalidPageNumber(index))
    }

    /// Checks that every annotation has finite bounds.
    ///
    /// Only documents built through the API can fail this; JSON input cannot
    /// express non-finite numbers. [`ViewerSession::from_document`] runs it
    /// before substituting.
    ///
    /// [`ViewerSession::from_document`]: crate::viewer::ViewerSession::from_document
    pub fn validate(&self) -> Result<()> {
        for (index, page) in self.pages.iter().enumerate() {
            if let Some(bad) = page.annotations().iter().find(|a| !a.rect().is_finite()) {
                return Err(PlacardError::InvalidBounds {
                    page: index,
                    reason: format!("{} annotation has a non-finite coordinate", bad.kind_name()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::SignatureField;
    use crate::geometry::Rectangle;

    #[test]
    fn test_document_pages() {
        let mut doc = Document::new();
        assert_eq!(doc.page_count(), 0);
        doc.set_title("Sample Document to Sign");
        doc.add_page(Page::letter());
        doc.add_page(Page::a4());

        assert_eq!(doc.title(), Some("Sample Document to Sign"));
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.page(1).unwrap().width(), 595.0);
        assert!(matches!(
            doc.page(2),
            Err(PlacardError::InvalidPageNumber(2))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_bounds() {
        let mut doc = Document::new();
        doc.add_page(Page::letter());
        doc.add_page(Page::letter().with_annotation(SignatureField::new(Rectangle::from_array(
            [0.0, 0.0, f64::NAN, 10.0],
        ))));

        match doc.validate() {
            Err(PlacardError::InvalidBounds { page, .. }) => assert_eq!(page, 1),
            other => panic!("expected InvalidBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_accepts_empty_document() {
        assert!(Document::new().validate().is_ok());
    }
}
