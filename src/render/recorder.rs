//! In-memory writer that records what it was asked to write.

use super::writer::{DocumentWriter, StyledParagraph};
use crate::error::Result;
use crate::model::{HeaderFooterSpec, PageSpec};
use serde::Serialize;

/// Records every writer call for later inspection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ElementRecorder {
    /// Page layout, if set
    pub page: Option<PageSpec>,

    /// Header, if set
    pub header: Option<HeaderFooterSpec>,

    /// Footer, if set
    pub footer: Option<HeaderFooterSpec>,

    /// Body paragraphs in order
    pub elements: Vec<StyledParagraph>,
}

impl ElementRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded body paragraphs.
    pub fn elements(&self) -> &[StyledParagraph] {
        &self.elements
    }

    /// Number of recorded body paragraphs.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl DocumentWriter for ElementRecorder {
    type Output = Vec<StyledParagraph>;

    fn set_page(&mut self, page: &PageSpec) -> Result<()> {
        self.page = Some(page.clone());
        Ok(())
    }

    fn set_header(&mut self, header: &HeaderFooterSpec) -> Result<()> {
        self.header = Some(header.clone());
        Ok(())
    }

    fn set_footer(&mut self, footer: &HeaderFooterSpec) -> Result<()> {
        self.footer = Some(footer.clone());
        Ok(())
    }

    fn append_paragraph(&mut self, paragraph: &StyledParagraph) -> Result<()> {
        self.elements.push(paragraph.clone());
        Ok(())
    }

    fn finish(self) -> Result<Vec<StyledParagraph>> {
        Ok(self.elements)
    }
}
