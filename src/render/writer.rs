//! Writer contract between the assembler and an output format.
//!
//! The assembler resolves every style before calling the writer, so a
//! writer only ever sees fully-specified paragraphs.
//!
//! # Example
//!
//! ```
//! use mdocx::model::{HeaderFooterSpec, PageSpec};
//! use mdocx::render::{DocumentWriter, StyledParagraph};
//!
//! #[derive(Default)]
//! struct LineCounter(usize);
//!
//! impl DocumentWriter for LineCounter {
//!     type Output = usize;
//!
//!     fn set_page(&mut self, _page: &PageSpec) -> mdocx::Result<()> {
//!         Ok(())
//!     }
//!
//!     fn set_header(&mut self, _header: &HeaderFooterSpec) -> mdocx::Result<()> {
//!         Ok(())
//!     }
//!
//!     fn set_footer(&mut self, _footer: &HeaderFooterSpec) -> mdocx::Result<()> {
//!         Ok(())
//!     }
//!
//!     fn append_paragraph(&mut self, paragraph: &StyledParagraph) -> mdocx::Result<()> {
//!         self.0 += paragraph.lines.len();
//!         Ok(())
//!     }
//!
//!     fn finish(self) -> mdocx::Result<usize> {
//!         Ok(self.0)
//!     }
//! }
//! ```

use crate::error::Result;
use crate::model::{ElementStyle, HeaderFooterSpec, PageSpec, Role};
use serde::Serialize;

/// One output paragraph with its resolved style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledParagraph {
    /// Role the style was resolved from
    pub role: Role,

    /// Text lines; more than one only for code, separated by line breaks
    pub lines: Vec<String>,

    /// Resolved style
    pub style: ElementStyle,
}

impl StyledParagraph {
    /// Create a single-line paragraph.
    pub fn new(role: Role, text: impl Into<String>, style: ElementStyle) -> Self {
        Self {
            role,
            lines: vec![text.into()],
            style,
        }
    }

    /// Create a paragraph whose lines are kept verbatim.
    pub fn verbatim(role: Role, text: &str, style: ElementStyle) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { role, lines, style }
    }

    /// Text with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Sink for assembled document elements.
pub trait DocumentWriter {
    /// Value produced by [`finish`](DocumentWriter::finish)
    type Output;

    /// Set the page size, margins and orientation.
    fn set_page(&mut self, page: &PageSpec) -> Result<()>;

    /// Set the page header.
    fn set_header(&mut self, header: &HeaderFooterSpec) -> Result<()>;

    /// Set the page footer.
    fn set_footer(&mut self, footer: &HeaderFooterSpec) -> Result<()>;

    /// Append one paragraph at the end of the body.
    fn append_paragraph(&mut self, paragraph: &StyledParagraph) -> Result<()>;

    /// Finish the document.
    fn finish(self) -> Result<Self::Output>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_keeps_blank_lines() {
        let para = StyledParagraph::verbatim(Role::Code, "a\r\n\n  b", ElementStyle::default());
        assert_eq!(para.lines, vec!["a", "", "  b"]);
        assert_eq!(para.text(), "a\n\n  b");
    }

    #[test]
    fn test_new_is_single_line() {
        let para = StyledParagraph::new(Role::Normal, "text", ElementStyle::default());
        assert_eq!(para.lines.len(), 1);
    }
}
