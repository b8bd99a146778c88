//! Markdown document converter implementation.

use crate::error::Result;
use crate::parser::InputFormat;

use super::{to_docx, ConvertOptions, ConvertResult, DocumentConverter};

/// Markdown converter.
///
/// Converts CommonMark documents to styled `.docx`.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    _private: (),
}

impl MarkdownConverter {
    /// Create a new Markdown converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentConverter for MarkdownConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn name(&self) -> &str {
        "markdown"
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        if options.format == InputFormat::Markdown {
            to_docx(bytes, options)
        } else {
            to_docx(bytes, &options.clone().with_format(InputFormat::Markdown))
        }
    }
}
