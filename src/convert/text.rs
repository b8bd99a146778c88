//! Plain text document converter implementation.

use crate::error::Result;
use crate::parser::InputFormat;

use super::{to_docx, ConvertOptions, ConvertResult, DocumentConverter};

/// Plain text converter.
///
/// Every non-blank line becomes one body paragraph.
#[derive(Debug, Clone, Default)]
pub struct TextConverter {
    _private: (),
}

impl TextConverter {
    /// Create a new plain text converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentConverter for TextConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        to_docx(bytes, &options.clone().with_format(InputFormat::PlainText))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_converter_name() {
        let converter = TextConverter::new();
        assert_eq!(converter.name(), "text");
        assert!(converter.supports_extension("TXT"));
    }

    #[test]
    fn test_text_converter_one_paragraph_per_line() {
        let options = ConvertOptions::new().with_stats(true);
        let result = TextConverter::new()
            .convert_bytes(b"# first\n\nsecond\nthird\n", &options)
            .unwrap();
        let stats = result.stats.unwrap();
        assert_eq!(stats.paragraph_count, 3);
        assert_eq!(stats.title_count, 0);
    }
}
