//! # mdocx
//!
//! Markdown to styled Word document conversion for Rust.
//!
//! This library turns Markdown (or plain text) into an OOXML `.docx`
//! document whose title, headings, body text and code blocks are formatted
//! from a named style template, optionally refined by custom JSON styles.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> mdocx::Result<()> {
//!     let markdown = "# Report\n\nQuarterly numbers are up.";
//!     let bytes = mdocx::convert(markdown, Some("business"), None)?;
//!     std::fs::write("report.docx", bytes)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Style templates**: default, academic, business and technical
//! - **Custom styles**: partial JSON overrides, validated field by field
//! - **Staged errors**: every failure names the pipeline stage it came from
//! - **Parallel batches**: converts many files at once with Rayon

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use convert::{
    outline, ConvertOptions, ConvertResult, ConverterRegistry, CustomStyles, DocumentConverter,
    MarkdownConverter, TextConverter,
};
pub use error::{Error, Result, Stage};
pub use model::{
    Alignment, Color, ElementStyle, FontSpec, HeaderFooterSpec, Orientation, PageSpec,
    ParagraphSpec, Role, SemanticBlock, StyleSet,
};
pub use parser::{ClassifyOptions, InputFormat};
pub use render::{AssemblyStats, StyledParagraph, DOCX_MIME_TYPE};
pub use style::{resolve_style, JsonFormat, StyleOverride, Template};

use std::path::Path;

/// Convert Markdown into `.docx` bytes.
///
/// # Arguments
///
/// * `markdown` - Markdown source text
/// * `template` - Style template name or alias; `None` selects the default styles
/// * `custom` - Partial style override merged over the template
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let custom = json!({ "normal": { "font": { "size": 11 } } });
/// let bytes = mdocx::convert("# Title\n\nBody.", Some("academic"), Some(&custom))?;
/// assert!(bytes.starts_with(b"PK"));
/// # Ok::<(), mdocx::Error>(())
/// ```
pub fn convert(
    markdown: &str,
    template: Option<&str>,
    custom: Option<&serde_json::Value>,
) -> Result<Vec<u8>> {
    let mut options = ConvertOptions::new();
    if let Some(template) = template {
        options = options.with_template(template);
    }
    if let Some(custom) = custom {
        options = options.with_custom_styles(custom.clone());
    }
    convert::to_docx(markdown.as_bytes(), &options).map(|result| result.bytes)
}

/// Convert Markdown into `.docx` bytes, reading custom styles from JSON text.
///
/// Malformed JSON fails with [`Error::InvalidStyleOverride`] at path `$`.
pub fn convert_json(
    markdown: &str,
    template: Option<&str>,
    custom_json: Option<&str>,
) -> Result<Vec<u8>> {
    let mut options = ConvertOptions::new();
    if let Some(template) = template {
        options = options.with_template(template);
    }
    if let Some(json) = custom_json {
        options = options.with_custom_styles_json(json);
    }
    convert::to_docx(markdown.as_bytes(), &options).map(|result| result.bytes)
}

/// Convert input text with full options.
pub fn convert_with_options(input: &str, options: &ConvertOptions) -> Result<ConvertResult> {
    convert::to_docx(input.as_bytes(), options)
}

/// Convert a `.md`, `.markdown` or `.txt` file.
///
/// # Example
///
/// ```no_run
/// use mdocx::{convert_file, ConvertOptions};
///
/// let result = convert_file("notes.md", &ConvertOptions::new().with_template("technical"))?;
/// std::fs::write(&result.suggested_filename, &result.bytes)?;
/// # Ok::<(), mdocx::Error>(())
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<ConvertResult> {
    ConverterRegistry::with_defaults().convert(path.as_ref(), options)
}

/// Builder for configuring conversions.
///
/// # Example
///
/// ```
/// use mdocx::Mdocx;
///
/// let result = Mdocx::new()
///     .with_template("technical")
///     .without_title()
///     .convert("# Setup\n\nRun the installer.")?;
/// assert!(!result.bytes.is_empty());
/// # Ok::<(), mdocx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mdocx {
    options: ConvertOptions,
}

impl Mdocx {
    /// Create a new Mdocx builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.options = self.options.with_template(template);
        self
    }

    /// Merge custom styles from a JSON value.
    pub fn with_custom_styles(mut self, styles: serde_json::Value) -> Self {
        self.options = self.options.with_custom_styles(styles);
        self
    }

    /// Merge custom styles from JSON text.
    pub fn with_custom_styles_json(mut self, json: impl Into<String>) -> Self {
        self.options = self.options.with_custom_styles_json(json);
        self
    }

    /// Merge a typed style override.
    pub fn with_style_override(mut self, overrides: StyleOverride) -> Self {
        self.options = self.options.with_style_override(overrides);
        self
    }

    /// Keep a leading level-1 heading as a heading.
    pub fn without_title(mut self) -> Self {
        self.options.classify = self.options.classify.without_title();
        self
    }

    /// Set the deepest heading level kept.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.options.classify = self.options.classify.with_max_heading(level);
        self
    }

    /// Treat input as plain text.
    pub fn plain_text(mut self) -> Self {
        self.options = self.options.with_format(InputFormat::PlainText);
        self
    }

    /// Collect conversion statistics.
    pub fn with_stats(mut self) -> Self {
        self.options = self.options.with_stats(true);
        self
    }

    /// The options built so far.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert input text.
    pub fn convert(&self, input: &str) -> Result<ConvertResult> {
        convert_with_options(input, &self.options)
    }

    /// Convert a file, choosing the converter by extension.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<ConvertResult> {
        convert_file(path, &self.options)
    }

    /// List the styled elements a conversion would write.
    pub fn outline(&self, input: &str) -> Result<Vec<StyledParagraph>> {
        outline(input.as_bytes(), &self.options)
    }

    /// Resolve the style set this builder would use.
    pub fn styles(&self) -> Result<StyleSet> {
        self.options.resolve_styles()
    }
}
