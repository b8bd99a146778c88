//! Document converter module providing a plugin architecture for input formats.
//!
//! This module defines a converter system that allows registering converters
//! for different input formats and dispatching conversions based on file
//! extensions.
//!
//! # Example
//!
//! ```no_run
//! use mdocx::convert::{ConverterRegistry, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> mdocx::Result<()> {
//!     let registry = ConverterRegistry::with_defaults();
//!     let options = ConvertOptions::new().with_template("academic");
//!
//!     let result = registry.convert(Path::new("paper.md"), &options)?;
//!     std::fs::write(&result.suggested_filename, &result.bytes)?;
//!     Ok(())
//! }
//! ```

mod markdown;
mod pipeline;
mod text;

pub use markdown::MarkdownConverter;
pub use pipeline::outline;
pub use text::TextConverter;

pub(crate) use pipeline::to_docx;

use crate::error::{Error, Result};
use crate::model::StyleSet;
use crate::parser::{ClassifyOptions, InputFormat};
use crate::render::{AssemblyStats, DOCX_MIME_TYPE};
use crate::style::{resolve_style, resolve_style_value, StyleOverride};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File name used when the input has no name of its own.
pub const DEFAULT_FILENAME: &str = "converted_document.docx";

/// Custom styles layered over the template.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomStyles {
    /// Parsed JSON value
    Json(serde_json::Value),
    /// Unparsed JSON text
    JsonText(String),
    /// Typed override
    Override(StyleOverride),
}

impl CustomStyles {
    fn resolve(&self, template: Option<&str>) -> Result<StyleSet> {
        match self {
            CustomStyles::Json(value) => resolve_style_value(template, Some(value)),
            CustomStyles::JsonText(text) => {
                let overrides = StyleOverride::from_json_str(text)?;
                resolve_style(template, Some(&overrides))
            }
            CustomStyles::Override(overrides) => resolve_style(template, Some(overrides)),
        }
    }
}

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Style template name or alias; `None` selects the default styles
    pub template: Option<String>,

    /// Custom styles merged over the template
    pub custom_styles: Option<CustomStyles>,

    /// Classification options
    pub classify: ClassifyOptions,

    /// Input syntax
    pub format: InputFormat,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set custom styles from a JSON value.
    pub fn with_custom_styles(mut self, styles: serde_json::Value) -> Self {
        self.custom_styles = Some(CustomStyles::Json(styles));
        self
    }

    /// Set custom styles from JSON text. Malformed JSON is reported when converting.
    pub fn with_custom_styles_json(mut self, json: impl Into<String>) -> Self {
        self.custom_styles = Some(CustomStyles::JsonText(json.into()));
        self
    }

    /// Set a typed style override.
    pub fn with_style_override(mut self, overrides: StyleOverride) -> Self {
        self.custom_styles = Some(CustomStyles::Override(overrides));
        self
    }

    /// Set classification options.
    pub fn with_classify_options(mut self, options: ClassifyOptions) -> Self {
        self.classify = options;
        self
    }

    /// Set the input format.
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Resolve the complete style set these options describe.
    pub fn resolve_styles(&self) -> Result<StyleSet> {
        let template = self.template.as_deref();
        match &self.custom_styles {
            Some(custom) => custom.resolve(template),
            None => resolve_style(template, None),
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// The `.docx` package
    pub bytes: Vec<u8>,

    /// Conversion statistics (if collected)
    pub stats: Option<AssemblyStats>,

    /// MIME type of the output
    pub mime_type: &'static str,

    /// File name to save the output under
    pub suggested_filename: String,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            stats: None,
            mime_type: DOCX_MIME_TYPE,
            suggested_filename: DEFAULT_FILENAME.to_string(),
        }
    }

    /// Set conversion statistics.
    pub fn with_stats(mut self, stats: AssemblyStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Name the output after a source file.
    pub fn with_source_path(mut self, path: &Path) -> Self {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            self.suggested_filename = format!("{}.docx", stem);
        }
        self
    }

    /// Get output length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the output is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Trait for document converters.
///
/// Implement this trait to add support for a new input format.
pub trait DocumentConverter: Send + Sync {
    /// Get the supported file extensions for this converter.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["md"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert from bytes.
    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult>;

    /// Convert a file at the given path.
    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let bytes = std::fs::read(path)?;
        Ok(self.convert_bytes(&bytes, options)?.with_source_path(path))
    }

    /// Check if this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document converters.
///
/// The registry maps file extensions to converters and provides
/// convenient methods for converting documents.
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn DocumentConverter>>,
    by_name: HashMap<String, Arc<dyn DocumentConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with default converters (Markdown and plain text).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(MarkdownConverter::new()));
        registry.register(Arc::new(TextConverter::new()));
        registry
    }

    /// Register a converter.
    ///
    /// The converter will be registered for all its supported extensions.
    pub fn register(&mut self, converter: Arc<dyn DocumentConverter>) {
        for ext in converter.supported_extensions() {
            self.converters
                .insert(ext.to_lowercase(), converter.clone());
        }
        self.by_name
            .insert(converter.name().to_lowercase(), converter);
    }

    /// Get a converter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.converters.get(&ext.to_lowercase()).cloned()
    }

    /// Get a converter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.converters.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.converters.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Convert a file using the appropriate converter.
    pub fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!("{} has no extension", path.display()))
            })?;

        let converter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(format!("no converter for extension: {}", ext)))?;

        converter.convert(path, options)
    }

    /// Convert bytes using the specified extension to determine the converter.
    pub fn convert_bytes(
        &self,
        bytes: &[u8],
        ext: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let converter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(format!("no converter for extension: {}", ext)))?;

        converter.convert_bytes(bytes, options)
    }

    /// Convert several files in parallel. Results are in input order.
    pub fn convert_many(
        &self,
        paths: &[PathBuf],
        options: &ConvertOptions,
    ) -> Vec<(PathBuf, Result<ConvertResult>)> {
        paths
            .par_iter()
            .map(|path| (path.clone(), self.convert(path, options)))
            .collect()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use serde_json::json;

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_template("business")
            .with_classify_options(ClassifyOptions::new().without_title())
            .with_format(InputFormat::PlainText)
            .with_stats(true);

        assert_eq!(options.template.as_deref(), Some("business"));
        assert!(!options.classify.promote_first_heading);
        assert_eq!(options.format, InputFormat::PlainText);
        assert!(options.collect_stats);
    }

    #[test]
    fn test_resolve_styles_variants() {
        let from_value = ConvertOptions::new()
            .with_custom_styles(json!({"title": {"font": {"size": 20}}}))
            .resolve_styles()
            .unwrap();
        let from_text = ConvertOptions::new()
            .with_custom_styles_json(r#"{"title": {"font": {"size": 20}}}"#)
            .resolve_styles()
            .unwrap();
        let typed = ConvertOptions::new()
            .with_style_override(StyleOverride::new().with_font_size(Role::Title, 20.0))
            .resolve_styles()
            .unwrap();

        assert_eq!(from_value.title.font.size, 20.0);
        assert_eq!(from_value, from_text);
        assert_eq!(from_value, typed);
    }

    #[test]
    fn test_malformed_json_text_reports_root_path() {
        let err = ConvertOptions::new()
            .with_custom_styles_json("{not json")
            .resolve_styles()
            .unwrap_err();
        assert_eq!(err.path(), Some("$"));
    }

    #[test]
    fn test_convert_result_filename() {
        let result = ConvertResult::new(Vec::new());
        assert_eq!(result.suggested_filename, DEFAULT_FILENAME);
        assert_eq!(result.mime_type, DOCX_MIME_TYPE);

        let result = result.with_source_path(Path::new("/tmp/notes.md"));
        assert_eq!(result.suggested_filename, "notes.docx");
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = ConverterRegistry::with_defaults();
        assert!(registry.supports("md"));
        assert!(registry.supports("MARKDOWN"));
        assert!(registry.supports("txt"));
        assert!(!registry.supports("pdf"));
        assert_eq!(
            registry.supported_extensions(),
            vec!["markdown", "md", "text", "txt"]
        );
    }

    #[test]
    fn test_registry_get_by_extension() {
        let registry = ConverterRegistry::with_defaults();
        let converter = registry.get_by_extension("md");
        assert!(converter.is_some());
        assert_eq!(converter.unwrap().name(), "markdown");
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = ConverterRegistry::with_defaults();
        assert!(registry.get_by_name("text").is_some());
        assert!(registry.get_by_name("pdf").is_none());
    }

    #[test]
    fn test_registry_unsupported_extension() {
        let registry = ConverterRegistry::with_defaults();
        let err = registry
            .convert_bytes(b"x", "pdf", &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));

        let err = registry
            .convert(Path::new("README"), &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }
}
