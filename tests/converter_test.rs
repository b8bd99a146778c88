//! Integration tests for the converter module.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use mdocx::convert::{
    ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter, MarkdownConverter,
    TextConverter, DEFAULT_FILENAME,
};
use mdocx::error::{Error, Result};
use mdocx::render::{AssemblyStats, DOCX_MIME_TYPE};

/// Mock converter for testing.
struct MockConverter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockConverter {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl DocumentConverter for MockConverter {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn convert_bytes(&self, bytes: &[u8], _options: &ConvertOptions) -> Result<ConvertResult> {
        Ok(ConvertResult::new(bytes.to_vec()))
    }
}

#[test]
fn test_converter_registry_new() {
    let registry = ConverterRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("md"));
    assert!(!registry.supports("txt"));
}

#[test]
fn test_converter_registry_with_defaults() {
    let registry = ConverterRegistry::with_defaults();

    assert!(registry.supports("md"));
    assert!(registry.supports("MD")); // Case insensitive
    assert!(registry.supports("markdown"));
    assert!(registry.supports("txt"));
    assert!(!registry.supports("docx"));
}

#[test]
fn test_converter_registry_register() {
    let mut registry = ConverterRegistry::new();
    registry.register(Arc::new(MockConverter::new(vec!["rst", "rest"], "rst")));

    assert!(registry.supports("rst"));
    assert!(registry.supports("REST")); // Case insensitive
    assert_eq!(registry.get_by_name("RST").unwrap().name(), "rst");
}

#[test]
fn test_converter_registry_get_by_extension() {
    let registry = ConverterRegistry::with_defaults();

    assert_eq!(registry.get_by_extension("markdown").unwrap().name(), "markdown");
    assert_eq!(registry.get_by_extension("text").unwrap().name(), "text");
    assert!(registry.get_by_extension("pdf").is_none());
}

#[test]
fn test_converter_registry_override() {
    let mut registry = ConverterRegistry::with_defaults();
    registry.register(Arc::new(MockConverter::new(vec!["md"], "mock-md")));

    assert_eq!(registry.get_by_extension("md").unwrap().name(), "mock-md");
    // Other markdown extensions keep the built-in converter
    assert_eq!(registry.get_by_extension("markdown").unwrap().name(), "markdown");
}

#[test]
fn test_mock_converter_default_convert_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.mock");
    fs::write(&path, b"payload").unwrap();

    let converter = MockConverter::new(vec!["mock"], "mock-converter");
    let result = converter.convert(&path, &ConvertOptions::default()).unwrap();

    assert_eq!(result.bytes, b"payload");
    assert_eq!(result.suggested_filename, "input.docx");
}

#[test]
fn test_builtin_converters() {
    assert_eq!(MarkdownConverter::new().supported_extensions(), &["md", "markdown"]);
    assert_eq!(TextConverter::new().supported_extensions(), &["txt", "text"]);
    assert!(!MarkdownConverter::new().supports_extension("txt"));
}

#[test]
fn test_registry_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.md");
    fs::write(&path, "# Guide\n\nStep one.").unwrap();

    let registry = ConverterRegistry::with_defaults();
    let options = ConvertOptions::new().with_stats(true);
    let result = registry.convert(&path, &options).unwrap();

    assert_eq!(result.mime_type, DOCX_MIME_TYPE);
    assert_eq!(result.suggested_filename, "guide.docx");
    assert!(result.bytes.starts_with(b"PK"));
    let stats = result.stats.unwrap();
    assert_eq!(stats.title_count, 1);
    assert_eq!(stats.paragraph_count, 1);
}

#[test]
fn test_registry_convert_missing_file() {
    let registry = ConverterRegistry::with_defaults();
    let err = registry
        .convert(Path::new("/nonexistent/dir/missing.md"), &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_registry_convert_no_extension_error() {
    let registry = ConverterRegistry::with_defaults();

    let err = registry
        .convert(Path::new("noextension"), &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn test_registry_convert_bytes_unsupported() {
    let registry = ConverterRegistry::with_defaults();

    let result = registry.convert_bytes(b"test", "xyz", &ConvertOptions::default());
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_convert_many_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths: Vec<PathBuf> = Vec::new();
    for i in 0..6 {
        let path = dir.path().join(format!("doc{}.md", i));
        fs::write(&path, format!("# Doc {}\n\nBody {}.", i, i)).unwrap();
        paths.push(path);
    }
    paths.push(dir.path().join("notes.pdf"));

    let registry = ConverterRegistry::with_defaults();
    let results = registry.convert_many(&paths, &ConvertOptions::default());

    assert_eq!(results.len(), 7);
    for (i, (path, result)) in results.iter().take(6).enumerate() {
        assert_eq!(path, &paths[i]);
        assert_eq!(result.as_ref().unwrap().suggested_filename, format!("doc{}.docx", i));
    }
    assert!(matches!(results[6].1, Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_convert_result_methods() {
    let result = ConvertResult::new(vec![1, 2, 3]);

    assert_eq!(result.len(), 3);
    assert!(!result.is_empty());
    assert!(result.stats.is_none());
    assert_eq!(result.mime_type, DOCX_MIME_TYPE);
    assert_eq!(result.suggested_filename, DEFAULT_FILENAME);
}

#[test]
fn test_convert_result_with_stats() {
    let stats = AssemblyStats {
        heading_count: 3,
        paragraph_count: 20,
        ..Default::default()
    };

    let result = ConvertResult::new(Vec::new()).with_stats(stats);

    let stats = result.stats.unwrap();
    assert_eq!(stats.heading_count, 3);
    assert_eq!(stats.element_count(), 23);
}
