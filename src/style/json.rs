//! JSON export for style sets.
//!
//! The exported shape is the same one [`StyleOverride`](super::StyleOverride)
//! reads, so an exported template can be edited and fed back as a custom style.

use crate::error::{Error, Result};
use crate::model::StyleSet;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a style set to JSON.
pub fn to_json(styles: &StyleSet, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(styles),
        JsonFormat::Compact => serde_json::to_string(styles),
    };

    result.map_err(|e| Error::WriterFailure(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleOverride, Template};

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(Template::Technical.style_set(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"heading_6\""));
        assert!(json.contains("Arial"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(Template::Default.style_set(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with("{\"title\":"));
    }

    #[test]
    fn test_export_reimports_as_override() {
        for template in Template::ALL {
            let styles = template.style_set();
            let json = to_json(styles, JsonFormat::Compact).unwrap();
            let overrides = StyleOverride::from_json_str(&json).unwrap();
            let merged = overrides.merge_onto(Template::Default.style_set()).unwrap();
            assert_eq!(&merged, styles, "{} did not round-trip", template.name());
        }
    }
}
