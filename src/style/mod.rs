//! Style catalog and resolution.
//!
//! Resolution turns an optional template name and an optional partial
//! override into a complete [`StyleSet`]:
//!
//! ```
//! use mdocx::style::{resolve_style, StyleOverride};
//! use mdocx::model::Role;
//!
//! let overrides = StyleOverride::new().with_font_size(Role::Title, 24.0);
//! let styles = resolve_style(Some("technical"), Some(&overrides))?;
//! assert_eq!(styles.title.font.size, 24.0);
//! assert_eq!(styles.normal.font.family, "Arial");
//! # Ok::<(), mdocx::Error>(())
//! ```

mod catalog;
mod json;
mod overrides;

pub use catalog::{default_style_set, Template};
pub use json::{to_json, JsonFormat};
pub use overrides::{
    FontOverride, HeaderFooterOverride, PageOverride, ParagraphOverride, RoleOverride,
    StyleOverride,
};

use crate::error::{Error, Result};
use crate::model::StyleSet;

/// Resolve a template name and an optional override into a complete style set.
///
/// A missing or blank template name selects the default style set. An
/// unknown name fails with [`Error::UnknownTemplate`]; a bad override fails
/// with [`Error::InvalidStyleOverride`] naming the offending field.
pub fn resolve_style(template: Option<&str>, custom: Option<&StyleOverride>) -> Result<StyleSet> {
    let base = base_style_set(template)?;
    match custom {
        Some(custom) => custom.merge_onto(&base),
        None => Ok(base),
    }
}

/// Like [`resolve_style`], reading the override from a JSON value.
pub fn resolve_style_value(
    template: Option<&str>,
    custom: Option<&serde_json::Value>,
) -> Result<StyleSet> {
    let custom = custom
        .filter(|value| !value.is_null())
        .map(StyleOverride::from_value)
        .transpose()?;
    resolve_style(template, custom.as_ref())
}

fn base_style_set(template: Option<&str>) -> Result<StyleSet> {
    match template.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => {
            let template = Template::from_name(name)
                .ok_or_else(|| Error::UnknownTemplate(name.to_string()))?;
            log::debug!("Using style template '{}'", template.name());
            Ok(template.style_set().clone())
        }
        None => Ok(default_style_set()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use serde_json::json;

    #[test]
    fn test_resolve_without_template() {
        let styles = resolve_style(None, None).unwrap();
        assert_eq!(styles, default_style_set());

        let styles = resolve_style(Some("   "), None).unwrap();
        assert_eq!(styles, default_style_set());
    }

    #[test]
    fn test_resolve_unknown_template() {
        let err = resolve_style(Some("academic-xyz"), None).unwrap_err();
        assert!(matches!(err, Error::UnknownTemplate(_)));
    }

    #[test]
    fn test_resolve_alias() {
        let styles = resolve_style(Some("技术文档"), None).unwrap();
        assert_eq!(&styles, Template::Technical.style_set());
    }

    #[test]
    fn test_resolve_value_override() {
        let custom = json!({ "code": { "font": { "family": "JetBrains Mono" } } });
        let styles = resolve_style_value(Some("business"), Some(&custom)).unwrap();
        assert_eq!(styles.code.font.family, "JetBrains Mono");
        assert_eq!(styles.code.font.size, Template::Business.style_set().code.font.size);
    }

    #[test]
    fn test_resolve_value_null_is_no_override() {
        let styles = resolve_style_value(Some("academic"), Some(&serde_json::Value::Null)).unwrap();
        assert_eq!(&styles, Template::Academic.style_set());
    }

    #[test]
    fn test_resolve_does_not_touch_catalog() {
        let overrides = StyleOverride::new().with_font_size(Role::Normal, 30.0);
        let _ = resolve_style(Some("technical"), Some(&overrides)).unwrap();
        assert_eq!(Template::Technical.style_set().normal.font.size, 10.0);
    }
}
