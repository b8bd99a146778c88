//! Partial style overrides and the field-level merge onto a base style set.
//!
//! An override mirrors the [`StyleSet`] shape with every field optional.
//! Merging replaces only the fields that are present, so overriding
//! `title.font.size` leaves the rest of `title` and every other role as the
//! base template defines them.
//!
//! Overrides are usually read from JSON shaped like
//!
//! ```json
//! {
//!   "title":  { "font": { "size": 20, "color": "#1F4E79" } },
//!   "normal": { "paragraph": { "line_spacing": 1.15, "alignment": "justify" } },
//!   "page":   { "margin_left": 20, "orientation": "landscape" },
//!   "footer": { "enabled": true, "content": "Confidential" }
//! }
//! ```
//!
//! Every error names the dotted path of the offending field.

use crate::error::{Error, Result};
use crate::model::{
    check_non_negative, check_positive, Alignment, Color, ElementStyle, FontSpec,
    HeaderFooterSpec, Orientation, PageSpec, ParagraphSpec, Role, StyleSet, MAX_HEADING_LEVEL,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Optional font fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontOverride {
    /// Font family name
    pub family: Option<String>,
    /// Font size in points
    pub size: Option<f32>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color
    pub color: Option<Color>,
}

impl FontOverride {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        let mut font = Self::default();
        for (key, value) in object(value, path)? {
            let path = join(path, key);
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                "family" => font.family = Some(string(value, &path)?),
                "size" => font.size = Some(number(value, &path)?),
                "bold" => font.bold = Some(boolean(value, &path)?),
                "italic" => font.italic = Some(boolean(value, &path)?),
                "color" => {
                    let raw = string(value, &path)?;
                    let color = raw
                        .parse::<Color>()
                        .map_err(|reason| Error::invalid_override(&path, reason))?;
                    font.color = Some(color);
                }
                _ => return Err(unknown_field(&path)),
            }
        }
        Ok(font)
    }

    fn validate(&self, path: &str) -> Result<()> {
        if let Some(family) = &self.family {
            if family.trim().is_empty() {
                return Err(Error::invalid_override(
                    join(path, "family"),
                    "must not be empty",
                ));
            }
        }
        if let Some(size) = self.size {
            check_positive(&join(path, "size"), size)?;
        }
        Ok(())
    }

    fn apply(&self, base: &mut FontSpec) {
        if let Some(family) = &self.family {
            base.family = family.trim().to_string();
        }
        if let Some(size) = self.size {
            base.size = size;
        }
        if let Some(bold) = self.bold {
            base.bold = bold;
        }
        if let Some(italic) = self.italic {
            base.italic = italic;
        }
        if let Some(color) = self.color {
            base.color = Some(color);
        }
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&FontSpec> for FontOverride {
    fn from(font: &FontSpec) -> Self {
        Self {
            family: Some(font.family.clone()),
            size: Some(font.size),
            bold: Some(font.bold),
            italic: Some(font.italic),
            color: font.color,
        }
    }
}

/// Optional paragraph fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphOverride {
    /// Text alignment
    pub alignment: Option<Alignment>,
    /// Line spacing multiplier
    pub line_spacing: Option<f32>,
    /// Space before in points
    pub space_before: Option<f32>,
    /// Space after in points
    pub space_after: Option<f32>,
    /// First line indent in points
    pub indent_first_line: Option<f32>,
    /// Left indent in points
    pub indent_left: Option<f32>,
    /// Right indent in points
    pub indent_right: Option<f32>,
}

impl ParagraphOverride {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        let mut para = Self::default();
        for (key, value) in object(value, path)? {
            let path = join(path, key);
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                "alignment" => para.alignment = Some(parsed(value, &path)?),
                "line_spacing" => para.line_spacing = Some(number(value, &path)?),
                "space_before" => para.space_before = Some(number(value, &path)?),
                "space_after" => para.space_after = Some(number(value, &path)?),
                "indent_first_line" => para.indent_first_line = Some(number(value, &path)?),
                "indent_left" => para.indent_left = Some(number(value, &path)?),
                "indent_right" => para.indent_right = Some(number(value, &path)?),
                _ => return Err(unknown_field(&path)),
            }
        }
        Ok(para)
    }

    fn validate(&self, path: &str) -> Result<()> {
        if let Some(spacing) = self.line_spacing {
            check_positive(&join(path, "line_spacing"), spacing)?;
        }
        let lengths = [
            ("space_before", self.space_before),
            ("space_after", self.space_after),
            ("indent_first_line", self.indent_first_line),
            ("indent_left", self.indent_left),
            ("indent_right", self.indent_right),
        ];
        for (field, value) in lengths {
            if let Some(value) = value {
                check_non_negative(&join(path, field), value)?;
            }
        }
        Ok(())
    }

    fn apply(&self, base: &mut ParagraphSpec) {
        if let Some(alignment) = self.alignment {
            base.alignment = alignment;
        }
        set(&mut base.line_spacing, self.line_spacing);
        set(&mut base.space_before, self.space_before);
        set(&mut base.space_after, self.space_after);
        set(&mut base.indent_first_line, self.indent_first_line);
        set(&mut base.indent_left, self.indent_left);
        set(&mut base.indent_right, self.indent_right);
    }
}

impl From<&ParagraphSpec> for ParagraphOverride {
    fn from(para: &ParagraphSpec) -> Self {
        Self {
            alignment: Some(para.alignment),
            line_spacing: Some(para.line_spacing),
            space_before: Some(para.space_before),
            space_after: Some(para.space_after),
            indent_first_line: Some(para.indent_first_line),
            indent_left: Some(para.indent_left),
            indent_right: Some(para.indent_right),
        }
    }
}

/// Override for one role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleOverride {
    /// Font fields
    pub font: FontOverride,
    /// Paragraph fields
    pub paragraph: ParagraphOverride,
}

impl RoleOverride {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        let mut role = Self::default();
        for (key, value) in object(value, path)? {
            let path = join(path, key);
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                "font" => role.font = FontOverride::from_value(value, &path)?,
                "paragraph" => role.paragraph = ParagraphOverride::from_value(value, &path)?,
                _ => return Err(unknown_field(&path)),
            }
        }
        Ok(role)
    }

    fn validate(&self, path: &str) -> Result<()> {
        self.font.validate(&join(path, "font"))?;
        self.paragraph.validate(&join(path, "paragraph"))
    }

    fn apply(&self, base: &mut ElementStyle) {
        self.font.apply(&mut base.font);
        self.paragraph.apply(&mut base.paragraph);
    }
}

impl From<&ElementStyle> for RoleOverride {
    fn from(style: &ElementStyle) -> Self {
        Self {
            font: FontOverride::from(&style.font),
            paragraph: ParagraphOverride::from(&style.paragraph),
        }
    }
}

/// Optional page layout fields (millimetres).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageOverride {
    /// Page width
    pub width: Option<f32>,
    /// Page height
    pub height: Option<f32>,
    /// Top margin
    pub margin_top: Option<f32>,
    /// Bottom margin
    pub margin_bottom: Option<f32>,
    /// Left margin
    pub margin_left: Option<f32>,
    /// Right margin
    pub margin_right: Option<f32>,
    /// Orientation
    pub orientation: Option<Orientation>,
}

impl PageOverride {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        let mut page = Self::default();
        for (key, value) in object(value, path)? {
            let path = join(path, key);
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                "width" => page.width = Some(number(value, &path)?),
                "height" => page.height = Some(number(value, &path)?),
                "margin_top" => page.margin_top = Some(number(value, &path)?),
                "margin_bottom" => page.margin_bottom = Some(number(value, &path)?),
                "margin_left" => page.margin_left = Some(number(value, &path)?),
                "margin_right" => page.margin_right = Some(number(value, &path)?),
                "orientation" => page.orientation = Some(parsed(value, &path)?),
                _ => return Err(unknown_field(&path)),
            }
        }
        Ok(page)
    }

    fn validate(&self, path: &str) -> Result<()> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if let Some(value) = value {
                check_positive(&join(path, field), value)?;
            }
        }
        let margins = [
            ("margin_top", self.margin_top),
            ("margin_bottom", self.margin_bottom),
            ("margin_left", self.margin_left),
            ("margin_right", self.margin_right),
        ];
        for (field, value) in margins {
            if let Some(value) = value {
                check_non_negative(&join(path, field), value)?;
            }
        }
        Ok(())
    }

    fn apply(&self, base: &mut PageSpec) {
        set(&mut base.width, self.width);
        set(&mut base.height, self.height);
        set(&mut base.margin_top, self.margin_top);
        set(&mut base.margin_bottom, self.margin_bottom);
        set(&mut base.margin_left, self.margin_left);
        set(&mut base.margin_right, self.margin_right);
        if let Some(orientation) = self.orientation {
            base.orientation = orientation;
        }
    }
}

impl From<&PageSpec> for PageOverride {
    fn from(page: &PageSpec) -> Self {
        Self {
            width: Some(page.width),
            height: Some(page.height),
            margin_top: Some(page.margin_top),
            margin_bottom: Some(page.margin_bottom),
            margin_left: Some(page.margin_left),
            margin_right: Some(page.margin_right),
            orientation: Some(page.orientation),
        }
    }
}

/// Optional header/footer fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderFooterOverride {
    /// Whether the header/footer is written
    pub enabled: Option<bool>,
    /// Text content
    pub content: Option<String>,
    /// Alignment
    pub alignment: Option<Alignment>,
    /// Font fields
    pub font: FontOverride,
}

impl HeaderFooterOverride {
    fn from_value(value: &Value, path: &str) -> Result<Self> {
        let mut hf = Self::default();
        for (key, value) in object(value, path)? {
            let path = join(path, key);
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                "enabled" => hf.enabled = Some(boolean(value, &path)?),
                "content" => hf.content = Some(string(value, &path)?),
                "alignment" => hf.alignment = Some(parsed(value, &path)?),
                "font" => hf.font = FontOverride::from_value(value, &path)?,
                _ => return Err(unknown_field(&path)),
            }
        }
        Ok(hf)
    }

    fn validate(&self, path: &str) -> Result<()> {
        self.font.validate(&join(path, "font"))
    }

    fn apply(&self, base: &mut HeaderFooterSpec) {
        if let Some(content) = &self.content {
            base.content = content.clone();
            // Giving text without saying otherwise turns the header/footer on.
            if self.enabled.is_none() {
                base.enabled = true;
            }
        }
        if let Some(enabled) = self.enabled {
            base.enabled = enabled;
        }
        if let Some(alignment) = self.alignment {
            base.alignment = alignment;
        }
        self.font.apply(&mut base.font);
    }
}

impl From<&HeaderFooterSpec> for HeaderFooterOverride {
    fn from(hf: &HeaderFooterSpec) -> Self {
        Self {
            enabled: Some(hf.enabled),
            content: Some(hf.content.clone()),
            alignment: Some(hf.alignment),
            font: FontOverride::from(&hf.font),
        }
    }
}

/// A partial [`StyleSet`]: any subset of roles and fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverride {
    /// Per-role overrides
    pub roles: BTreeMap<Role, RoleOverride>,
    /// Page layout overrides
    pub page: PageOverride,
    /// Header overrides
    pub header: HeaderFooterOverride,
    /// Footer overrides
    pub footer: HeaderFooterOverride,
}

impl StyleOverride {
    /// Create an empty override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an override from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::invalid_override("$", format!("invalid JSON: {}", e)))?;
        Self::from_value(&value)
    }

    /// Parse and validate an override from a JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut overrides = Self::default();
        for (key, value) in object(value, "$")? {
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                "page" => overrides.page = PageOverride::from_value(value, key)?,
                "header" => overrides.header = HeaderFooterOverride::from_value(value, key)?,
                "footer" => overrides.footer = HeaderFooterOverride::from_value(value, key)?,
                _ => {
                    let role = Role::from_key(key).ok_or_else(|| {
                        Error::invalid_override(
                            key.as_str(),
                            "unknown style role (expected title, heading_1..heading_6, normal, code, page, header or footer)",
                        )
                    })?;
                    let role_override = RoleOverride::from_value(value, key)?;
                    // `heading1` and `heading_1` may both appear; later keys win field by field.
                    let entry = overrides.roles.entry(role).or_default();
                    merge_role(entry, role_override);
                }
            }
        }
        overrides.validate()?;
        Ok(overrides)
    }

    /// Mutable override for a role, created empty if absent.
    pub fn role_mut(&mut self, role: Role) -> &mut RoleOverride {
        self.roles.entry(role).or_default()
    }

    /// Override for a role, if any.
    pub fn role(&self, role: Role) -> Option<&RoleOverride> {
        self.roles.get(&role)
    }

    /// Set a role's font size.
    pub fn with_font_size(mut self, role: Role, size: f32) -> Self {
        self.role_mut(role).font.size = Some(size);
        self
    }

    /// Set a role's font family.
    pub fn with_font_family(mut self, role: Role, family: impl Into<String>) -> Self {
        self.role_mut(role).font.family = Some(family.into());
        self
    }

    /// Set a role's font color.
    pub fn with_color(mut self, role: Role, color: Color) -> Self {
        self.role_mut(role).font.color = Some(color);
        self
    }

    /// Set a role's alignment.
    pub fn with_alignment(mut self, role: Role, alignment: Alignment) -> Self {
        self.role_mut(role).paragraph.alignment = Some(alignment);
        self
    }

    /// Set a role's line spacing.
    pub fn with_line_spacing(mut self, role: Role, spacing: f32) -> Self {
        self.role_mut(role).paragraph.line_spacing = Some(spacing);
        self
    }

    /// Set the footer text (enables the footer).
    pub fn with_footer(mut self, content: impl Into<String>) -> Self {
        self.footer.content = Some(content.into());
        self
    }

    /// Set the header text (enables the header).
    pub fn with_header(mut self, content: impl Into<String>) -> Self {
        self.header.content = Some(content.into());
        self
    }

    /// Check every set field.
    pub fn validate(&self) -> Result<()> {
        for (role, role_override) in &self.roles {
            if let Role::Heading(level) = role {
                if !(1..=MAX_HEADING_LEVEL).contains(level) {
                    return Err(Error::invalid_override(
                        role.key(),
                        format!("heading level {} is not supported", level),
                    ));
                }
            }
            role_override.validate(&role.key())?;
        }
        self.page.validate("page")?;
        self.header.validate("header")?;
        self.footer.validate("footer")
    }

    /// Validate this override and merge it onto `base`.
    ///
    /// The base is never modified; on error nothing is returned.
    pub fn merge_onto(&self, base: &StyleSet) -> Result<StyleSet> {
        self.validate()?;
        let mut merged = base.clone();
        self.apply(&mut merged)?;
        merged.validate()?;
        Ok(merged)
    }

    pub(crate) fn apply(&self, target: &mut StyleSet) -> Result<()> {
        for (role, role_override) in &self.roles {
            let style = target.get_mut(*role).map_err(|_| {
                Error::invalid_override(role.key(), "role is not part of the style set")
            })?;
            role_override.apply(style);
        }
        self.page.apply(&mut target.page);
        self.header.apply(&mut target.header);
        self.footer.apply(&mut target.footer);
        Ok(())
    }
}

impl From<&StyleSet> for StyleOverride {
    fn from(styles: &StyleSet) -> Self {
        Self {
            roles: styles
                .roles()
                .map(|(role, style)| (role, RoleOverride::from(style)))
                .collect(),
            page: PageOverride::from(&styles.page),
            header: HeaderFooterOverride::from(&styles.header),
            footer: HeaderFooterOverride::from(&styles.footer),
        }
    }
}

fn merge_role(target: &mut RoleOverride, other: RoleOverride) {
    let font = other.font;
    let para = other.paragraph;
    target.font.family = font.family.or(target.font.family.take());
    target.font.size = font.size.or(target.font.size);
    target.font.bold = font.bold.or(target.font.bold);
    target.font.italic = font.italic.or(target.font.italic);
    target.font.color = font.color.or(target.font.color);
    target.paragraph.alignment = para.alignment.or(target.paragraph.alignment);
    target.paragraph.line_spacing = para.line_spacing.or(target.paragraph.line_spacing);
    target.paragraph.space_before = para.space_before.or(target.paragraph.space_before);
    target.paragraph.space_after = para.space_after.or(target.paragraph.space_after);
    target.paragraph.indent_first_line =
        para.indent_first_line.or(target.paragraph.indent_first_line);
    target.paragraph.indent_left = para.indent_left.or(target.paragraph.indent_left);
    target.paragraph.indent_right = para.indent_right.or(target.paragraph.indent_right);
}

fn set(field: &mut f32, value: Option<f32>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() || path == "$" {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn unknown_field(path: &str) -> Error {
    Error::invalid_override(path, "unknown field")
}

fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::invalid_override(path, format!("expected an object, got {}", kind(value))))
}

fn number(value: &Value, path: &str) -> Result<f32> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .map(|n| n as f32)
        .ok_or_else(|| Error::invalid_override(path, format!("expected a number, got {}", kind(value))))
}

fn boolean(value: &Value, path: &str) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(Error::invalid_override(
            path,
            format!("expected a boolean, got {}", kind(value)),
        )),
    }
}

fn string(value: &Value, path: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_override(path, format!("expected a string, got {}", kind(value))))
}

fn parsed<T>(value: &Value, path: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    string(value, path)?
        .parse()
        .map_err(|reason| Error::invalid_override(path, reason))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::default_style_set;
    use serde_json::json;

    #[test]
    fn test_parse_partial_override() {
        let overrides = StyleOverride::from_value(&json!({
            "title": { "font": { "size": 20, "color": "#1f4e79" } },
            "normal": { "paragraph": { "alignment": "justify" } }
        }))
        .unwrap();

        let title = overrides.role(Role::Title).unwrap();
        assert_eq!(title.font.size, Some(20.0));
        assert_eq!(title.font.color, Some(Color::rgb(0x1F, 0x4E, 0x79)));
        assert!(title.paragraph == ParagraphOverride::default());

        let normal = overrides.role(Role::Normal).unwrap();
        assert_eq!(normal.paragraph.alignment, Some(Alignment::Justify));
        assert!(normal.font.is_empty());
    }

    #[test]
    fn test_unknown_role_names_path() {
        let err = StyleOverride::from_value(&json!({ "caption": { "font": { "size": 9 } } }))
            .unwrap_err();
        assert_eq!(err.path(), Some("caption"));
    }

    #[test]
    fn test_unknown_field_names_path() {
        let err = StyleOverride::from_value(&json!({ "title": { "font": { "weight": 700 } } }))
            .unwrap_err();
        assert_eq!(err.path(), Some("title.font.weight"));
    }

    #[test]
    fn test_wrong_type_names_path() {
        let err = StyleOverride::from_value(&json!({ "code": { "font": { "bold": [1] } } }))
            .unwrap_err();
        assert_eq!(err.path(), Some("code.font.bold"));

        let err = StyleOverride::from_value(&json!({ "normal": "big" })).unwrap_err();
        assert_eq!(err.path(), Some("normal"));

        let err = StyleOverride::from_value(&json!([1, 2])).unwrap_err();
        assert_eq!(err.path(), Some("$"));
    }

    #[test]
    fn test_out_of_range_values() {
        let err = StyleOverride::from_value(&json!({
            "normal": { "paragraph": { "line_spacing": -1 } }
        }))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidStyleOverride { .. }));
        assert_eq!(err.path(), Some("normal.paragraph.line_spacing"));

        let err = StyleOverride::from_value(&json!({ "title": { "font": { "size": 0 } } }))
            .unwrap_err();
        assert_eq!(err.path(), Some("title.font.size"));

        let err = StyleOverride::from_value(&json!({ "page": { "margin_top": -5 } })).unwrap_err();
        assert_eq!(err.path(), Some("page.margin_top"));
    }

    #[test]
    fn test_invalid_enum_and_color() {
        let err = StyleOverride::from_value(&json!({
            "heading_2": { "paragraph": { "alignment": "middle" } }
        }))
        .unwrap_err();
        assert_eq!(err.path(), Some("heading_2.paragraph.alignment"));

        let err = StyleOverride::from_value(&json!({ "title": { "font": { "color": "#12345" } } }))
            .unwrap_err();
        assert_eq!(err.path(), Some("title.font.color"));
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let overrides = StyleOverride::from_value(&json!({
            "normal": { "font": { "size": "11.5", "bold": "true" } }
        }))
        .unwrap();
        let normal = overrides.role(Role::Normal).unwrap();
        assert_eq!(normal.font.size, Some(11.5));
        assert_eq!(normal.font.bold, Some(true));
    }

    #[test]
    fn test_heading_alias_key() {
        let overrides =
            StyleOverride::from_value(&json!({ "heading1": { "font": { "size": 15 } } })).unwrap();
        assert_eq!(
            overrides.role(Role::Heading(1)).unwrap().font.size,
            Some(15.0)
        );
    }

    #[test]
    fn test_null_fields_are_skipped() {
        let overrides =
            StyleOverride::from_value(&json!({ "title": { "font": { "size": null } } })).unwrap();
        assert!(overrides.role(Role::Title).unwrap().font.is_empty());
    }

    #[test]
    fn test_invalid_json_string() {
        let err = StyleOverride::from_json_str("{ not json").unwrap_err();
        assert_eq!(err.path(), Some("$"));
    }

    #[test]
    fn test_merge_is_field_level() {
        let base = default_style_set();
        let overrides = StyleOverride::new().with_font_size(Role::Title, 22.0);
        let merged = overrides.merge_onto(&base).unwrap();

        assert_eq!(merged.title.font.size, 22.0);
        assert_eq!(merged.title.font.family, base.title.font.family);
        assert_eq!(merged.title.paragraph, base.title.paragraph);
        assert_eq!(merged.normal, base.normal);
    }

    #[test]
    fn test_merge_rejects_programmatic_bad_value() {
        let base = default_style_set();
        let overrides = StyleOverride::new().with_line_spacing(Role::Code, 0.0);
        let err = overrides.merge_onto(&base).unwrap_err();
        assert_eq!(err.path(), Some("code.paragraph.line_spacing"));
    }

    #[test]
    fn test_footer_content_enables_footer() {
        let base = default_style_set();
        let merged = StyleOverride::new()
            .with_footer("Page footer")
            .merge_onto(&base)
            .unwrap();
        assert!(merged.footer.is_active());
        assert!(!merged.header.is_active());
    }

    #[test]
    fn test_full_override_round_trip() {
        let base = default_style_set();
        let full = StyleOverride::from(&base);
        assert_eq!(full.merge_onto(&base).unwrap(), base);
    }
}
