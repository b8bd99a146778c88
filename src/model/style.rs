//! Style types: fonts, paragraph formatting and the per-role style set.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Deepest heading level a style set carries a style for.
pub const MAX_HEADING_LEVEL: u8 = 6;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").unwrap());

/// An RGB text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex triple (`#RRGGBB`, `RRGGBB`, `#RGB`) or a color name.
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();
        if let Some(caps) = HEX_COLOR.captures(s) {
            let hex = &caps[1];
            if hex.len() == 3 {
                let mut channels = hex.chars().filter_map(|c| c.to_digit(16).map(|d| d as u8 * 17));
                return Some(Color::rgb(channels.next()?, channels.next()?, channels.next()?));
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            return Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?));
        }
        named_color(&s.to_ascii_lowercase())
    }

    /// Hex digits without the leading `#`, as the writer expects them.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::rgb(0x00, 0x00, 0x00),
        "white" => Color::rgb(0xFF, 0xFF, 0xFF),
        "red" => Color::rgb(0xFF, 0x00, 0x00),
        "green" => Color::rgb(0x00, 0x80, 0x00),
        "blue" => Color::rgb(0x00, 0x00, 0xFF),
        "yellow" => Color::rgb(0xFF, 0xFF, 0x00),
        "orange" => Color::rgb(0xFF, 0xA5, 0x00),
        "purple" => Color::rgb(0x80, 0x00, 0x80),
        "gray" | "grey" => Color::rgb(0x80, 0x80, 0x80),
        "darkgray" | "darkgrey" => Color::rgb(0x40, 0x40, 0x40),
        "navy" => Color::rgb(0x00, 0x00, 0x80),
        "maroon" => Color::rgb(0x80, 0x00, 0x00),
        "teal" => Color::rgb(0x00, 0x80, 0x80),
        "olive" => Color::rgb(0x80, 0x80, 0x00),
        "silver" => Color::rgb(0xC0, 0xC0, 0xC0),
        _ => return None,
    };
    Some(color)
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| format!("`{}` is not a hex color or known color name", s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            "justify" => Ok(Alignment::Justify),
            other => Err(format!(
                "`{}` is not one of left, center, right, justify",
                other
            )),
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Portrait (default)
    #[default]
    Portrait,
    /// Landscape; page width and height are swapped when written
    Landscape,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(format!("`{}` is not one of portrait, landscape", other)),
        }
    }
}

/// Font formatting for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSpec {
    /// Font family name
    pub family: String,

    /// Font size in points
    pub size: f32,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Text color; `None` leaves the color automatic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl FontSpec {
    /// Create a regular font.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
            color: None,
        }
    }

    /// Make the font bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make the font italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Check field invariants, reporting paths under `path`.
    pub fn validate(&self, path: &str) -> Result<()> {
        if self.family.trim().is_empty() {
            return Err(Error::invalid_override(
                format!("{}.family", path),
                "must not be empty",
            ));
        }
        check_positive(&format!("{}.size", path), self.size)
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("SimSun", 12.0)
    }
}

/// Paragraph formatting for one role. Lengths are in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphSpec {
    /// Text alignment
    pub alignment: Alignment,

    /// Line spacing multiplier (1.0 = single)
    pub line_spacing: f32,

    /// Space before the paragraph
    pub space_before: f32,

    /// Space after the paragraph
    pub space_after: f32,

    /// First line indent
    pub indent_first_line: f32,

    /// Left indent
    pub indent_left: f32,

    /// Right indent
    pub indent_right: f32,
}

impl ParagraphSpec {
    /// Create a left-aligned, single-spaced paragraph spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set line spacing multiplier.
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set space before and after.
    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Set first line indent.
    pub fn with_first_line_indent(mut self, indent: f32) -> Self {
        self.indent_first_line = indent;
        self
    }

    /// Set left indent.
    pub fn with_left_indent(mut self, indent: f32) -> Self {
        self.indent_left = indent;
        self
    }

    /// Check field invariants, reporting paths under `path`.
    pub fn validate(&self, path: &str) -> Result<()> {
        check_positive(&format!("{}.line_spacing", path), self.line_spacing)?;
        check_non_negative(&format!("{}.space_before", path), self.space_before)?;
        check_non_negative(&format!("{}.space_after", path), self.space_after)?;
        check_non_negative(&format!("{}.indent_first_line", path), self.indent_first_line)?;
        check_non_negative(&format!("{}.indent_left", path), self.indent_left)?;
        check_non_negative(&format!("{}.indent_right", path), self.indent_right)
    }
}

impl Default for ParagraphSpec {
    fn default() -> Self {
        Self {
            alignment: Alignment::Left,
            line_spacing: 1.0,
            space_before: 0.0,
            space_after: 0.0,
            indent_first_line: 0.0,
            indent_left: 0.0,
            indent_right: 0.0,
        }
    }
}

/// Fully resolved style for one role.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementStyle {
    /// Run formatting
    pub font: FontSpec,

    /// Paragraph formatting
    pub paragraph: ParagraphSpec,
}

impl ElementStyle {
    /// Pair a font with paragraph formatting.
    pub fn new(font: FontSpec, paragraph: ParagraphSpec) -> Self {
        Self { font, paragraph }
    }

    /// Check field invariants, reporting paths under `path`.
    pub fn validate(&self, path: &str) -> Result<()> {
        self.font.validate(&format!("{}.font", path))?;
        self.paragraph.validate(&format!("{}.paragraph", path))
    }
}

/// Page size and margins, in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSpec {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Top margin
    pub margin_top: f32,
    /// Bottom margin
    pub margin_bottom: f32,
    /// Left margin
    pub margin_left: f32,
    /// Right margin
    pub margin_right: f32,
    /// Page orientation
    pub orientation: Orientation,
}

impl PageSpec {
    /// A4 portrait with 25mm margins.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_top: 25.0,
            margin_bottom: 25.0,
            margin_left: 25.0,
            margin_right: 25.0,
            orientation: Orientation::Portrait,
        }
    }

    /// Width and height as laid out, taking orientation into account.
    pub fn oriented_size(&self) -> (f32, f32) {
        let (short, long) = if self.width <= self.height {
            (self.width, self.height)
        } else {
            (self.height, self.width)
        };
        match self.orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }

    /// Check field invariants.
    pub fn validate(&self, path: &str) -> Result<()> {
        check_positive(&format!("{}.width", path), self.width)?;
        check_positive(&format!("{}.height", path), self.height)?;
        check_non_negative(&format!("{}.margin_top", path), self.margin_top)?;
        check_non_negative(&format!("{}.margin_bottom", path), self.margin_bottom)?;
        check_non_negative(&format!("{}.margin_left", path), self.margin_left)?;
        check_non_negative(&format!("{}.margin_right", path), self.margin_right)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::a4()
    }
}

/// Page header or footer text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderFooterSpec {
    /// Whether the header/footer is written at all
    pub enabled: bool,

    /// Text content
    pub content: String,

    /// Text alignment
    pub alignment: Alignment,

    /// Run formatting
    pub font: FontSpec,
}

impl HeaderFooterSpec {
    /// Whether there is anything to write.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.content.trim().is_empty()
    }

    /// Check field invariants.
    pub fn validate(&self, path: &str) -> Result<()> {
        self.font.validate(&format!("{}.font", path))
    }
}

impl Default for HeaderFooterSpec {
    fn default() -> Self {
        Self {
            enabled: false,
            content: String::new(),
            alignment: Alignment::Center,
            font: FontSpec::new("SimSun", 10.0),
        }
    }
}

/// A semantic role that every style set must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Document title
    Title,
    /// Heading at a level (1-based)
    Heading(u8),
    /// Body text
    Normal,
    /// Code block
    Code,
}

impl Role {
    /// Every role in style-set order.
    pub fn all() -> impl Iterator<Item = Role> {
        std::iter::once(Role::Title)
            .chain((1..=MAX_HEADING_LEVEL).map(Role::Heading))
            .chain([Role::Normal, Role::Code])
    }

    /// Key used for this role in style JSON.
    pub fn key(&self) -> String {
        match self {
            Role::Title => "title".to_string(),
            Role::Heading(level) => format!("heading_{}", level),
            Role::Normal => "normal".to_string(),
            Role::Code => "code".to_string(),
        }
    }

    /// Parse a role key. Accepts `heading_N` and `headingN`.
    pub fn from_key(key: &str) -> Option<Role> {
        match key {
            "title" => Some(Role::Title),
            "normal" => Some(Role::Normal),
            "code" => Some(Role::Code),
            _ => {
                let digits = key.strip_prefix("heading")?;
                let digits = digits.strip_prefix('_').unwrap_or(digits);
                match digits.as_bytes() {
                    [d @ b'1'..=b'6'] => Some(Role::Heading(d - b'0')),
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

/// Complete mapping from role to formatting, plus page layout.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSet {
    /// Document title style
    pub title: ElementStyle,

    /// Heading styles, index 0 is `heading_1`
    pub headings: [ElementStyle; MAX_HEADING_LEVEL as usize],

    /// Body text style
    pub normal: ElementStyle,

    /// Code block style
    pub code: ElementStyle,

    /// Page size and margins
    pub page: PageSpec,

    /// Page header
    pub header: HeaderFooterSpec,

    /// Page footer
    pub footer: HeaderFooterSpec,
}

impl StyleSet {
    /// Style for a role.
    pub fn get(&self, role: Role) -> Result<&ElementStyle> {
        match role {
            Role::Title => Ok(&self.title),
            Role::Heading(level) => self.heading(level).ok_or_else(|| {
                Error::StyleResolution(format!(
                    "no style for heading level {} (supported: 1-{})",
                    level, MAX_HEADING_LEVEL
                ))
            }),
            Role::Normal => Ok(&self.normal),
            Role::Code => Ok(&self.code),
        }
    }

    /// Mutable style for a role.
    pub fn get_mut(&mut self, role: Role) -> Result<&mut ElementStyle> {
        match role {
            Role::Title => Ok(&mut self.title),
            Role::Heading(level) => match level {
                1..=MAX_HEADING_LEVEL => Ok(&mut self.headings[level as usize - 1]),
                _ => Err(Error::StyleResolution(format!(
                    "no style for heading level {}",
                    level
                ))),
            },
            Role::Normal => Ok(&mut self.normal),
            Role::Code => Ok(&mut self.code),
        }
    }

    /// Heading style for a 1-based level.
    pub fn heading(&self, level: u8) -> Option<&ElementStyle> {
        match level {
            1..=MAX_HEADING_LEVEL => self.headings.get(level as usize - 1),
            _ => None,
        }
    }

    /// Iterate over all roles and their styles.
    pub fn roles(&self) -> impl Iterator<Item = (Role, &ElementStyle)> {
        Role::all().filter_map(move |role| self.get(role).ok().map(|style| (role, style)))
    }

    /// Check every field invariant.
    pub fn validate(&self) -> Result<()> {
        for (role, style) in self.roles() {
            style.validate(&role.key())?;
        }
        self.page.validate("page")?;
        self.header.validate("header")?;
        self.footer.validate("footer")
    }
}

impl Serialize for StyleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MAX_HEADING_LEVEL as usize + 6))?;
        for (role, style) in self.roles() {
            map.serialize_entry(&role.key(), style)?;
        }
        map.serialize_entry("page", &self.page)?;
        map.serialize_entry("header", &self.header)?;
        map.serialize_entry("footer", &self.footer)?;
        map.end()
    }
}

pub(crate) fn check_positive(path: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_override(
            path,
            format!("must be a number greater than 0, got {}", value),
        ))
    }
}

pub(crate) fn check_non_negative(path: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_override(
            path,
            format!("must be a non-negative number, got {}", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("#FF0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::parse("00ff80"), Some(Color::rgb(0, 255, 128)));
        assert_eq!(Color::parse("#fff"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(Color::parse("Navy"), Some(Color::rgb(0, 0, 128)));
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("chartreuse-ish"), None);
    }

    #[test]
    fn test_color_display() {
        let color = Color::rgb(0x1F, 0x4E, 0x79);
        assert_eq!(color.to_hex(), "1F4E79");
        assert_eq!(color.to_string(), "#1F4E79");
    }

    #[test]
    fn test_alignment_from_str() {
        assert_eq!("Justify".parse::<Alignment>(), Ok(Alignment::Justify));
        assert!("middle".parse::<Alignment>().is_err());
    }

    #[test]
    fn test_role_keys() {
        assert_eq!(Role::Heading(3).key(), "heading_3");
        assert_eq!(Role::from_key("heading_3"), Some(Role::Heading(3)));
        assert_eq!(Role::from_key("heading3"), Some(Role::Heading(3)));
        assert_eq!(Role::from_key("heading_7"), None);
        assert_eq!(Role::from_key("heading_0"), None);
        assert_eq!(Role::from_key("heading+2"), None);
        assert_eq!(Role::from_key("heading_02"), None);
        assert_eq!(Role::from_key("heading_+2"), None);
        assert_eq!(Role::from_key("heading"), None);
        assert_eq!(Role::from_key("caption"), None);
        assert_eq!(Role::all().count(), 9);
    }

    #[test]
    fn test_font_validate() {
        let font = FontSpec::new("Arial", 0.0);
        let err = font.validate("title.font").unwrap_err();
        assert_eq!(err.path(), Some("title.font.size"));

        assert!(FontSpec::new("Arial", 11.0).validate("normal.font").is_ok());
    }

    #[test]
    fn test_paragraph_validate() {
        let para = ParagraphSpec::new().with_line_spacing(-1.0);
        let err = para.validate("normal.paragraph").unwrap_err();
        assert_eq!(err.path(), Some("normal.paragraph.line_spacing"));

        let para = ParagraphSpec::new().with_spacing(-2.0, 0.0);
        let err = para.validate("code.paragraph").unwrap_err();
        assert_eq!(err.path(), Some("code.paragraph.space_before"));
    }

    #[test]
    fn test_page_oriented_size() {
        let mut page = PageSpec::a4();
        assert_eq!(page.oriented_size(), (210.0, 297.0));
        page.orientation = Orientation::Landscape;
        assert_eq!(page.oriented_size(), (297.0, 210.0));
    }

    #[test]
    fn test_header_footer_active() {
        let mut header = HeaderFooterSpec::default();
        assert!(!header.is_active());
        header.enabled = true;
        assert!(!header.is_active());
        header.content = "Draft".into();
        assert!(header.is_active());
    }
}
