//! Built-in style templates.
//!
//! Each template is a complete [`StyleSet`] derived from the default set by
//! replacing the roles the template cares about. Templates are built once
//! and shared read-only.

use crate::error::Error;
use crate::model::{Alignment, Color, ElementStyle, FontSpec, PageSpec, ParagraphSpec, StyleSet};
use once_cell::sync::Lazy;
use std::str::FromStr;

static DEFAULT: Lazy<StyleSet> = Lazy::new(build_default);
static ACADEMIC: Lazy<StyleSet> = Lazy::new(build_academic);
static BUSINESS: Lazy<StyleSet> = Lazy::new(build_business);
static TECHNICAL: Lazy<StyleSet> = Lazy::new(build_technical);

/// A named built-in style template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// The fallback style set used when no template is named
    Default,
    /// Academic paper: SimSun, centered title, indented body
    Academic,
    /// Business report: Microsoft YaHei, compact spacing
    Business,
    /// Technical document: Arial body, Consolas code, narrow margins
    Technical,
}

impl Template {
    /// Every built-in template.
    pub const ALL: [Template; 4] = [
        Template::Default,
        Template::Academic,
        Template::Business,
        Template::Technical,
    ];

    /// Canonical template name.
    pub fn name(&self) -> &'static str {
        match self {
            Template::Default => "default",
            Template::Academic => "academic",
            Template::Business => "business",
            Template::Technical => "technical",
        }
    }

    /// Alternative names accepted for this template.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Template::Default => &[],
            Template::Academic => &["学术论文"],
            Template::Business => &["商务报告"],
            Template::Technical => &["技术文档"],
        }
    }

    /// Short description.
    pub fn description(&self) -> &'static str {
        match self {
            Template::Default => "SimSun body text, Consolas code, A4 with 25mm margins",
            Template::Academic => "Academic paper with centered title and indented body",
            Template::Business => "Business report in Microsoft YaHei",
            Template::Technical => "Technical document in Arial with compact code blocks",
        }
    }

    /// Look up a template by name or alias, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Template> {
        let name = name.trim();
        Template::ALL.into_iter().find(|template| {
            template.name().eq_ignore_ascii_case(name) || template.aliases().contains(&name)
        })
    }

    /// The template's style set.
    pub fn style_set(&self) -> &'static StyleSet {
        match self {
            Template::Default => &*DEFAULT,
            Template::Academic => &*ACADEMIC,
            Template::Business => &*BUSINESS,
            Template::Technical => &*TECHNICAL,
        }
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::from_name(s).ok_or_else(|| Error::UnknownTemplate(s.to_string()))
    }
}

/// A copy of the default style set.
pub fn default_style_set() -> StyleSet {
    DEFAULT.clone()
}

fn role(font: FontSpec, paragraph: ParagraphSpec) -> ElementStyle {
    ElementStyle::new(font.with_color(Color::BLACK), paragraph)
}

fn heading(family: &str, size: f32, before: f32, after: f32) -> ElementStyle {
    role(
        FontSpec::new(family, size).bold(),
        ParagraphSpec::new()
            .with_line_spacing(1.5)
            .with_spacing(before, after),
    )
}

fn set_heading_family(styles: &mut StyleSet, family: &str) {
    for style in styles.headings.iter_mut() {
        style.font.family = family.to_string();
    }
}

fn build_default() -> StyleSet {
    const BODY: &str = "SimSun";

    let mut h5 = heading(BODY, 12.0, 6.0, 3.0);
    h5.font.italic = true;
    let mut h6 = heading(BODY, 12.0, 6.0, 3.0);
    h6.font.bold = false;
    h6.font.italic = true;

    StyleSet {
        title: role(
            FontSpec::new(BODY, 16.0).bold(),
            ParagraphSpec::new()
                .aligned(Alignment::Center)
                .with_line_spacing(1.5)
                .with_spacing(0.0, 18.0),
        ),
        headings: [
            heading(BODY, 14.0, 12.0, 6.0),
            heading(BODY, 13.0, 10.0, 5.0),
            heading(BODY, 12.0, 8.0, 4.0),
            heading(BODY, 12.0, 6.0, 3.0),
            h5,
            h6,
        ],
        normal: role(
            FontSpec::new(BODY, 12.0),
            ParagraphSpec::new()
                .with_line_spacing(1.5)
                .with_first_line_indent(24.0),
        ),
        code: role(
            FontSpec::new("Consolas", 10.0),
            ParagraphSpec::new()
                .with_line_spacing(1.0)
                .with_spacing(6.0, 6.0)
                .with_left_indent(15.0),
        ),
        page: PageSpec::a4(),
        header: Default::default(),
        footer: Default::default(),
    }
}

fn build_academic() -> StyleSet {
    let mut styles = build_default();
    styles.title = role(
        FontSpec::new("SimSun", 16.0).bold(),
        ParagraphSpec::new()
            .aligned(Alignment::Center)
            .with_line_spacing(1.5)
            .with_spacing(0.0, 18.0),
    );
    styles.headings[0] = heading("SimSun", 14.0, 12.0, 6.0);
    styles.normal = role(
        FontSpec::new("SimSun", 12.0),
        ParagraphSpec::new()
            .aligned(Alignment::Justify)
            .with_line_spacing(1.5)
            .with_first_line_indent(24.0),
    );
    styles.page.margin_top = 30.0;
    styles.page.margin_left = 30.0;
    styles
}

fn build_business() -> StyleSet {
    const FAMILY: &str = "Microsoft YaHei";

    let mut styles = build_default();
    styles.title = role(
        FontSpec::new(FAMILY, 18.0).bold(),
        ParagraphSpec::new()
            .aligned(Alignment::Center)
            .with_line_spacing(1.5)
            .with_spacing(0.0, 15.0),
    );
    set_heading_family(&mut styles, FAMILY);
    styles.headings[0] = heading(FAMILY, 14.0, 10.0, 5.0);
    styles.normal = role(
        FontSpec::new(FAMILY, 11.0),
        ParagraphSpec::new().with_line_spacing(1.3),
    );
    styles
}

fn build_technical() -> StyleSet {
    const FAMILY: &str = "Arial";

    let mut styles = build_default();
    styles.title = role(
        FontSpec::new(FAMILY, 16.0).bold(),
        ParagraphSpec::new()
            .with_line_spacing(1.5)
            .with_spacing(0.0, 12.0),
    );
    set_heading_family(&mut styles, FAMILY);
    styles.headings[0] = heading(FAMILY, 14.0, 8.0, 4.0);
    styles.normal = role(
        FontSpec::new(FAMILY, 10.0),
        ParagraphSpec::new().with_line_spacing(1.2),
    );
    styles.code = role(
        FontSpec::new("Consolas", 9.0),
        ParagraphSpec::new().with_left_indent(15.0),
    );
    styles.page.margin_top = 20.0;
    styles.page.margin_bottom = 20.0;
    styles.page.margin_left = 20.0;
    styles.page.margin_right = 20.0;
    styles
}
