//! Document model types for styled conversion.
//!
//! This module defines the typed style model (fonts, paragraph formatting,
//! the per-role style set) and the semantic block sequence that bridges
//! Markdown classification and document assembly.

mod block;
mod style;

pub use block::{BlockKind, SemanticBlock};
pub(crate) use style::{check_non_negative, check_positive};
pub use style::{
    Alignment, Color, ElementStyle, FontSpec, HeaderFooterSpec, Orientation, PageSpec,
    ParagraphSpec, Role, StyleSet, MAX_HEADING_LEVEL,
};
