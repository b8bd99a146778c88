//! Input parsing and block classification.

mod classify;
pub mod markdown;
mod options;
pub mod text;
mod tree;

pub use classify::{classify, ClassifyReport, Classifier};
pub use options::{ClassifyOptions, InputFormat};
pub use tree::{DocumentTree, Node, NodeKind};

/// Parse input of the given format into a block tree.
pub fn parse(input: &str, format: InputFormat) -> DocumentTree {
    match format {
        InputFormat::Markdown => markdown::parse(input),
        InputFormat::PlainText => text::parse(input),
    }
}
