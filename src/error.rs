//! Error types for mdocx library.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for mdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage in which a conversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reading and tokenizing the input text
    Parse,
    /// Turning the parse tree into semantic blocks
    Classify,
    /// Looking up the template and merging custom styles
    ResolveStyle,
    /// Emitting styled elements into the writer
    Assemble,
    /// Packing the finished document into bytes
    Serialize,
}

impl Stage {
    /// Stage name as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Parse => "parse",
            Stage::Classify => "classify",
            Stage::ResolveStyle => "resolve-style",
            Stage::Assemble => "assemble",
            Stage::Serialize => "serialize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types that can occur during conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested style template is not in the catalog.
    #[error("Unknown style template: {0}")]
    UnknownTemplate(String),

    /// A custom style field is malformed or out of range.
    #[error("Invalid style override at `{path}`: {reason}")]
    InvalidStyleOverride {
        /// Dotted path of the offending field (e.g. `title.font.size`)
        path: String,
        /// What is wrong with it
        reason: String,
    },

    /// The input could not be read as Markdown.
    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// A block referenced a role the style set cannot supply.
    #[error("Style resolution error: {0}")]
    StyleResolution(String),

    /// The document writer rejected an operation.
    #[error("Writer failure: {0}")]
    WriterFailure(String),

    /// No converter is registered for the given extension or name.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// An error tagged with the stage it occurred in.
    #[error("{stage} stage failed: {source}")]
    Stage {
        /// Stage that failed
        stage: Stage,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Build an `InvalidStyleOverride` error.
    pub fn invalid_override(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidStyleOverride {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Tag this error with a pipeline stage. Already tagged errors keep their stage.
    pub fn at(self, stage: Stage) -> Self {
        match self {
            Error::Stage { .. } => self,
            other => Error::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }

    /// The stage this error was tagged with, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The underlying error, with any stage tag removed.
    pub fn root(&self) -> &Error {
        match self {
            Error::Stage { source, .. } => source.root(),
            other => other,
        }
    }

    /// The offending field path for style override errors.
    pub fn path(&self) -> Option<&str> {
        match self.root() {
            Error::InvalidStyleOverride { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Extension for tagging results with a stage.
pub(crate) trait StageExt<T> {
    fn at_stage(self, stage: Stage) -> Result<T>;
}

impl<T> StageExt<T> for Result<T> {
    fn at_stage(self, stage: Stage) -> Result<T> {
        self.map_err(|e| e.at(stage))
    }
}
