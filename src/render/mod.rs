//! Document assembly and output writers.

mod assembler;
mod docx;
mod recorder;
mod stats;
mod writer;

pub use assembler::Assembler;
pub use docx::{DocxWriter, DOCX_MIME_TYPE};
pub use recorder::ElementRecorder;
pub use stats::AssemblyStats;
pub use writer::{DocumentWriter, StyledParagraph};
