//! CoNLL-U document writing.
mod docwriter;

pub use docwriter::DocWriter;
