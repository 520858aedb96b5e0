/*! Corpus reading utilities

Documents are read lazily, one at a time, from any [std::io::BufRead] or from a (gzipped) file.
!*/
mod docreader;

pub use docreader::{DocReader, FileDocReader};
