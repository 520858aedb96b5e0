/*! Language identification

Holds a [LangDetector] trait for implementing other detectors.

The current detector used is [fasttext](https://fasttext.cc) !*/
mod fasttext;
pub(crate) mod identifier;

pub use self::fasttext::FastText;
pub use identifier::LangDetector;
