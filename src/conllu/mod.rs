/*! CoNLL-U data model

A corpus is a stream of [Document]s, each holding [Sentence]s made of raw comment lines and [Token]s.

See <https://universaldependencies.org/format.html> for the token schema.
!*/
mod sentence;
pub mod text;
mod token;

pub use sentence::{is_boundary, Document, Sentence};
pub use text::TextMode;
pub use token::Token;
