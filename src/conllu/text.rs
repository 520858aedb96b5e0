/*! Text extraction

Sentence text is either read from the `# text = ` metadata comment ([TextMode::Raw])
or rebuilt from token forms ([TextMode::Tokenized]).
!*/
use itertools::Itertools;

use super::{Document, Sentence};
use crate::error::Error;

pub const TEXT_COMMENT: &str = "# text = ";

/// Comments holding filtering/classification results.
pub const LABEL_COMMENTS: [&str; 5] = [
    "# filter_result =",
    "# sentfilter_result =",
    "# predicted_class =",
    "# predicted_value =",
    "# sentfilter =",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Raw,
    Tokenized,
}

impl TextMode {
    pub fn from_tokenized(tokenized: bool) -> Self {
        if tokenized {
            TextMode::Tokenized
        } else {
            TextMode::Raw
        }
    }
}

impl Default for TextMode {
    fn default() -> Self {
        TextMode::Raw
    }
}

/// Get the text of a sentence.
///
/// # Errors
/// In [TextMode::Raw], returns [Error::AmbiguousText] if there is not exactly one text comment.
pub fn sentence_text(sentence: &Sentence, mode: TextMode) -> Result<String, Error> {
    match mode {
        TextMode::Tokenized => Ok(sentence.tokens().iter().map(|t| t.form()).join(" ")),
        TextMode::Raw => {
            let mut texts = sentence
                .comments()
                .iter()
                .filter_map(|c| c.strip_prefix(TEXT_COMMENT));
            match (texts.next(), texts.next()) {
                (Some(text), None) => Ok(text.to_string()),
                (None, _) => Err(Error::AmbiguousText(0)),
                (Some(_), Some(_)) => Err(Error::AmbiguousText(2 + texts.count())),
            }
        }
    }
}

/// Get the text of each sentence of the document.
pub fn sentence_texts(document: &Document, mode: TextMode) -> Result<Vec<String>, Error> {
    document
        .sentences()
        .iter()
        .map(|s| sentence_text(s, mode))
        .collect()
}

/// Get the text of the whole document.
///
/// Sentences are newline-separated in raw mode and space-separated in tokenized mode.
pub fn document_text(document: &Document, mode: TextMode) -> Result<String, Error> {
    let sep = match mode {
        TextMode::Raw => "\n",
        TextMode::Tokenized => " ",
    };
    Ok(sentence_texts(document, mode)?.join(sep))
}

/// Comments of the sentence that hold a filter or classifier result.
pub fn label_comments(sentence: &Sentence) -> impl Iterator<Item = &String> {
    sentence
        .comments()
        .iter()
        .filter(|c| LABEL_COMMENTS.iter().any(|prefix| c.starts_with(prefix)))
}
