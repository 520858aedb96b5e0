//! Sentences and documents.
use super::Token;

/// Comment prefixes that open a new document.
const BOUNDARY_PREFIXES: [&str; 2] = ["# doc_id = ", "# <doc "];

/// Returns `true` if the comment line marks the start of a document.
///
/// Two conventions are recognized: `# doc_id = ...` comments
/// and `# <doc ...>` crawl/wiki headers.
pub fn is_boundary(comment: &str) -> bool {
    BOUNDARY_PREFIXES
        .iter()
        .any(|prefix| comment.starts_with(prefix))
}

/// Raw comment lines followed by tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    comments: Vec<String>,
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(comments: Vec<String>, tokens: Vec<Token>) -> Self {
        Self { comments, tokens }
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.tokens.is_empty()
    }

    /// Append a comment after the existing ones.
    pub fn annotate(&mut self, comment: String) {
        self.comments.push(comment);
    }
}

/// Ordered sequence of sentences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentences_mut(&mut self) -> &mut [Sentence] {
        &mut self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// First document boundary comment of the first sentence, if any.
    pub fn boundary(&self) -> Option<&str> {
        self.sentences
            .first()?
            .comments()
            .iter()
            .find(|comment| is_boundary(comment))
            .map(String::as_str)
    }

    /// Iterate over all tokens of the document.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens().iter())
    }
}
