//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Token line without exactly 10 tab-separated fields (holds the field count).
    MalformedToken(usize),
    /// Sentence without exactly one `# text = ` comment (holds the number found).
    AmbiguousText(usize),
    FastText(String),
    Serde(serde_json::Error),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::MalformedToken(n) => write!(f, "malformed token line: {} fields, expected 10", n),
            Error::AmbiguousText(n) => write!(f, "{} text lines", n),
            Error::FastText(e) => write!(f, "fasttext error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Custom(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
