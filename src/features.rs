//! Delexicalized document features.
//!
//! Aggregate statistics over the annotations of a document (sentence lengths,
//! tag and relation frequencies, token shapes) that do not depend on the words themselves.
use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::conllu::Document;

lazy_static! {
    // plain http only, so that feature vectors stay comparable with existing ones
    static ref URL_RE: Regex = Regex::new(r"^s?http://").unwrap();
    // "<html", "</html", "[bold", ...
    static ref TAG_RE: Regex = Regex::new(r"^[<\[]/?[a-z]+").unwrap();
    static ref WORD_RE: Regex = Regex::new(r"^[a-zA-ZäöÄÖ-]+$").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"^-?[0-9][0-9,. -]*$").unwrap();
    // "1200-luku"
    static ref WORDNUM_RE: Regex = Regex::new(r"^[a-zA-ZäöÄ0-9-][a-zA-ZäöÄÖ0-9,.-]*$").unwrap();
    static ref PUNCT_RE: Regex = Regex::new(r"^[.,:;()\[\]%]+$").unwrap();
}

/// Shape of a token form. First matching shape wins, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Url,
    Tag,
    Word,
    Number,
    WordNum,
    Punct,
    Other,
}

impl Shape {
    pub fn of(form: &str) -> Self {
        if URL_RE.is_match(form) {
            Shape::Url
        } else if TAG_RE.is_match(form) {
            Shape::Tag
        } else if WORD_RE.is_match(form) {
            Shape::Word
        } else if NUMBER_RE.is_match(form) {
            Shape::Number
        } else if WORDNUM_RE.is_match(form) {
            Shape::WordNum
        } else if PUNCT_RE.is_match(form) {
            Shape::Punct
        } else {
            Shape::Other
        }
    }
}

/// Serialized with sorted, kebab-case keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Features {
    dep_count: BTreeMap<String, usize>,
    number_count: usize,
    other_count: usize,
    punct_count: usize,
    /// sentence length (in tokens) histogram
    sent_len: BTreeMap<usize, usize>,
    sent_num: usize,
    tag_count: usize,
    token_count: usize,
    upos_count: BTreeMap<String, usize>,
    url_count: usize,
    word_count: usize,
    /// form length (in chars) histogram
    word_len: BTreeMap<usize, usize>,
    wordnum_count: usize,
}

impl Features {
    pub fn sent_num(&self) -> usize {
        self.sent_num
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn upos_count(&self) -> &BTreeMap<String, usize> {
        &self.upos_count
    }

    pub fn dep_count(&self) -> &BTreeMap<String, usize> {
        &self.dep_count
    }

    pub fn sent_len(&self) -> &BTreeMap<usize, usize> {
        &self.sent_len
    }

    pub fn word_len(&self) -> &BTreeMap<usize, usize> {
        &self.word_len
    }

    pub fn shape_count(&self, shape: Shape) -> usize {
        match shape {
            Shape::Url => self.url_count,
            Shape::Tag => self.tag_count,
            Shape::Word => self.word_count,
            Shape::Number => self.number_count,
            Shape::WordNum => self.wordnum_count,
            Shape::Punct => self.punct_count,
            Shape::Other => self.other_count,
        }
    }

    fn shape_count_mut(&mut self, shape: Shape) -> &mut usize {
        match shape {
            Shape::Url => &mut self.url_count,
            Shape::Tag => &mut self.tag_count,
            Shape::Word => &mut self.word_count,
            Shape::Number => &mut self.number_count,
            Shape::WordNum => &mut self.wordnum_count,
            Shape::Punct => &mut self.punct_count,
            Shape::Other => &mut self.other_count,
        }
    }
}

impl From<&Document> for Features {
    fn from(doc: &Document) -> Self {
        let mut f = Features {
            sent_num: doc.len(),
            ..Default::default()
        };
        for sentence in doc.sentences() {
            *f.sent_len.entry(sentence.tokens().len()).or_insert(0) += 1;
            for token in sentence.tokens() {
                f.token_count += 1;
                *f.word_len.entry(token.form().chars().count()).or_insert(0) += 1;
                *f.upos_count.entry(token.upos().to_string()).or_insert(0) += 1;
                *f.dep_count.entry(token.deprel().to_string()).or_insert(0) += 1;
                *f.shape_count_mut(Shape::of(token.form())) += 1;
            }
        }
        f
    }
}
