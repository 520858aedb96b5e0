//! Parse-aware filtering, on part-of-speech tags.
use super::criteria::{Criterion, Thresholds, Verdict};
use super::Filter;
use crate::conllu::Token;

const NOUN_UPOS: [&str; 2] = ["NOUN", "PROPN"];
const VERB_UPOS: [&str; 2] = ["VERB", "AUX"];

/// Number of tokens whose UPOS is in `upos`.
pub fn upos_count(tokens: &[Token], upos: &[&str]) -> usize {
    tokens.iter().filter(|t| upos.contains(&t.upos())).count()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseFilter {
    min_nouns: Option<usize>,
    min_verbs: Option<usize>,
}

impl ParseFilter {
    pub fn new(min_nouns: Option<usize>, min_verbs: Option<usize>) -> Self {
        Self {
            min_nouns,
            min_verbs,
        }
    }
}

impl From<&Thresholds> for ParseFilter {
    fn from(t: &Thresholds) -> Self {
        Self::new(t.min_nouns, t.min_verbs)
    }
}

impl<'a> Filter<&'a [Token]> for ParseFilter {
    fn detect(&self, tokens: &'a [Token]) -> Verdict {
        if let Some(min) = self.min_nouns {
            if upos_count(tokens, &NOUN_UPOS) < min {
                return Verdict::Fail(Criterion::MinNouns);
            }
        }
        if let Some(min) = self.min_verbs {
            if upos_count(tokens, &VERB_UPOS) < min {
                return Verdict::Fail(Criterion::MinVerbs);
            }
        }
        Verdict::Pass
    }
}
