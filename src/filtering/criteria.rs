//! Filter criteria, thresholds and verdicts.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Filtering criteria, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    AvgLen,
    MinSents,
    MaxSents,
    MinToks,
    MaxToks,
    NoWordRatio,
    PunctRatio,
    UpperRatio,
    DigitRatio,
    ForeignRatio,
    MinWords,
    MaxWords,
    FrequentRatio,
    LangDetect,
    MinNouns,
    MinVerbs,
}

impl Criterion {
    /// Criteria computed on text.
    pub const TEXT: [Criterion; 14] = [
        Criterion::AvgLen,
        Criterion::MinSents,
        Criterion::MaxSents,
        Criterion::MinToks,
        Criterion::MaxToks,
        Criterion::NoWordRatio,
        Criterion::PunctRatio,
        Criterion::UpperRatio,
        Criterion::DigitRatio,
        Criterion::ForeignRatio,
        Criterion::MinWords,
        Criterion::MaxWords,
        Criterion::FrequentRatio,
        Criterion::LangDetect,
    ];

    /// Criteria computed on token annotations.
    pub const PARSE: [Criterion; 2] = [Criterion::MinNouns, Criterion::MinVerbs];

    pub fn name(&self) -> &'static str {
        match self {
            Criterion::AvgLen => "avg-len",
            Criterion::MinSents => "min-sents",
            Criterion::MaxSents => "max-sents",
            Criterion::MinToks => "min-toks",
            Criterion::MaxToks => "max-toks",
            Criterion::NoWordRatio => "no-word-ratio",
            Criterion::PunctRatio => "punct-ratio",
            Criterion::UpperRatio => "upper-ratio",
            Criterion::DigitRatio => "digit-ratio",
            Criterion::ForeignRatio => "foreign-ratio",
            Criterion::MinWords => "min-words",
            Criterion::MaxWords => "max-words",
            Criterion::FrequentRatio => "frequent-ratio",
            Criterion::LangDetect => "langdetect",
            Criterion::MinNouns => "min-nouns",
            Criterion::MinVerbs => "min-verbs",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do with a ratio criterion whose denominator is zero
/// (no sentence, no character or no word to measure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// the criterion is considered satisfied
    Pass,
    /// the criterion fails
    Reject,
}

impl EmptyPolicy {
    pub fn rejects(&self) -> bool {
        matches!(self, EmptyPolicy::Reject)
    }
}

impl Default for EmptyPolicy {
    fn default() -> Self {
        EmptyPolicy::Pass
    }
}

impl FromStr for EmptyPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(EmptyPolicy::Pass),
            "reject" => Ok(EmptyPolicy::Reject),
            other => Err(Error::Custom(format!(
                "invalid empty policy {:?} (expected pass or reject)",
                other
            ))),
        }
    }
}

/// Thresholds of each criterion. `None` disables the criterion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Thresholds {
    /// minimum average number of words per sentence
    pub avg_len: Option<f64>,
    pub min_sents: Option<usize>,
    pub max_sents: Option<usize>,
    pub min_toks: Option<usize>,
    pub max_toks: Option<usize>,
    /// maximum ratio of sentences without words
    pub no_word_ratio: Option<f64>,
    pub punct_ratio: Option<f64>,
    pub upper_ratio: Option<f64>,
    pub digit_ratio: Option<f64>,
    /// maximum ratio of letters outside the target alphabet
    pub foreign_ratio: Option<f64>,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
    /// minimum ratio of frequent words
    pub frequent_ratio: Option<f64>,
    pub langdetect: bool,
    pub min_nouns: Option<usize>,
    pub min_verbs: Option<usize>,
    pub on_empty: EmptyPolicy,
}

impl Thresholds {
    /// Returns `true` if at least one parse criterion is enabled.
    pub fn has_parse_criteria(&self) -> bool {
        self.min_nouns.is_some() || self.min_verbs.is_some()
    }
}

/// Outcome of a filter: pass, or the first failing criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(Criterion),
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn criterion(&self) -> Option<Criterion> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(c) => Some(*c),
        }
    }

    /// `pass-all` or `fail-<criterion>`.
    pub fn label(&self) -> String {
        match self {
            Verdict::Pass => "pass-all".to_string(),
            Verdict::Fail(c) => format!("fail-{}", c),
        }
    }
}

/// Whether to keep an item given its verdict.
///
/// `invert` keeps rejected items instead of accepted ones.
pub fn keep(verdict: &Verdict, invert: bool) -> bool {
    verdict.passed() != invert
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Verdict::Pass.label(), "pass-all");
        assert_eq!(
            Verdict::Fail(Criterion::UpperRatio).label(),
            "fail-upper-ratio"
        );
        assert_eq!(Verdict::Fail(Criterion::LangDetect).label(), "fail-langdetect");
    }

    #[test]
    fn test_order() {
        // text criteria and parse criteria cover every criterion, in declaration order
        let all: Vec<Criterion> = Criterion::TEXT
            .iter()
            .chain(Criterion::PARSE.iter())
            .copied()
            .collect();
        assert_eq!(all.len(), 16);
        assert_eq!(all.first(), Some(&Criterion::AvgLen));
        assert_eq!(all.last(), Some(&Criterion::MinVerbs));
    }

    #[test]
    fn test_keep() {
        let fail = Verdict::Fail(Criterion::MinToks);
        assert!(keep(&Verdict::Pass, false));
        assert!(!keep(&Verdict::Pass, true));
        assert!(!keep(&fail, false));
        assert!(keep(&fail, true));
        // inverting does not change the reported criterion
        assert_eq!(fail.criterion(), Some(Criterion::MinToks));
    }

    #[test]
    fn test_empty_policy() {
        assert_eq!("pass".parse::<EmptyPolicy>().unwrap(), EmptyPolicy::Pass);
        assert!("reject".parse::<EmptyPolicy>().unwrap().rejects());
        assert!("maybe".parse::<EmptyPolicy>().is_err());
    }
}
