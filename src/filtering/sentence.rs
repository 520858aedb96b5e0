//! Sentence-level filtering.
//!
//! Each sentence of a document is checked on its text, then on its parse,
//! and annotated with its verdict (`# sentfilter = ...`).
//! The document is then kept or rejected according to its ratio of rejected sentences ([RejectRatio]).
use super::criteria::{EmptyPolicy, Thresholds, Verdict};
use super::parse::ParseFilter;
use super::text::TextFilter;
use super::Filter;
use crate::conllu::Token;
use crate::error::Error;
use crate::identifiers::LangDetector;

pub const SENTFILTER_COMMENT: &str = "# sentfilter = ";
pub const SENTFILTER_RESULT_COMMENT: &str = "# sentfilter_result = ";

/// Verdict of a single sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceVerdict {
    Pass,
    RejectText(Verdict),
    RejectParse(Verdict),
}

impl SentenceVerdict {
    pub fn passed(&self) -> bool {
        matches!(self, SentenceVerdict::Pass)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentenceVerdict::Pass => "pass",
            SentenceVerdict::RejectText(_) => "reject-text",
            SentenceVerdict::RejectParse(_) => "reject-parse",
        }
    }

    /// `# sentfilter = <label>` comment.
    pub fn comment(&self) -> String {
        format!("{}{}", SENTFILTER_COMMENT, self.label())
    }
}

/// Text filter followed by parse filter.
pub struct SentenceFilter {
    text: TextFilter,
    /// absent when no parse criterion is set
    parse: Option<ParseFilter>,
}

impl SentenceFilter {
    /// Create a sentence filter, measuring text with the sentence-level lexicon.
    ///
    /// # Errors
    /// Returns an error if language detection is enabled without a detector.
    pub fn new(
        thresholds: Thresholds,
        detector: Option<Box<dyn LangDetector>>,
    ) -> Result<Self, Error> {
        let parse = if thresholds.has_parse_criteria() {
            Some(ParseFilter::from(&thresholds))
        } else {
            None
        };
        Ok(Self {
            text: TextFilter::for_sentences(thresholds, detector)?,
            parse,
        })
    }

    pub fn has_parse_filter(&self) -> bool {
        self.parse.is_some()
    }

    /// Check a sentence, given its text and tokens.
    pub fn check(&self, text: &str, tokens: &[Token]) -> SentenceVerdict {
        let verdict = self.text.detect(text);
        if !verdict.passed() {
            return SentenceVerdict::RejectText(verdict);
        }
        if let Some(parse) = &self.parse {
            let verdict = parse.detect(tokens);
            if !verdict.passed() {
                return SentenceVerdict::RejectParse(verdict);
            }
        }
        SentenceVerdict::Pass
    }
}

/// Document-level aggregate of sentence verdicts.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectRatio {
    /// maximum (exclusive) ratio of rejected sentences
    max_ratio: f64,
    /// maximum (exclusive) number of rejected sentences
    max_reject: Option<usize>,
    on_empty: EmptyPolicy,
}

impl RejectRatio {
    pub fn new(max_ratio: f64, max_reject: Option<usize>, on_empty: EmptyPolicy) -> Self {
        Self {
            max_ratio,
            max_reject,
            on_empty,
        }
    }

    pub fn from_thresholds(max_ratio: f64, max_reject: Option<usize>, t: &Thresholds) -> Self {
        Self::new(max_ratio, max_reject, t.on_empty)
    }

    /// Decide on a document with `rejected` out of `total` sentences rejected.
    pub fn decide(&self, rejected: usize, total: usize) -> RatioDecision {
        let passed = if total == 0 {
            !self.on_empty.rejects()
        } else {
            let ratio = rejected as f64 / total as f64;
            ratio < self.max_ratio && self.max_reject.map_or(true, |max| rejected < max)
        };
        RatioDecision {
            passed,
            rejected,
            total,
        }
    }
}

impl Default for RejectRatio {
    /// Documents pass with strictly less than half of their sentences rejected.
    fn default() -> Self {
        Self::new(0.5, None, EmptyPolicy::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioDecision {
    passed: bool,
    rejected: usize,
    total: usize,
}

impl RatioDecision {
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn label(&self) -> &'static str {
        if self.passed {
            "pass"
        } else {
            "fail"
        }
    }

    /// `# sentfilter_result = <pass|fail> (<rejected>/<total> = <pct>%)` comment.
    pub fn comment(&self) -> String {
        let pct = if self.total == 0 {
            0.0
        } else {
            100.0 * self.rejected as f64 / self.total as f64
        };
        format!(
            "{}{} ({}/{} = {:.1}%)",
            SENTFILTER_RESULT_COMMENT,
            self.label(),
            self.rejected,
            self.total,
            pct
        )
    }
}
