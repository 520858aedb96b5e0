//! Text-level filtering.
//!
//! [TextFilter] measures a group of sentence texts (a whole document, or a single sentence)
//! and checks every enabled criterion in [Criterion::TEXT] order, stopping at the first failure.
use std::slice;

use log::debug;

use super::criteria::{Criterion, Thresholds, Verdict};
use super::lexicon::{Lexicon, FINNISH, FINNISH_SENTENCES};
use super::measures;
use super::Filter;
use crate::error::Error;
use crate::identifiers::LangDetector;

pub struct TextFilter {
    thresholds: Thresholds,
    lexicon: &'static Lexicon,
    detector: Option<Box<dyn LangDetector>>,
}

impl TextFilter {
    /// Create a new text filter for Finnish.
    ///
    /// # Errors
    /// Returns an error if language detection is enabled without a detector.
    pub fn new(
        thresholds: Thresholds,
        detector: Option<Box<dyn LangDetector>>,
    ) -> Result<Self, Error> {
        Self::with_lexicon(thresholds, &FINNISH, detector)
    }

    /// Create a new text filter for single Finnish sentences,
    /// where short capitalized words ("Se", "On") are counted as words.
    pub fn for_sentences(
        thresholds: Thresholds,
        detector: Option<Box<dyn LangDetector>>,
    ) -> Result<Self, Error> {
        Self::with_lexicon(thresholds, &FINNISH_SENTENCES, detector)
    }

    pub fn with_lexicon(
        thresholds: Thresholds,
        lexicon: &'static Lexicon,
        detector: Option<Box<dyn LangDetector>>,
    ) -> Result<Self, Error> {
        if thresholds.langdetect && detector.is_none() {
            return Err(Error::Custom(
                "language detection enabled without a language detector".to_string(),
            ));
        }
        Ok(Self {
            thresholds,
            lexicon,
            detector,
        })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// `measure < min`, undefined measures being decided by the empty policy.
    fn below(&self, measure: Option<f64>, min: f64) -> bool {
        measure.map_or(self.thresholds.on_empty.rejects(), |m| m < min)
    }

    /// `measure > max`, undefined measures being decided by the empty policy.
    fn above(&self, measure: Option<f64>, max: f64) -> bool {
        measure.map_or(self.thresholds.on_empty.rejects(), |m| m > max)
    }

    fn is_target_lang<S: AsRef<str>>(&self, sentences: &[S]) -> bool {
        let text = sentences
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        let detected = self.detector.as_ref().and_then(|d| d.detect(&text));
        debug!("detected language: {:?}", detected);
        detected.as_deref() == Some(self.lexicon.lang())
    }

    /// Check a single criterion.
    ///
    /// Returns [None] if the criterion is disabled, `Some(true)` if it fails.
    fn fails<S: AsRef<str>>(&self, criterion: Criterion, sentences: &[S]) -> Option<bool> {
        let t = &self.thresholds;
        let lex = self.lexicon;
        match criterion {
            Criterion::AvgLen => t
                .avg_len
                .map(|min| self.below(measures::avg_len(lex, sentences), min)),
            Criterion::MinSents => t.min_sents.map(|min| sentences.len() < min),
            Criterion::MaxSents => t.max_sents.map(|max| sentences.len() > max),
            Criterion::MinToks => t.min_toks.map(|min| measures::num_toks(sentences) < min),
            Criterion::MaxToks => t.max_toks.map(|max| measures::num_toks(sentences) > max),
            Criterion::NoWordRatio => t
                .no_word_ratio
                .map(|max| self.above(measures::no_word_ratio(lex, sentences), max)),
            Criterion::PunctRatio => t
                .punct_ratio
                .map(|max| self.above(measures::punct_ratio(sentences), max)),
            Criterion::UpperRatio => t
                .upper_ratio
                .map(|max| self.above(measures::upper_ratio(sentences), max)),
            Criterion::DigitRatio => t
                .digit_ratio
                .map(|max| self.above(measures::digit_ratio(sentences), max)),
            Criterion::ForeignRatio => t
                .foreign_ratio
                .map(|max| self.above(measures::foreign_ratio(lex, sentences), max)),
            Criterion::MinWords => t
                .min_words
                .map(|min| measures::num_words(lex, sentences) < min),
            Criterion::MaxWords => t
                .max_words
                .map(|max| measures::num_words(lex, sentences) > max),
            Criterion::FrequentRatio => t
                .frequent_ratio
                .map(|min| self.below(measures::frequent_ratio(lex, sentences), min)),
            Criterion::LangDetect => {
                if t.langdetect {
                    Some(!self.is_target_lang(sentences))
                } else {
                    None
                }
            }
            // parse criteria are not computed on text
            Criterion::MinNouns | Criterion::MinVerbs => None,
        }
    }
}

impl<'a, S: AsRef<str>> Filter<&'a [S]> for TextFilter {
    fn detect(&self, sentences: &'a [S]) -> Verdict {
        Criterion::TEXT
            .iter()
            .find(|criterion| self.fails(**criterion, sentences) == Some(true))
            .map_or(Verdict::Pass, |criterion| Verdict::Fail(*criterion))
    }
}

impl<'a> Filter<&'a str> for TextFilter {
    fn detect(&self, sentence: &'a str) -> Verdict {
        self.detect(slice::from_ref(&sentence))
    }
}
