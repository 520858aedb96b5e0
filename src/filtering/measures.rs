/*! Text measures

Measures operate on a group of sentence texts: all sentences of a document,
or a single sentence for sentence-level filtering.

Ratios return [None] when their denominator is zero (no characters, words or sentences).
!*/
use unic_ucd::GeneralCategory;

use super::lexicon::Lexicon;

fn ratio(count: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(count as f64 / total as f64)
    }
}

/// Number of unicode codepoints.
pub fn char_count<S: AsRef<str>>(sentences: &[S]) -> usize {
    sentences.iter().map(|s| s.as_ref().chars().count()).sum()
}

/// Ratio of characters matching `pred` over all characters.
fn char_ratio<S, F>(sentences: &[S], pred: F) -> Option<f64>
where
    S: AsRef<str>,
    F: Fn(char) -> bool,
{
    let (matching, total) = sentences
        .iter()
        .flat_map(|s| s.as_ref().chars())
        .fold((0, 0), |(matching, total), c| {
            (matching + usize::from(pred(c)), total + 1)
        });
    ratio(matching, total)
}

/// Number of whitespace-separated tokens.
pub fn num_toks<S: AsRef<str>>(sentences: &[S]) -> usize {
    sentences
        .iter()
        .map(|s| s.as_ref().split_whitespace().count())
        .sum()
}

/// Number of words, as recognized by the lexicon.
pub fn num_words<S: AsRef<str>>(lexicon: &Lexicon, sentences: &[S]) -> usize {
    sentences
        .iter()
        .map(|s| lexicon.words(s.as_ref()).count())
        .sum()
}

/// Mean number of words per sentence.
pub fn avg_len<S: AsRef<str>>(lexicon: &Lexicon, sentences: &[S]) -> Option<f64> {
    ratio(num_words(lexicon, sentences), sentences.len())
}

/// Ratio of sentences without any word.
pub fn no_word_ratio<S: AsRef<str>>(lexicon: &Lexicon, sentences: &[S]) -> Option<f64> {
    let no_word = sentences
        .iter()
        .filter(|s| lexicon.words(s.as_ref()).next().is_none())
        .count();
    ratio(no_word, sentences.len())
}

/// Ratio of ASCII punctuation characters.
pub fn punct_ratio<S: AsRef<str>>(sentences: &[S]) -> Option<f64> {
    char_ratio(sentences, |c| c.is_ascii_punctuation())
}

pub fn upper_ratio<S: AsRef<str>>(sentences: &[S]) -> Option<f64> {
    char_ratio(sentences, char::is_uppercase)
}

/// Ratio of decimal digits (any script).
pub fn digit_ratio<S: AsRef<str>>(sentences: &[S]) -> Option<f64> {
    char_ratio(sentences, |c| {
        GeneralCategory::of(c) == GeneralCategory::DecimalNumber
    })
}

/// Ratio of letters that are not part of the lexicon alphabet.
pub fn foreign_ratio<S: AsRef<str>>(lexicon: &Lexicon, sentences: &[S]) -> Option<f64> {
    let foreign = sentences
        .iter()
        .map(|s| lexicon.foreign_letters(s.as_ref()))
        .sum();
    ratio(foreign, char_count(sentences))
}

/// Ratio of words that are in the lexicon frequent word list.
pub fn frequent_ratio<S: AsRef<str>>(lexicon: &Lexicon, sentences: &[S]) -> Option<f64> {
    let (frequent, total) = sentences
        .iter()
        .flat_map(|s| lexicon.words(s.as_ref()))
        .fold((0, 0), |(frequent, total), w| {
            (frequent + usize::from(lexicon.is_frequent(w)), total + 1)
        });
    ratio(frequent, total)
}
