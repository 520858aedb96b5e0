//! Target-language data used by text measures.
//!
//! Loaded once at startup and never mutated.
use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

/// Word patterns, alphabet and frequent words of a target language.
pub struct Lexicon {
    /// language code expected from the language detector
    lang: &'static str,
    word_re: Regex,
    foreign_re: Regex,
    frequent: HashSet<&'static str>,
}

impl Lexicon {
    pub fn lang(&self) -> &'static str {
        self.lang
    }

    /// Iterate over word tokens of `text`.
    pub fn words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.word_re.find_iter(text).map(|m| m.as_str())
    }

    /// Number of letters outside of the language alphabet.
    pub fn foreign_letters(&self, text: &str) -> usize {
        self.foreign_re.find_iter(text).count()
    }

    pub fn is_frequent(&self, word: &str) -> bool {
        self.frequent.contains(word)
    }
}

impl Lexicon {
    fn finnish(word_re: &str) -> Self {
        Lexicon {
            lang: "fi",
            word_re: Regex::new(word_re).unwrap(),
            // word characters that are neither digits, underscores nor in the Finnish alphabet
            foreign_re: Regex::new(r"[\w&&[^\d_a-zA-ZåäöÅÄÖ]]").unwrap(),
            frequent: FREQUENT_FI_WORDS.iter().copied().collect(),
        }
    }
}

lazy_static! {
    /// Finnish, as measured on whole documents.
    /// Words are optionally capitalized, with at least two lowercase letters.
    pub static ref FINNISH: Lexicon = Lexicon::finnish(r"\b[A-ZÅÄÖ]?[a-zåäö]{2,}\b");
    /// Finnish, as measured on single sentences.
    /// Words are any letter followed by at least one lowercase letter ("Se", "On").
    pub static ref FINNISH_SENTENCES: Lexicon =
        Lexicon::finnish(r"\b[a-zA-ZåäöÅÄÖ][a-zåäö]+\b");
}

const FREQUENT_FI_WORDS: [&str; 100] = [
    "aika",
    "aikana",
    "aina",
    "ainakin",
    "ei",
    "eikä",
    "eivät",
    "eli",
    "en",
    "enemmän",
    "ennen",
    "ensi",
    "eri",
    "esimerkiksi",
    "että",
    "ettei",
    "hän",
    "hänen",
    "he",
    "hyvä",
    "hyvin",
    "ihan",
    "ja",
    "jälkeen",
    "jo",
    "joka",
    "jonka",
    "jopa",
    "jos",
    "jossa",
    "jotka",
    "kaikki",
    "kaksi",
    "kanssa",
    "kaupungin",
    "kertoo",
    "koko",
    "kolme",
    "koska",
    "kuin",
    "kuitenkin",
    "kun",
    "kyllä",
    "lähes",
    "lisäksi",
    "mitä",
    "muassa",
    "mukaan",
    "mutta",
    "muun",
    "myös",
    "ne",
    "niin",
    "noin",
    "nyt",
    "ole",
    "olen",
    "oli",
    "olisi",
    "olivat",
    "olla",
    "ollut",
    "on",
    "osa",
    "ovat",
    "paljon",
    "pitää",
    "poliisi",
    "saa",
    "sai",
    "sanoo",
    "se",
    "sekä",
    "sen",
    "siinä",
    "sillä",
    "sitä",
    "sitten",
    "suomen",
    "suomessa",
    "tai",
    "tällä",
    "tämä",
    "tämän",
    "tänä",
    "tässä",
    "tulee",
    "tuli",
    "uusi",
    "vaan",
    "vaikka",
    "vain",
    "vielä",
    "viime",
    "voi",
    "vuoden",
    "vuonna",
    "vuotta",
    "yksi",
    "yli",
];

#[cfg(test)]
mod tests {
    use super::{FINNISH, FINNISH_SENTENCES};

    #[test]
    fn test_words() {
        let words: Vec<&str> = FINNISH
            .words("Kissa istuu ja KOIRA ei. x 123 Äiti öisin")
            .collect();
        assert_eq!(words, vec!["Kissa", "istuu", "ja", "ei", "Äiti", "öisin"]);
    }

    #[test]
    fn test_sentence_words() {
        let text = "Se on hyvä. On KOIRA x";
        assert_eq!(FINNISH.words(text).collect::<Vec<_>>(), vec!["on", "hyvä"]);
        assert_eq!(
            FINNISH_SENTENCES.words(text).collect::<Vec<_>>(),
            vec!["Se", "on", "hyvä", "On"]
        );
        assert_eq!(FINNISH_SENTENCES.lang(), "fi");
        assert!(FINNISH_SENTENCES.is_frequent("ja"));
    }

    #[test]
    fn test_foreign() {
        assert_eq!(FINNISH.foreign_letters("Kissa ja äiti 123_"), 0);
        assert_eq!(FINNISH.foreign_letters("Straße café"), 2);
        assert_eq!(FINNISH.foreign_letters("Москва"), 6);
    }

    #[test]
    fn test_frequent() {
        assert!(FINNISH.is_frequent("ja"));
        assert!(FINNISH.is_frequent("myös"));
        assert!(!FINNISH.is_frequent("kissa"));
        assert_eq!(FINNISH.lang(), "fi");
    }
}
