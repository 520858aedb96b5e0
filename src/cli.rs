//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;
use udfilter::filtering::{EmptyPolicy, Thresholds};

#[derive(Debug, StructOpt)]
#[structopt(name = "udfilter", about = "CoNLL-U corpus filtering tool.")]
/// Holds every command that is callable by the `udfilter` command.
pub enum UdFilter {
    #[structopt(about = "Filter documents on their whole text")]
    FilterDocs(FilterDocs),
    #[structopt(about = "Filter sentences, then documents on their ratio of rejected sentences")]
    FilterSents(FilterSents),
    #[structopt(about = "Extract sentence texts")]
    Text(Text),
    #[structopt(about = "Compute delexicalized document statistics")]
    Stats(Stats),
    #[structopt(about = "Randomly sample documents")]
    Sample(Sample),
}

/// Thresholds shared by both filter commands. Every criterion is disabled unless set.
#[derive(Debug, StructOpt)]
pub struct FilterOpts {
    #[structopt(short = "a", long = "avg-len", help = "minimum average number of words per sentence")]
    pub avg_len: Option<f64>,
    #[structopt(short = "s", long = "min-sents", help = "minimum number of sentences")]
    pub min_sents: Option<usize>,
    #[structopt(short = "S", long = "max-sents", help = "maximum number of sentences")]
    pub max_sents: Option<usize>,
    #[structopt(short = "t", long = "min-toks", help = "minimum number of tokens")]
    pub min_toks: Option<usize>,
    #[structopt(short = "T", long = "max-toks", help = "maximum number of tokens")]
    pub max_toks: Option<usize>,
    #[structopt(
        short = "n",
        long = "no-word-ratio",
        help = "maximum ratio of sentences without words"
    )]
    pub no_word_ratio: Option<f64>,
    #[structopt(
        short = "p",
        long = "punct-ratio",
        help = "maximum ratio of punctuation characters"
    )]
    pub punct_ratio: Option<f64>,
    #[structopt(
        short = "u",
        long = "upper-ratio",
        help = "maximum ratio of uppercase characters"
    )]
    pub upper_ratio: Option<f64>,
    #[structopt(short = "d", long = "digit-ratio", help = "maximum ratio of digits")]
    pub digit_ratio: Option<f64>,
    #[structopt(
        short = "F",
        long = "foreign-ratio",
        help = "maximum ratio of non-Finnish letters"
    )]
    pub foreign_ratio: Option<f64>,
    #[structopt(short = "w", long = "min-words", help = "minimum number of words")]
    pub min_words: Option<usize>,
    #[structopt(short = "W", long = "max-words", help = "maximum number of words")]
    pub max_words: Option<usize>,
    #[structopt(
        short = "f",
        long = "frequent-ratio",
        help = "minimum ratio of frequent Finnish words"
    )]
    pub frequent_ratio: Option<f64>,
    #[structopt(short = "l", long = "langdetect", help = "require Finnish language detection")]
    pub langdetect: bool,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to lid.176.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
    #[structopt(
        long = "on-empty",
        help = "outcome of ratios without anything to measure (pass|reject)",
        default_value = "pass"
    )]
    pub on_empty: EmptyPolicy,
    #[structopt(short = "i", long = "invert", help = "output rejected documents instead")]
    pub invert: bool,
    #[structopt(long = "tokenized", help = "use token forms instead of the text comments")]
    pub tokenized: bool,
    #[structopt(short = "L", long = "limit", help = "maximum number of documents per file")]
    pub limit: Option<usize>,
}

impl FilterOpts {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            avg_len: self.avg_len,
            min_sents: self.min_sents,
            max_sents: self.max_sents,
            min_toks: self.min_toks,
            max_toks: self.max_toks,
            no_word_ratio: self.no_word_ratio,
            punct_ratio: self.punct_ratio,
            upper_ratio: self.upper_ratio,
            digit_ratio: self.digit_ratio,
            foreign_ratio: self.foreign_ratio,
            min_words: self.min_words,
            max_words: self.max_words,
            frequent_ratio: self.frequent_ratio,
            langdetect: self.langdetect,
            on_empty: self.on_empty,
            ..Default::default()
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct FilterDocs {
    #[structopt(parse(from_os_str), help = "CoNLL-U files (optionally gzipped)")]
    pub files: Vec<PathBuf>,
    #[structopt(flatten)]
    pub filter: FilterOpts,
}

#[derive(Debug, StructOpt)]
pub struct FilterSents {
    #[structopt(parse(from_os_str), help = "CoNLL-U files (optionally gzipped)")]
    pub files: Vec<PathBuf>,
    #[structopt(flatten)]
    pub filter: FilterOpts,
    #[structopt(
        short = "r",
        long = "reject-ratio",
        help = "reject documents with at least this ratio of rejected sentences",
        default_value = "0.5"
    )]
    pub reject_ratio: f64,
    #[structopt(
        short = "m",
        long = "max-reject",
        help = "reject documents with at least this number of rejected sentences"
    )]
    pub max_reject: Option<usize>,
    #[structopt(long = "min-nouns", help = "minimum number of nouns per sentence")]
    pub min_nouns: Option<usize>,
    #[structopt(long = "min-verbs", help = "minimum number of verbs per sentence")]
    pub min_verbs: Option<usize>,
}

impl FilterSents {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min_nouns: self.min_nouns,
            min_verbs: self.min_verbs,
            ..self.filter.thresholds()
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct Text {
    #[structopt(parse(from_os_str), help = "CoNLL-U files (optionally gzipped)")]
    pub files: Vec<PathBuf>,
    #[structopt(long = "tokenized", help = "use token forms instead of the text comments")]
    pub tokenized: bool,
    #[structopt(long = "labels", help = "write label comments before each document")]
    pub labels: bool,
    #[structopt(short = "L", long = "limit", help = "maximum number of documents per file")]
    pub limit: Option<usize>,
}

#[derive(Debug, StructOpt)]
pub struct Stats {
    #[structopt(parse(from_os_str), help = "CoNLL-U files (optionally gzipped)")]
    pub files: Vec<PathBuf>,
    #[structopt(short = "L", long = "limit", help = "maximum number of documents per file")]
    pub limit: Option<usize>,
}

#[derive(Debug, StructOpt)]
pub struct Sample {
    #[structopt(parse(from_os_str), help = "CoNLL-U files (optionally gzipped)")]
    pub files: Vec<PathBuf>,
    #[structopt(short = "r", long = "ratio", help = "probability of keeping a document")]
    pub ratio: f64,
    #[structopt(long = "seed", help = "random seed, for reproducible samples")]
    pub seed: Option<u64>,
    #[structopt(short = "L", long = "limit", help = "maximum number of documents per file")]
    pub limit: Option<usize>,
}
