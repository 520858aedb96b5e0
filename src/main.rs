//! # udfilter
//!
//! Streaming filtering of CoNLL-U corpora.
//!
//! Documents are read one at a time from (optionally gzipped) files,
//! measured against quality thresholds and written back to stdout.
//!
//! ## Getting started
//!
//! ```sh
//! udfilter 0.1.0
//! CoNLL-U corpus filtering tool.
//!
//! USAGE:
//!     udfilter <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     filter-docs     Filter documents on their whole text
//!     filter-sents    Filter sentences, then documents on their ratio of rejected sentences
//!     help            Prints this message or the help of the given subcommand(s)
//!     sample          Randomly sample documents
//!     stats           Compute delexicalized document statistics
//!     text            Extract sentence texts
//! ```
use std::path::Path;

use env_logger::Env;
use structopt::StructOpt;
use udfilter::conllu::TextMode;
use udfilter::error::Error;
use udfilter::filtering::{RejectRatio, SentenceFilter, TextFilter, Thresholds};
use udfilter::identifiers::{FastText, LangDetector};
use udfilter::pipelines::{self, Pipeline};

#[macro_use]
extern crate log;

mod cli;

/// Load the language identification model, only if it is needed.
fn detector(thresholds: &Thresholds, lid_path: &Path) -> Result<Option<Box<dyn LangDetector>>, Error> {
    if !thresholds.langdetect {
        return Ok(None);
    }
    info!("loading language identification model {:?}", lid_path);
    Ok(Some(Box::new(FastText::new(lid_path, 0.0)?)))
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = cli::UdFilter::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::UdFilter::FilterDocs(f) => {
            let thresholds = f.filter.thresholds();
            let detector = detector(&thresholds, &f.filter.lid_path)?;
            let p = pipelines::FilterDocs::new(
                f.files,
                TextFilter::new(thresholds, detector)?,
                TextMode::from_tokenized(f.filter.tokenized),
                f.filter.invert,
                f.filter.limit,
            );
            p.run()?;
        }
        cli::UdFilter::FilterSents(f) => {
            let thresholds = f.thresholds();
            let detector = detector(&thresholds, &f.filter.lid_path)?;
            let ratio = RejectRatio::from_thresholds(f.reject_ratio, f.max_reject, &thresholds);
            let filter = SentenceFilter::new(thresholds, detector)?;
            let p = pipelines::FilterSents::new(
                f.files,
                filter,
                ratio,
                TextMode::from_tokenized(f.filter.tokenized),
                f.filter.invert,
                f.filter.limit,
            );
            p.run()?;
        }
        cli::UdFilter::Text(t) => {
            let p = pipelines::Text::new(
                t.files,
                TextMode::from_tokenized(t.tokenized),
                t.labels,
                t.limit,
            );
            p.run()?;
        }
        cli::UdFilter::Stats(s) => {
            let p = pipelines::DocStats::new(s.files, s.limit);
            p.run()?;
        }
        cli::UdFilter::Sample(s) => {
            let p = pipelines::Sample::new(s.files, s.ratio, s.seed, s.limit)?;
            p.run()?;
        }
    };
    Ok(())
}
