//! Sentence-level filtering.
//!
//! Every sentence gets a `# sentfilter = {pass|reject-text|reject-parse}` comment,
//! and documents are kept according to their ratio of rejected sentences.
//! Kept documents are written with a `# sentfilter_result = ...` comment.
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use log::debug;

use super::{process_files, Pipeline};
use crate::conllu::text::{self, TextMode};
use crate::conllu::Document;
use crate::error::Error;
use crate::filtering::{RatioDecision, RejectRatio, SentenceFilter, SentenceVerdict, Stats};
use crate::io::reader::DocReader;
use crate::io::writer::DocWriter;

pub struct FilterSents {
    files: Vec<PathBuf>,
    filter: SentenceFilter,
    ratio: RejectRatio,
    mode: TextMode,
    invert: bool,
    limit: Option<usize>,
}

impl FilterSents {
    pub fn new(
        files: Vec<PathBuf>,
        filter: SentenceFilter,
        ratio: RejectRatio,
        mode: TextMode,
        invert: bool,
        limit: Option<usize>,
    ) -> Self {
        Self {
            files,
            filter,
            ratio,
            mode,
            invert,
            limit,
        }
    }

    /// Annotate each sentence with its verdict, then decide on the document.
    ///
    /// Sentence verdicts are counted in `stats`.
    pub fn process_document(
        &self,
        doc: &mut Document,
        stats: &mut Stats,
    ) -> Result<RatioDecision, Error> {
        let texts = text::sentence_texts(doc, self.mode)?;
        let mut rejected = 0;
        for (sentence, text) in doc.sentences_mut().iter_mut().zip(texts.iter()) {
            let verdict = self.filter.check(text, sentence.tokens());
            stats.add(&format!("sentence-{}", verdict.label()));
            match verdict {
                SentenceVerdict::Pass => (),
                SentenceVerdict::RejectText(v) | SentenceVerdict::RejectParse(v) => {
                    rejected += 1;
                    stats.add(&format!("sentence-{}", v.label()));
                }
            }
            sentence.annotate(verdict.comment());
        }
        Ok(self.ratio.decide(rejected, doc.len()))
    }

    pub fn process_stream<R, W>(
        &self,
        reader: DocReader<R>,
        writer: &mut DocWriter<W>,
    ) -> Result<Stats, Error>
    where
        R: BufRead,
        W: Write,
    {
        let mut stats = Stats::default();
        for doc in reader.take(self.limit.unwrap_or(usize::MAX)) {
            let mut doc = doc?;
            let decision = self.process_document(&mut doc, &mut stats)?;
            stats.add(decision.label());

            let kept = decision.passed() != self.invert;
            stats.record(kept);
            if kept {
                writer.write_with_header(&doc, &decision.comment())?;
            } else {
                debug!("dropping document: {}", decision.comment());
            }
        }
        Ok(stats)
    }
}

impl Pipeline<Stats> for FilterSents {
    fn run(&self) -> Result<Stats, Error> {
        let stdout = std::io::stdout();
        let mut writer = DocWriter::new(BufWriter::new(stdout.lock()));
        process_files(&self.files, |reader| {
            let stats = self.process_stream(reader, &mut writer)?;
            writer.flush()?;
            Ok(stats)
        })
    }
}
