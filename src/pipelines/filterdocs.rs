//! Document-level filtering.
//!
//! Each document is measured as a whole (all of its sentence texts) by a [TextFilter].
//! Kept documents are written with a `# filter_result = <verdict>` comment.
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use log::{debug, log_enabled, Level};

use super::{process_files, Pipeline};
use crate::conllu::text::{self, TextMode};
use crate::conllu::Document;
use crate::docid;
use crate::error::Error;
use crate::filtering::{keep, Filter, Stats, TextFilter, Verdict};
use crate::io::reader::DocReader;
use crate::io::writer::DocWriter;

pub const FILTER_RESULT_COMMENT: &str = "# filter_result = ";

pub struct FilterDocs {
    files: Vec<PathBuf>,
    filter: TextFilter,
    mode: TextMode,
    invert: bool,
    limit: Option<usize>,
}

impl FilterDocs {
    pub fn new(
        files: Vec<PathBuf>,
        filter: TextFilter,
        mode: TextMode,
        invert: bool,
        limit: Option<usize>,
    ) -> Self {
        Self {
            files,
            filter,
            mode,
            invert,
            limit,
        }
    }

    /// Get the verdict of a document.
    ///
    /// # Errors
    /// Propagates text extraction errors.
    pub fn process_document(&self, doc: &Document) -> Result<Verdict, Error> {
        let texts = text::sentence_texts(doc, self.mode)?;
        Ok(self.filter.detect(&texts[..]))
    }

    /// Filter the documents of `reader` into `writer`.
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
            let doc = doc?;
            let verdict = self.process_document(&doc)?;
            let label = verdict.label();
            stats.add(&label);

            let kept = keep(&verdict, self.invert);
            stats.record(kept);
            if kept {
                writer.write_with_header(&doc, &format!("{}{}", FILTER_RESULT_COMMENT, label))?;
            } else if log_enabled!(Level::Debug) {
                let id = doc.boundary().map(docid::resolve);
                debug!("dropping document {:?}: {}", id.as_ref().map(|id| id.id()), label);
            }
        }
        Ok(stats)
    }
}

impl Pipeline<Stats> for FilterDocs {
    fn run(&self) -> Result<Stats, Error> {
        let stdout = std::io::stdout();
        let mut writer = DocWriter::new(BufWriter::new(stdout.lock()));
        let stats = process_files(&self.files, |reader| {
            let stats = self.process_stream(reader, &mut writer)?;
            writer.flush()?;
            Ok(stats)
        })?;
        Ok(stats)
    }
}
