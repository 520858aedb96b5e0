//! Plain text extraction.
//!
//! Writes one sentence text per line and a blank line after each document.
//! Label comments (filter results, predictions) of the first sentence of each document
//! can be written before its text.
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use super::{process_files, Pipeline};
use crate::conllu::text::{self, TextMode};
use crate::conllu::Document;
use crate::error::Error;
use crate::filtering::Stats;
use crate::io::reader::DocReader;

pub struct Text {
    files: Vec<PathBuf>,
    mode: TextMode,
    labels: bool,
    limit: Option<usize>,
}

impl Text {
    pub fn new(files: Vec<PathBuf>, mode: TextMode, labels: bool, limit: Option<usize>) -> Self {
        Self {
            files,
            mode,
            labels,
            limit,
        }
    }

    fn write_document<W: Write>(&self, doc: &Document, w: &mut W) -> Result<(), Error> {
        if self.labels {
            if let Some(first) = doc.sentences().first() {
                for comment in text::label_comments(first) {
                    writeln!(w, "{}", comment)?;
                }
            }
        }
        for line in text::sentence_texts(doc, self.mode)? {
            writeln!(w, "{}", line)?;
        }
        writeln!(w)?;
        Ok(())
    }

    pub fn process_stream<R, W>(&self, reader: DocReader<R>, w: &mut W) -> Result<Stats, Error>
    where
        R: BufRead,
        W: Write,
    {
        let mut stats = Stats::default();
        for doc in reader.take(self.limit.unwrap_or(usize::MAX)) {
            let doc = doc?;
            self.write_document(&doc, w)?;
            stats.record(true);
        }
        Ok(stats)
    }
}

impl Pipeline<Stats> for Text {
    fn run(&self) -> Result<Stats, Error> {
        let stdout = std::io::stdout();
        let mut w = BufWriter::new(stdout.lock());
        process_files(&self.files, |reader| {
            let stats = self.process_stream(reader, &mut w)?;
            w.flush()?;
            Ok(stats)
        })
    }
}
