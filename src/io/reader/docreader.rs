/*! Streaming CoNLL-U document reader.

Lines are grouped into sentences (blank-line separated), and sentences into documents
(delimited by boundary comments, see [crate::conllu::is_boundary]).

Only the document being built is held in memory.
 * !*/
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::{debug, error, info};

use crate::conllu::{is_boundary, Document, Sentence, Token};
use crate::error::Error;

/// A progress line is logged every `PROGRESS_INTERVAL` lines.
const PROGRESS_INTERVAL: usize = 100_000;

/// Reader over a plain or gzipped file.
pub type FileDocReader = DocReader<Box<dyn BufRead>>;

#[derive(Debug)]
pub struct DocReader<R> {
    reader: R,
    line_nb: usize,
    nb_docs: usize,
    comments: Vec<String>,
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
    done: bool,
}

impl DocReader<Box<dyn BufRead>> {
    /// Open a corpus file.
    ///
    /// Files ending in `.gz` are transparently decompressed.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        let reader: Box<dyn BufRead> = if src.extension().map_or(false, |ext| ext == "gz") {
            debug!("reading {:?} as gzip", src);
            Box::new(BufReader::new(MultiGzDecoder::new(handle)))
        } else {
            Box::new(BufReader::new(handle))
        };

        Ok(Self::new(reader))
    }
}

impl<R> DocReader<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_nb: 0,
            nb_docs: 0,
            comments: Vec::new(),
            tokens: Vec::new(),
            sentences: Vec::new(),
            done: false,
        }
    }

    /// Number of lines read so far.
    pub fn line_nb(&self) -> usize {
        self.line_nb
    }

    /// Number of documents yielded so far.
    pub fn nb_docs(&self) -> usize {
        self.nb_docs
    }

    /// Move pending comments and tokens into a new sentence.
    /// Nothing happens if there is nothing pending (repeated blank lines).
    fn close_sentence(&mut self) {
        if self.comments.is_empty() && self.tokens.is_empty() {
            return;
        }
        let sentence = Sentence::new(mem::take(&mut self.comments), mem::take(&mut self.tokens));
        self.sentences.push(sentence);
    }

    /// Take the current document, if it holds sentences.
    fn flush(&mut self) -> Option<Document> {
        if self.sentences.is_empty() {
            return None;
        }
        self.nb_docs += 1;
        Some(Document::new(mem::take(&mut self.sentences)))
    }

    /// Read next line, without its trailing newline.
    fn next_line(&mut self) -> Option<Result<String, Error>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Err(e) => Some(Err(Error::Io(e))),
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                }
                Some(Ok(line))
            }
        }
    }
}

impl<R> Iterator for DocReader<R>
where
    R: BufRead,
{
    type Item = Result<Document, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.next_line() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    // unterminated last sentence is closed implicitly
                    self.done = true;
                    self.close_sentence();
                    return self.flush().map(Ok);
                }
            };

            self.line_nb += 1;
            if self.line_nb % PROGRESS_INTERVAL == 0 {
                info!(
                    "processed {} lines ({} docs) ...",
                    self.line_nb, self.nb_docs
                );
            }

            if line.trim().is_empty() {
                self.close_sentence();
            } else if line.starts_with('#') {
                let flushed = if is_boundary(&line) {
                    self.flush()
                } else {
                    None
                };
                self.comments.push(line);
                if let Some(doc) = flushed {
                    return Some(Ok(doc));
                }
            } else {
                match line.parse::<Token>() {
                    Ok(token) => self.tokens.push(token),
                    Err(e) => {
                        error!("line {}: {} ({:?})", self.line_nb, e, line);
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            }
        }
    }
}
