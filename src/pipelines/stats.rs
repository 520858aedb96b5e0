//! Delexicalized document statistics.
//!
//! One line per document: `<id>\t<aux>\t<features as json>`.
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use super::{process_files, Pipeline};
use crate::docid::{self, DocId};
use crate::error::Error;
use crate::features::Features;
use crate::filtering::Stats;
use crate::io::reader::DocReader;

/// Keep the output line-oriented.
fn clean_field(field: &str) -> String {
    field.replace(['\t', '\n'], " ")
}

pub struct DocStats {
    files: Vec<PathBuf>,
    limit: Option<usize>,
}

impl DocStats {
    pub fn new(files: Vec<PathBuf>, limit: Option<usize>) -> Self {
        Self { files, limit }
    }

    pub fn process_stream<R, W>(&self, reader: DocReader<R>, w: &mut W) -> Result<Stats, Error>
    where
        R: BufRead,
        W: Write,
    {
        let mut stats = Stats::default();
        for doc in reader.take(self.limit.unwrap_or(usize::MAX)) {
            let doc = doc?;
            let id = doc
                .boundary()
                .map(docid::resolve)
                .unwrap_or_else(DocId::unknown);
            if id.is_unknown() {
                stats.add("unknown-id");
            }
            let features = Features::from(&doc);
            writeln!(
                w,
                "{}\t{}\t{}",
                clean_field(id.id()),
                clean_field(id.aux()),
                serde_json::to_string(&features)?
            )?;
            stats.record(true);
        }
        Ok(stats)
    }
}

impl Pipeline<Stats> for DocStats {
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

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const DATA: &str = "# <doc collection=\"wiki\" url=\"Kissa\">
# text = Kissa istuu.
1\tKissa\tkissa\tNOUN\t_\t_\t2\tnsubj\t_\t_
2\tistuu\tistua\tVERB\t_\t_\t0\troot\t_\tSpaceAfter=No
3\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_

# text = Ei tunnistetta.
1\tEi\tei\tAUX\t_\t_\t0\troot\t_\t_
";

    #[test]
    fn test_lines() {
        let mut out = Vec::new();
        let stats = DocStats::new(Vec::new(), None)
            .process_stream(DocReader::new(Cursor::new(DATA)), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);

        let fields: Vec<&str> = lines[0].splitn(3, '\t').collect();
        assert_eq!(fields[0], "wiki/Kissa");
        assert_eq!(fields[1], "_");
        let json: serde_json::Value = serde_json::from_str(fields[2]).unwrap();
        assert_eq!(json["sent-num"], 2);
        assert_eq!(json["token-count"], 4);
        assert_eq!(json["upos-count"]["NOUN"], 1);
        assert_eq!(json["punct-count"], 1);
        assert_eq!(stats.total(), 1);
    }

    #[test]
    fn test_unknown_id() {
        let data = "# text = Hei\n1\tHei\thei\tINTJ\t_\t_\t0\troot\t_\t_\n\n";
        let mut out = Vec::new();
        let stats = DocStats::new(Vec::new(), None)
            .process_stream(DocReader::new(Cursor::new(data)), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("<UNKNOWN>\t<UNKNOWN>\t{"));
        assert_eq!(stats.get("unknown-id"), 1);
    }

    #[test]
    fn test_clean_field() {
        assert_eq!(clean_field("a\tb\nc"), "a b c");
    }
}
