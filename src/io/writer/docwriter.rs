/*! CoNLL-U document writer.

Writes documents back in the format read by [crate::io::reader::DocReader]:
comments verbatim, one tab-separated token per line, a blank line after each sentence.
!*/
use std::io::Write;

use crate::conllu::{Document, Sentence};
use crate::error::Error;

pub struct DocWriter<W: Write> {
    handle: W,
}

impl<W: Write> DocWriter<W> {
    pub fn new(handle: W) -> Self {
        Self { handle }
    }

    fn write_sentence(&mut self, sentence: &Sentence) -> Result<(), Error> {
        for comment in sentence.comments() {
            writeln!(self.handle, "{}", comment)?;
        }
        for token in sentence.tokens() {
            writeln!(self.handle, "{}", token)?;
        }
        writeln!(self.handle)?;
        Ok(())
    }

    /// Write a document.
    pub fn write(&mut self, doc: &Document) -> Result<(), Error> {
        for sentence in doc.sentences() {
            self.write_sentence(sentence)?;
        }
        Ok(())
    }

    /// Write a result comment, then the document.
    pub fn write_with_header(&mut self, doc: &Document, comment: &str) -> Result<(), Error> {
        writeln!(self.handle, "{}", comment)?;
        self.write(doc)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }

    pub fn into_inner(self) -> W {
        self.handle
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::io::reader::DocReader;

    const DATA: &str = "# doc_id = 1
# text = Kissa istuu.
1\tKissa\tkissa\tNOUN\tN\tCase=Nom\t2\tnsubj\t_\t_
2\tistuu\tistua\tVERB\tV\t_\t0\troot\t_\tSpaceAfter=No
3\t.\t.\tPUNCT\tPunct\t_\t2\tpunct\t_\t_

# opaque comment
# text = Hei
1\tHei\thei\tINTJ\t_\t_\t0\troot\t_\t_

# doc_id = 2
# text = Moi
1\tMoi\tmoi\tINTJ\t_\t_\t0\troot\t_\t_

";

    fn write_all(docs: &[Document]) -> String {
        let mut w = DocWriter::new(Vec::new());
        for doc in docs {
            w.write(doc).unwrap();
        }
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn test_byte_faithful() {
        let docs: Vec<Document> = DocReader::new(Cursor::new(DATA))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(write_all(&docs), DATA);
    }

    #[test]
    fn test_reparse() {
        let docs: Vec<Document> = DocReader::new(Cursor::new(DATA))
            .collect::<Result<_, _>>()
            .unwrap();
        let written = write_all(&docs);
        let reparsed: Vec<Document> = DocReader::new(Cursor::new(written.as_str()))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs, reparsed);
    }

    #[test]
    fn test_header() {
        let docs: Vec<Document> = DocReader::new(Cursor::new(DATA))
            .collect::<Result<_, _>>()
            .unwrap();
        let mut w = DocWriter::new(Vec::new());
        w.write_with_header(&docs[1], "# filter_result = pass-all")
            .unwrap();
        let written = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(
            written,
            "# filter_result = pass-all
# doc_id = 2
# text = Moi
1\tMoi\tmoi\tINTJ\t_\t_\t0\troot\t_\t_

"
        );

        // header comment is read back as part of the document
        let reparsed: Vec<Document> = DocReader::new(Cursor::new(written.as_str()))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(reparsed.len(), 1);
        assert_eq!(
            reparsed[0].sentences()[0].comments()[0],
            "# filter_result = pass-all"
        );
        assert_eq!(reparsed[0].boundary(), Some("# doc_id = 2"));
    }
}
