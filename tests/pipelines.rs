use std::fs::File;
use std::io::{Cursor, Write};
use std::path::PathBuf;

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;
use udfilter::conllu::{Document, TextMode};
use udfilter::error::Error;
use udfilter::filtering::{EmptyPolicy, RejectRatio, SentenceFilter, TextFilter, Thresholds};
use udfilter::io::reader::DocReader;
use udfilter::io::writer::DocWriter;
use udfilter::pipelines::{FilterDocs, FilterSents};

const CORPUS: &str = "# doc_id = doc1
# text = Kissa istuu puussa.
1\tKissa\tkissa\tNOUN\t_\t_\t2\tnsubj\t_\t_
2\tistuu\tistua\tVERB\t_\t_\t0\troot\t_\t_
3\tpuussa\tpuu\tNOUN\t_\t_\t2\tobl\t_\tSpaceAfter=No
4\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_

# doc_id = doc2
# text = HUUTAA KOVAA
1\tHUUTAA\thuutaa\tVERB\t_\t_\t0\troot\t_\t_
2\tKOVAA\tkovaa\tADV\t_\t_\t1\tadvmod\t_\t_

# <doc collection=\"wiki\" url=\"Koira\">
# text = Koira haukkuu.
1\tKoira\tkoira\tNOUN\t_\t_\t2\tnsubj\t_\t_
2\thaukkuu\thaukkua\tVERB\t_\t_\t0\troot\t_\tSpaceAfter=No
3\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_

";

fn write_plain(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path
}

fn write_gz(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    enc.write_all(content.as_bytes()).unwrap();
    enc.finish().unwrap();
    path
}

fn read_all(reader: impl Iterator<Item = Result<Document, Error>>) -> Vec<Document> {
    reader.collect::<Result<_, _>>().unwrap()
}

fn upper_filter(invert: bool) -> FilterDocs {
    let thresholds = Thresholds {
        upper_ratio: Some(0.5),
        ..Default::default()
    };
    FilterDocs::new(
        Vec::new(),
        TextFilter::new(thresholds, None).unwrap(),
        TextMode::Raw,
        invert,
        None,
    )
}

fn filter_docs(p: &FilterDocs, input: &str) -> String {
    let mut writer = DocWriter::new(Vec::new());
    p.process_stream(DocReader::new(Cursor::new(input)), &mut writer)
        .unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn plain_and_gzip_are_equivalent() {
    let dir = tempfile::tempdir().unwrap();
    let plain = write_plain(&dir, "corpus.conllu", CORPUS);
    let gz = write_gz(&dir, "corpus.conllu.gz", CORPUS);

    let from_plain = read_all(DocReader::from_path(&plain).unwrap());
    let from_gz = read_all(DocReader::from_path(&gz).unwrap());
    assert_eq!(from_plain.len(), 3);
    assert_eq!(from_plain, from_gz);
}

#[test]
fn concatenated_gzip_members() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multi.conllu.gz");
    let mut f = File::create(&path).unwrap();
    for part in CORPUS.split_inclusive("\n\n") {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(part.as_bytes()).unwrap();
        f.write_all(&enc.finish().unwrap()).unwrap();
    }
    drop(f);

    assert_eq!(read_all(DocReader::from_path(&path).unwrap()).len(), 3);
}

#[test]
fn missing_file() {
    let result = DocReader::from_path(&PathBuf::from("dzqdjzqkdjqzkdj.conllu"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn write_read_roundtrip() {
    let docs = read_all(DocReader::new(Cursor::new(CORPUS)));
    let mut writer = DocWriter::new(Vec::new());
    for doc in &docs {
        writer.write(doc).unwrap();
    }
    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(out, CORPUS);
    assert_eq!(read_all(DocReader::new(Cursor::new(out.as_str()))), docs);
}

#[test]
fn filter_upper_ratio() {
    let out = filter_docs(&upper_filter(false), CORPUS);
    let docs = read_all(DocReader::new(Cursor::new(out.as_str())));
    assert_eq!(docs.len(), 2);
    assert!(out.starts_with("# filter_result = pass-all\n# doc_id = doc1\n"));
    assert!(!out.contains("HUUTAA"));

    let out = filter_docs(&upper_filter(true), CORPUS);
    assert_eq!(
        out.lines().next(),
        Some("# filter_result = fail-upper-ratio")
    );
    assert_eq!(read_all(DocReader::new(Cursor::new(out.as_str()))).len(), 1);
}

#[test]
fn invert_partitions_input() {
    let kept = read_all(DocReader::new(Cursor::new(
        filter_docs(&upper_filter(false), CORPUS).as_str(),
    )));
    let rejected = read_all(DocReader::new(Cursor::new(
        filter_docs(&upper_filter(true), CORPUS).as_str(),
    )));
    assert_eq!(kept.len() + rejected.len(), 3);
    for doc in kept.iter().chain(rejected.iter()) {
        assert!(doc.boundary().is_some());
    }
}

#[test]
fn filtered_output_is_stable() {
    // filtering twice keeps the same documents, with one more result comment
    let once = filter_docs(&upper_filter(false), CORPUS);
    let twice = filter_docs(&upper_filter(false), &once);
    let once = read_all(DocReader::new(Cursor::new(once.as_str())));
    let twice = read_all(DocReader::new(Cursor::new(twice.as_str())));
    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.boundary(), b.boundary());
        assert_eq!(a.tokens().count(), b.tokens().count());
    }
}

#[test]
fn filter_sents_min_nouns() {
    let thresholds = Thresholds {
        min_nouns: Some(1),
        ..Default::default()
    };
    let filter = SentenceFilter::new(thresholds, None).unwrap();
    let p = FilterSents::new(
        Vec::new(),
        filter,
        RejectRatio::new(0.5, None, EmptyPolicy::Pass),
        TextMode::Raw,
        false,
        None,
    );
    let mut writer = DocWriter::new(Vec::new());
    let stats = p
        .process_stream(DocReader::new(Cursor::new(CORPUS)), &mut writer)
        .unwrap();
    let out = String::from_utf8(writer.into_inner()).unwrap();

    assert_eq!(stats.total(), 3);
    assert_eq!(stats.output(), 2);
    assert_eq!(stats.get("sentence-reject-parse"), 1);
    assert!(out.contains("# sentfilter_result = pass (0/1 = 0.0%)\n# doc_id = doc1\n"));
    assert!(!out.contains("HUUTAA"));
}
