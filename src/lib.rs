/*!
# udfilter

Streaming segmentation and filtering of CoNLL-U corpora.

- [io::reader::DocReader] groups lines into sentences and sentences into documents,
- [filtering] measures texts and parses against thresholds,
- [pipelines] hold the command line entry points.
!*/
pub mod conllu;
pub mod docid;
pub mod error;
pub mod features;
pub mod filtering;
pub mod identifiers;
pub mod io;
pub mod pipelines;
