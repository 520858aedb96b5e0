/*!
# IO utilities

Streaming CoNLL-U reading ([reader::DocReader]) and writing ([writer::DocWriter]).

Both work on whole documents, and writing a read document gives back the same lines.
!*/
pub mod reader;
pub mod writer;
