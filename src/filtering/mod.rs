/*! Filtering utilities

Filters operate on text (a whole document or a single sentence, see [TextFilter])
or on token annotations ([ParseFilter]).

Every filter returns a [Verdict]: either a pass, or the first failing [Criterion].
Criteria are always checked in the same order (see [Criterion::TEXT]), so that a rejected item
is attributed to exactly one criterion.

Sentence verdicts can then be aggregated into a document decision with [RejectRatio].
!*/
mod criteria;
mod filter;
pub mod lexicon;
pub mod measures;
mod parse;
mod sentence;
mod stats;
mod text;

pub use criteria::{keep, Criterion, EmptyPolicy, Thresholds, Verdict};
pub use filter::Filter;
pub use parse::ParseFilter;
pub use sentence::{RatioDecision, RejectRatio, SentenceFilter, SentenceVerdict};
pub use stats::Stats;
pub use text::TextFilter;
