//! Pipelines.
//!
//! Each pipeline reads CoNLL-U files one after the other, processes their documents
//! and writes results on stdout. Diagnostics are logged.
//!
//! The module provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::filtering::Stats;
use crate::io::reader::{DocReader, FileDocReader};

mod filterdocs;
mod filtersents;
#[allow(clippy::module_inception)]
pub mod pipeline;
mod sample;
mod stats;
mod text;

pub use filterdocs::FilterDocs;
pub use filtersents::FilterSents;
pub use pipeline::Pipeline;
pub use sample::Sample;
pub use stats::DocStats;
pub use text::Text;

/// File name without its parent folders, for logging.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Open and process each file in turn, logging per-file statistics
/// and a summary of all files.
///
/// Statistics are never shared between files.
fn process_files<F>(files: &[PathBuf], mut process: F) -> Result<Stats, Error>
where
    F: FnMut(FileDocReader) -> Result<Stats, Error>,
{
    let mut total = Stats::default();
    for path in files {
        let name = file_name(path);
        info!("processing {} ...", name);
        let reader = DocReader::from_path(path)?;
        let stats = process(reader)?;
        stats.report(&name);
        total.merge(&stats);
        info!("completed {}.", name);
    }
    if files.len() > 1 {
        info!("total: {}", total.summary());
    }
    Ok(total)
}
