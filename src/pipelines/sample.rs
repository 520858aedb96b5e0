//! Random document sampling.
//!
//! Each document is kept with probability `ratio`. Giving a seed makes samples reproducible.
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{process_files, Pipeline};
use crate::error::Error;
use crate::filtering::Stats;
use crate::io::reader::DocReader;
use crate::io::writer::DocWriter;

pub struct Sample {
    files: Vec<PathBuf>,
    ratio: f64,
    seed: Option<u64>,
    limit: Option<usize>,
}

impl Sample {
    /// # Errors
    /// Returns an error if `ratio` is not within `[0, 1]`.
    pub fn new(
        files: Vec<PathBuf>,
        ratio: f64,
        seed: Option<u64>,
        limit: Option<usize>,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(Error::Custom(format!(
                "sampling ratio must be between 0 and 1, got {}",
                ratio
            )));
        }
        Ok(Self {
            files,
            ratio,
            seed,
            limit,
        })
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn process_stream<R, W, G>(
        &self,
        reader: DocReader<R>,
        writer: &mut DocWriter<W>,
        rng: &mut G,
    ) -> Result<Stats, Error>
    where
        R: BufRead,
        W: Write,
        G: Rng,
    {
        let mut stats = Stats::default();
        for doc in reader.take(self.limit.unwrap_or(usize::MAX)) {
            let doc = doc?;
            let kept = rng.gen_bool(self.ratio);
            stats.record(kept);
            if kept {
                writer.write(&doc)?;
            }
        }
        Ok(stats)
    }
}

impl Pipeline<Stats> for Sample {
    fn run(&self) -> Result<Stats, Error> {
        let mut rng = self.rng();
        let stdout = std::io::stdout();
        let mut writer = DocWriter::new(BufWriter::new(stdout.lock()));
        process_files(&self.files, |reader| {
            let stats = self.process_stream(reader, &mut writer, &mut rng)?;
            writer.flush()?;
            Ok(stats)
        })
    }
}
