//! Pipeline trait.
use crate::error::Error;

/// A command line entry point.
///
/// Generic over the return type, filtering pipelines returning their [crate::filtering::Stats].
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
