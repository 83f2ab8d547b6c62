//! Pipeline trait.
use crate::error::Error;

/// A runnable command.
///
/// Generic over what the run reports back (saved feature names, summary rows, export counts).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
