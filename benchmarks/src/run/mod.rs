//! A single selection run over a stream of random values.

use crate::checkpoint::checkpoints;
use crate::utils::print::write_values;
use klowest::Selector;
use std::io::{self, Write};

/// Values printed per line of the input listing.
pub const VALUES_PER_LINE: usize = 25;

/// The input of a run: the number of values `k` to select among the
/// `values` of the stream.
pub struct Run {
    pub k: usize,
    pub values: Vec<u64>,
}

impl Run {
    pub fn new<I>(k: usize, n: usize, values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Run {
            k,
            values: values.into_iter().take(n).collect(),
        }
    }

    /// Print the input values.
    pub fn write_input<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Input array (n={}):", self.values.len())?;
        write_values(out, self.values.iter(), VALUES_PER_LINE)
    }

    /// Feed the values to `selector` and print its selection at every
    /// checkpoint.
    pub fn execute<S, W>(
        &self,
        selector: &mut S,
        out: &mut W,
    ) -> io::Result<()>
    where
        S: Selector<u64> + ?Sized,
        W: Write,
    {
        let points = checkpoints(self.values.len());
        let mut next = points.iter().enumerate().peekable();

        for (i, value) in self.values.iter().enumerate() {
            selector.observe(*value);
            if let Some((count, _)) = next.next_if(|(_, p)| **p == i + 1) {
                writeln!(
                    out,
                    "\n{} lowest elements in check point {}:",
                    self.k,
                    count + 1
                )?;
                write_values(out, selector.snapshot_ascending(), 0)?;
            }
        }
        Ok(())
    }
}

mod args;
pub use args::{RunArgs, DEFAULT_K, DEFAULT_N, DEFAULT_RANGE};
