#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Possible ways of printing output stats when a
/// [`Profiler`](../../struct.Profiler.html) selector is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(Deserialize, Serialize),
    serde(tag = "kind", content = "filename")
)]
pub enum ProfilerOutputKind {
    /// No output is printed.
    None,
    /// Output is printed to stdout.
    Stdout,
    /// Output is printed to a file of the given name.
    File(String),
}
