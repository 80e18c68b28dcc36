/// Utils for printing profiling statistics.
pub mod profiler;
