pub mod checkpoint;
pub mod generator;
pub mod run;
pub mod utils;

pub use run::{Run, RunArgs};
