//! Utilities to generate the stream of values fed to selectors.

mod random;
pub use random::RandomUniformGenerator;
