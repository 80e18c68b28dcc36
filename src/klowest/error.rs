use std::error::Error;
use std::fmt;

/// Error returned when building a selector from a negative capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCapacity(pub i64);

impl fmt::Display for InvalidCapacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid selector capacity {}. Capacity must be a non negative integer.",
            self.0
        )
    }
}

impl Error for InvalidCapacity {}
