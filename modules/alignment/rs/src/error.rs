use thiserror::Error;

/// Which of the two input sequences an error refers to.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Which {
    First,
    Second,
}

impl std::fmt::Display for Which {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Which::First => write!(f, "first"),
            Which::Second => write!(f, "second"),
        }
    }
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Error {
    #[error("{sequence} sequence is too long: {length} symbols, capacity is {capacity}")]
    CapacityExceeded {
        sequence: Which,
        length: usize,
        capacity: usize,
    },
}
