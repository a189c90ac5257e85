use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("Number of values ({values}) does not match number of weights ({weights})")]
    LengthMismatch { values: usize, weights: usize },
    #[error("{field} at index '{index}' is negative ({value})")]
    NegativeInput {
        field: &'static str,
        index: usize,
        value: i64,
    },
    #[error("Capacity is negative ({capacity})")]
    NegativeCapacity { capacity: i64 },
    #[error("{field} ({value}) is out of range")]
    OutOfRange { field: &'static str, value: i64 },
    #[error("DP table of {rows} x {cols} cells exceeds the limit of {limit} cells")]
    TableTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },
}

pub type Result<T> = std::result::Result<T, KnapsackError>;
