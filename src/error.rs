//! Error types for big integer construction and mutation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// Growing the digit buffer would exceed the addressable size, or the
    /// allocator refused the request.
    #[error("digit buffer cannot grow to {requested} digits")]
    AllocationOverflow { requested: usize },

    /// An internal precondition was broken by the caller.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),

    #[error("no decimal digits to parse")]
    EmptyDigits,

    #[error("invalid decimal digit {byte:#04x} at index {index}")]
    InvalidDigit { index: usize, byte: u8 },
}

pub type Result<T> = std::result::Result<T, BigIntError>;
