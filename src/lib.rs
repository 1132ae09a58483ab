//! Big Int Core \
//! This crate provides:
//! - [`BigInt`]: sign-magnitude arbitrary-precision integers built from decimal digits, with
//!   in-place multiply-accumulate, increment/decrement and total ordering.
//! - [`DigitBuf`]: the owning, capacity-doubling digit storage behind every magnitude.
//! - [`add_digit`], [`sub_digit`], [`mul_digit`]: single-digit primitives with explicit carry.
//!
//! Every fallible operation returns [`Result`]; running out of addressable memory is reported as
//! [`BigIntError::AllocationOverflow`] instead of aborting.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod digit;
mod digit_buf;
mod error;

pub use big_int::BigInt;
pub use big_num_constants::{Digit, DECIMAL_BATCH_DIGITS, DECIMAL_BATCH_RADIX, DIGIT_BITS, MAX_MAG_LENGTH};
pub use digit::{add_digit, mul_digit, sub_digit};
pub use digit_buf::DigitBuf;
pub use error::{BigIntError, Result};
