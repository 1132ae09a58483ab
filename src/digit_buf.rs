//! Owning, growable storage for a magnitude.
//!
//! A [`DigitBuf`] keeps the significant length apart from the allocated
//! capacity. Growth doubles the capacity, so appending one digit at a time
//! costs amortized O(1).

use log::{debug, trace};

use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

#[derive(Debug)]
pub struct DigitBuf {
    /// `storage.len()` is the capacity; slots past `len` are zero and unread.
    storage: Vec<Digit>,
    len: usize,
}

// 实现构造
impl DigitBuf {
    pub const fn new() -> Self {
        DigitBuf { storage: Vec::new(), len: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut buf = DigitBuf::new();
        if capacity > 0 {
            buf.grow_to(capacity, MAX_MAG_LENGTH)?;
        }
        Ok(buf)
    }

    pub fn from_digits(digits: &[Digit]) -> Result<Self> {
        let mut buf = DigitBuf::with_capacity(digits.len())?;
        buf.storage[..digits.len()].copy_from_slice(digits);
        buf.len = digits.len();
        Ok(buf)
    }

    /// Takes `digits` as the live magnitude; capacity equals length.
    pub(crate) fn from_vec(digits: Vec<Digit>) -> Self {
        let len = digits.len();
        DigitBuf { storage: digits, len }
    }

    /// Deep copy sized to the live digits.
    pub fn try_clone(&self) -> Result<Self> {
        DigitBuf::from_digits(self.as_slice())
    }
}

impl Default for DigitBuf {
    fn default() -> Self {
        DigitBuf::new()
    }
}

impl Clone for DigitBuf {
    fn clone(&self) -> Self {
        DigitBuf { storage: self.as_slice().to_vec(), len: self.len }
    }
}

// 实现访问
impl DigitBuf {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Digit] {
        &self.storage[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Digit] {
        &mut self.storage[..self.len]
    }

    /// Most significant live digit.
    #[inline]
    pub fn last(&self) -> Option<Digit> {
        self.as_slice().last().copied()
    }
}

// 实现增长
impl DigitBuf {
    /// Makes room for at least `required` digits.
    pub fn ensure_capacity(&mut self, required: usize) -> Result<()> {
        self.ensure_capacity_within(required, MAX_MAG_LENGTH)
    }

    pub(crate) fn ensure_capacity_within(&mut self, required: usize, max_len: usize) -> Result<()> {
        if required <= self.capacity() {
            return Ok(());
        }
        let new_cap = if self.capacity() == 0 {
            INITIAL_CAPACITY.max(required)
        } else {
            match self.capacity().checked_mul(2) {
                Some(doubled) => doubled.max(required),
                None => {
                    debug!("digit buffer capacity {} cannot be doubled", self.capacity());
                    return Err(BigIntError::AllocationOverflow { requested: required });
                }
            }
        };
        self.grow_to(new_cap, max_len)
    }

    fn grow_to(&mut self, new_cap: usize, max_len: usize) -> Result<()> {
        if new_cap > max_len {
            debug!("digit buffer growth to {} digits exceeds limit {}", new_cap, max_len);
            return Err(BigIntError::AllocationOverflow { requested: new_cap });
        }

        let mut storage: Vec<Digit> = Vec::new();
        if let Err(err) = storage.try_reserve_exact(new_cap) {
            debug!("allocating {} digits failed: {}", new_cap, err);
            return Err(BigIntError::AllocationOverflow { requested: new_cap });
        }
        storage.extend_from_slice(self.as_slice());
        storage.resize(new_cap, 0);

        trace!("digit buffer grown from {} to {} digits", self.capacity(), new_cap);
        self.storage = storage;
        Ok(())
    }

    /// Appends one digit above the current most significant one.
    pub fn push(&mut self, digit: Digit) -> Result<()> {
        self.push_within(digit, MAX_MAG_LENGTH)
    }

    pub(crate) fn push_within(&mut self, digit: Digit, max_len: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(1)
            .ok_or(BigIntError::AllocationOverflow { requested: usize::MAX })?;
        self.ensure_capacity_within(required, max_len)?;
        self.storage[self.len] = digit;
        self.len = required;
        Ok(())
    }

    /// Drops the most significant digit if it is zero and not the only one.
    /// Returns whether a digit was dropped.
    pub fn pop_leading_zero(&mut self) -> bool {
        if self.len > 1 && self.storage[self.len - 1] == 0 {
            self.len -= 1;
            self.storage[self.len] = 0;
            true
        } else {
            false
        }
    }

    /// Becomes the single digit `digit`, keeping the allocation.
    pub fn reset_to(&mut self, digit: Digit) -> Result<()> {
        self.ensure_capacity(1)?;
        for x in self.storage[1..self.len.max(1)].iter_mut() {
            *x = 0;
        }
        self.storage[0] = digit;
        self.len = 1;
        Ok(())
    }
}
