//! # BigInt
//! Sign-magnitude arbitrary-precision integers.
//! The magnitude is a little-endian sequence of [`Digit`]s with no redundant
//! leading zero, and zero is never negative.
//! # Example
//! ```
//! use big_int_core::BigInt;
//!
//! let a: BigInt = "9999999999".parse().unwrap();
//! let b = a.increment().unwrap();
//! assert_eq!(b, "10000000000".parse().unwrap());
//!
//! let minus_one = BigInt::zero().decrement().unwrap();
//! assert!(minus_one.is_negative());
//! assert!(minus_one.increment().unwrap().is_zero());
//! ```
//!

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::trace;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::digit::{add_digit, mul_digit, sub_digit};
use crate::digit_buf::DigitBuf;
use crate::error::{BigIntError, Result};

#[derive(Debug, Clone)]
pub struct BigInt {
    is_negative: bool,
    mag: DigitBuf,
}

// 实现构造
impl BigInt {
    pub(crate) fn from_small(digit: Digit, is_negative: bool) -> Self {
        BigInt {
            is_negative: is_negative && digit != 0,
            mag: DigitBuf::from_vec(vec![digit]),
        }
    }

    pub fn zero() -> BigInt {
        ZERO.clone()
    }

    pub fn one() -> BigInt {
        POS_CACHE[1].clone()
    }

    pub fn minus_one() -> BigInt {
        NEG_CACHE[1].clone()
    }

    /// Builds `±digits` from ASCII decimal characters, most significant first.
    ///
    /// The sign is passed separately; a zero result is always non-negative.
    /// Digits are folded `DECIMAL_BATCH_DIGITS` at a time through
    /// [`BigInt::mul_add`].
    pub fn from_decimal_digits(digits: &[u8], is_negative: bool) -> Result<BigInt> {
        if digits.is_empty() {
            return Err(BigIntError::EmptyDigits);
        }

        // each full batch is below 10^B < 2^W, so it never needs more than one digit
        let num_words = digits.len() / DECIMAL_BATCH_DIGITS + 1;
        let mut result = BigInt { is_negative, mag: DigitBuf::with_capacity(num_words)? };

        let mut batch_mul: Digit = 1;
        let mut batch_val: Digit = 0;
        for (index, &byte) in digits.iter().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(BigIntError::InvalidDigit { index, byte });
            }
            if batch_mul == DECIMAL_BATCH_RADIX {
                result.mul_add(batch_mul, batch_val)?;
                batch_mul = 1;
                batch_val = 0;
            }
            batch_mul *= 10;
            batch_val = batch_val * 10 + (byte - b'0') as Digit;
        }
        result.mul_add(batch_mul, batch_val)?;

        // only leading zeros were seen
        if result.mag.is_empty() {
            result.mag.reset_to(0)?;
            result.is_negative = false;
        }
        trace!("parsed {} decimal digits into {} digits", digits.len(), result.mag.len());
        Ok(result)
    }

    /// Deep copy into an independently owned buffer.
    pub fn try_clone(&self) -> Result<BigInt> {
        Ok(BigInt { is_negative: self.is_negative, mag: self.mag.try_clone()? })
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 实现访问
impl BigInt {
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    /// Significant digits, least significant first.
    #[inline]
    pub fn magnitude(&self) -> &[Digit] {
        self.mag.as_slice()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mag.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.mag.capacity()
    }

    pub fn signum(&self) -> i8 {
        if self.is_negative {
            -1
        } else if self.mag_is_zero() {
            0
        } else {
            1
        }
    }

    #[inline]
    fn mag_is_zero(&self) -> bool {
        matches!(self.mag.as_slice(), [] | [0])
    }
}

// 实现乘加
impl BigInt {
    /// `|self| = |self| * multiplier + addend`.
    ///
    /// The value is left unchanged when an error is returned.
    pub fn mul_add(&mut self, multiplier: Digit, addend: Digit) -> Result<()> {
        if multiplier == 0 {
            return Err(BigIntError::InvariantViolation("mul_add multiplier must be nonzero"));
        }
        // the pass may carry out of the top digit; make room before touching anything
        if self.mag.len() == self.mag.capacity() {
            self.mag.ensure_capacity(self.mag.len() + 1)?;
        }

        let mut carry = addend;
        for x in self.mag.as_mut_slice() {
            let (low, high) = mul_digit(*x, multiplier);
            let (sum, wrapped) = add_digit(low, carry);
            *x = sum;
            // high <= Digit::MAX - 1
            carry = high + wrapped as Digit;
        }
        if carry > 0 {
            self.mag.push(carry)?;
        }
        Ok(())
    }
}

// 实现自增自减
impl BigInt {
    /// Adds one to the magnitude, ignoring the sign.
    pub fn abs_increment(&mut self) -> Result<()> {
        self.abs_increment_within(MAX_MAG_LENGTH)
    }

    fn abs_increment_within(&mut self, max_len: usize) -> Result<()> {
        let mut carry = true;
        for x in self.mag.as_mut_slice() {
            let (sum, wrapped) = add_digit(*x, 1);
            *x = sum;
            carry = wrapped;
            if !carry {
                break;
            }
        }
        if carry {
            if let Err(err) = self.mag.push_within(1, max_len) {
                // every digit wrapped from MAX to zero
                self.mag.as_mut_slice().iter_mut().for_each(|x| *x = Digit::MAX);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Subtracts one from the magnitude, ignoring the sign.
    ///
    /// Fails with `InvariantViolation` on a zero magnitude.
    pub fn abs_decrement(&mut self) -> Result<()> {
        if self.mag_is_zero() {
            return Err(BigIntError::InvariantViolation("abs_decrement on a zero magnitude"));
        }
        let mut borrow = true;
        for x in self.mag.as_mut_slice() {
            let (diff, wrapped) = sub_digit(*x, 1);
            *x = diff;
            borrow = wrapped;
            if !borrow {
                break;
            }
        }
        debug_assert!(!borrow);

        // at most one leading zero can appear
        self.mag.pop_leading_zero();
        if self.mag_is_zero() {
            self.is_negative = false;
        }
        Ok(())
    }

    /// `self += 1` in place.
    pub fn increment_assign(&mut self) -> Result<()> {
        if self.is_negative {
            if matches!(self.mag.as_slice(), [1]) {
                self.mag.reset_to(0)?;
                self.is_negative = false;
                return Ok(());
            }
            return self.abs_decrement();
        }
        self.abs_increment()
    }

    /// `self -= 1` in place.
    pub fn decrement_assign(&mut self) -> Result<()> {
        if self.is_negative {
            return self.abs_increment();
        }
        if self.mag_is_zero() {
            self.mag.reset_to(1)?;
            self.is_negative = true;
            return Ok(());
        }
        self.abs_decrement()
    }

    /// Returns `self + 1`, leaving `self` untouched.
    pub fn increment(&self) -> Result<BigInt> {
        let mut result = self.try_clone()?;
        result.increment_assign()?;
        Ok(result)
    }

    /// Returns `self - 1`, leaving `self` untouched.
    pub fn decrement(&self) -> Result<BigInt> {
        let mut result = self.try_clone()?;
        result.decrement_assign()?;
        Ok(result)
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        let self_mag = self.mag.as_slice();
        let other_mag = other.mag.as_slice();

        if self_mag.len() < other_mag.len() {
            return Ordering::Less;
        }

        if self_mag.len() > other_mag.len() {
            return Ordering::Greater;
        }

        for (a, b) in self_mag.iter().rev().zip(other_mag.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }

    pub fn compare(&self, other: &BigInt) -> Ordering {
        if self.is_negative != other.is_negative {
            return if self.is_negative { Ordering::Less } else { Ordering::Greater };
        }
        if self.is_negative {
            self.compare_mag(other).reverse()
        } else {
            self.compare_mag(other)
        }
    }

    pub fn equals(&self, other: &BigInt) -> bool {
        self.compare(other).is_eq()
    }

    pub fn less_than(&self, other: &BigInt) -> bool {
        self.compare(other).is_lt()
    }

    pub fn is_zero(&self) -> bool {
        self.compare(&ZERO).is_eq()
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_negative.hash(state);
        self.mag.as_slice().hash(state);
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = BigIntError;

    /// Accepts an optional sign, decimal digits and an optional trailing `n`.
    fn from_str(val: &str) -> Result<BigInt> {
        let bytes = val.as_bytes();
        let (is_negative, rest) = match bytes.split_first() {
            Some((b'-', rest)) => (true, rest),
            Some((b'+', rest)) => (false, rest),
            _ => (false, bytes),
        };
        let digits = rest.strip_suffix(b"n").unwrap_or(rest);
        let offset = bytes.len() - rest.len();

        BigInt::from_decimal_digits(digits, is_negative).map_err(|err| match err {
            BigIntError::InvalidDigit { index, byte } => {
                BigIntError::InvalidDigit { index: index + offset, byte }
            }
            err => err,
        })
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of((val as i64).unsigned_abs(), val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

impl BigInt {
    fn value_of(val: u64, is_negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            return if is_negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            };
        }
        let mut mag = Vec::with_capacity((u64::BITS / DIGIT_BITS) as usize);
        let mut rest = val;
        while rest != 0 {
            mag.push(rest as Digit);
            rest = rest.checked_shr(DIGIT_BITS).unwrap_or(0);
        }
        BigInt { is_negative, mag: DigitBuf::from_vec(mag) }
    }
}

#[cfg(test)]
fn parse(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[cfg(test)]
fn raw(digits: &[Digit], is_negative: bool) -> BigInt {
    BigInt { is_negative, mag: DigitBuf::from_digits(digits).unwrap() }
}

#[test]
fn test_from_decimal_zero() {
    let zero = BigInt::from_decimal_digits(b"0", false).unwrap();
    assert!(!zero.is_negative());
    assert_eq!(zero.magnitude(), &[0]);

    let zeros = BigInt::from_decimal_digits(b"0000000000000000000000", true).unwrap();
    assert!(!zeros.is_negative());
    assert_eq!(zeros.magnitude(), &[0]);
    assert_eq!(zeros, BigInt::zero());
}

#[test]
fn test_from_decimal_digits() {
    let a = BigInt::from_decimal_digits(b"123", true).unwrap();
    assert!(a.is_negative());
    assert_eq!(a.magnitude(), &[123]);

    assert_eq!(BigInt::from_decimal_digits(b"4294967296", false).unwrap(), BigInt::from(1u64 << 32));
    assert_eq!(
        BigInt::from_decimal_digits(b"18446744073709551615", false).unwrap(),
        BigInt::from(u64::MAX)
    );
    assert_eq!(
        BigInt::from_decimal_digits(b"0009223372036854775808", true).unwrap(),
        BigInt::from(i64::MIN)
    );
}

#[test]
fn test_from_decimal_batch_boundaries() {
    // one short of, exactly, and one past a full batch
    for len in [DECIMAL_BATCH_DIGITS - 1, DECIMAL_BATCH_DIGITS, DECIMAL_BATCH_DIGITS + 1] {
        let digits = "1".repeat(len);
        let a = BigInt::from_decimal_digits(digits.as_bytes(), false).unwrap();
        let expected = digits.parse::<u64>().unwrap();
        assert_eq!(a, BigInt::from(expected), "len = {}", len);
    }
}

#[test]
fn test_from_decimal_rejects_bad_input() {
    assert_eq!(BigInt::from_decimal_digits(b"", false), Err(BigIntError::EmptyDigits));
    assert_eq!(
        BigInt::from_decimal_digits(b"12a4", false),
        Err(BigIntError::InvalidDigit { index: 2, byte: b'a' })
    );
    assert_eq!(
        "-12x".parse::<BigInt>(),
        Err(BigIntError::InvalidDigit { index: 3, byte: b'x' })
    );
    assert_eq!("-".parse::<BigInt>(), Err(BigIntError::EmptyDigits));
}

#[test]
fn test_from_str() {
    assert_eq!(parse("-42"), BigInt::from(-42));
    assert_eq!(parse("+42"), BigInt::from(42));
    assert_eq!(parse("42n"), BigInt::from(42));
    assert_eq!(parse("-0n"), BigInt::zero());
    assert!(!parse("-0").is_negative());
}

#[test]
fn test_from_native() {
    assert_eq!(BigInt::from(0u8), BigInt::zero());
    assert_eq!(BigInt::from(-1i32), BigInt::minus_one());
    assert_eq!(BigInt::from(1usize), BigInt::one());
    assert!(!BigInt::from(0i64).is_negative());
    assert_eq!(BigInt::from(17i16).magnitude(), &[17]);
    let min = BigInt::from(i64::MIN);
    assert!(min.is_negative());
    assert_eq!(min.magnitude(), BigInt::from(1u64 << 63).magnitude());
    assert_eq!(min.increment().unwrap(), BigInt::from(i64::MIN + 1));
}

#[test]
fn test_mul_add() {
    let mut a = BigInt::from(5);
    a.mul_add(10, 3).unwrap();
    assert_eq!(a, BigInt::from(53));

    let mut b = raw(&[Digit::MAX], false);
    b.mul_add(Digit::MAX, Digit::MAX).unwrap();
    // (2^W - 1)^2 + 2^W - 1 = 2^2W - 2^W
    assert_eq!(b.magnitude(), &[0, Digit::MAX]);

    let mut c = BigInt::from(5);
    assert_eq!(
        c.mul_add(0, 1),
        Err(BigIntError::InvariantViolation("mul_add multiplier must be nonzero"))
    );
    assert_eq!(c, BigInt::from(5));
}

#[test]
fn test_batch_invariance() {
    let digits = b"123456789123456789";
    let batched = BigInt::from_decimal_digits(digits, false).unwrap();

    let mut single = BigInt::zero();
    for &d in digits.iter() {
        single.mul_add(10, (d - b'0') as Digit).unwrap();
    }
    assert_eq!(batched.magnitude(), single.magnitude());
    assert_eq!(batched, BigInt::from(123456789123456789u64));
}

#[test]
fn test_increment_scenarios() {
    assert_eq!(parse("9999999999").increment().unwrap(), parse("10000000000"));
    assert_eq!(parse("0").decrement().unwrap(), parse("-1"));

    let zero = parse("-1").increment().unwrap();
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero.magnitude(), &[0]);

    assert_eq!(parse("-2").increment().unwrap(), parse("-1"));
    assert_eq!(parse("-1").decrement().unwrap(), parse("-2"));
    assert_eq!(parse("1").decrement().unwrap(), parse("0"));
}

#[test]
fn test_increment_leaves_input_untouched() {
    let a = parse("41");
    let b = a.increment().unwrap();
    assert_eq!(a, BigInt::from(41));
    assert_eq!(b, BigInt::from(42));
    let c = a.decrement().unwrap();
    assert_eq!(a, BigInt::from(41));
    assert_eq!(c, BigInt::from(40));
}

#[test]
fn test_increment_carries_across_digits() {
    let mut a = raw(&[Digit::MAX, Digit::MAX], false);
    a.increment_assign().unwrap();
    assert_eq!(a.magnitude(), &[0, 0, 1]);

    a.decrement_assign().unwrap();
    assert_eq!(a.magnitude(), &[Digit::MAX, Digit::MAX]);

    let mut b = raw(&[Digit::MAX, Digit::MAX], true);
    b.decrement_assign().unwrap();
    assert!(b.is_negative());
    assert_eq!(b.magnitude(), &[0, 0, 1]);
    b.increment_assign().unwrap();
    assert_eq!(b.magnitude(), &[Digit::MAX, Digit::MAX]);
}

#[test]
fn test_growth_on_full_buffer() {
    let mut a = raw(&[Digit::MAX, Digit::MAX], false);
    assert_eq!(a.capacity(), 2);
    a.increment_assign().unwrap();
    assert_eq!(a.capacity(), 4);
    assert_eq!(a.magnitude(), &[0, 0, 1]);

    // no carry out, no reallocation
    let mut b = raw(&[Digit::MAX, 5], false);
    b.increment_assign().unwrap();
    assert_eq!(b.capacity(), 2);
    assert_eq!(b.magnitude(), &[0, 6]);
}

#[test]
fn test_growth_failure_is_reported() {
    let mut a = raw(&[Digit::MAX, Digit::MAX], false);
    assert_eq!(
        a.abs_increment_within(3),
        Err(BigIntError::AllocationOverflow { requested: 4 })
    );
    assert_eq!(a.magnitude(), &[Digit::MAX, Digit::MAX]);
}

#[test]
fn test_abs_decrement_on_zero() {
    let mut zero = BigInt::zero();
    assert_eq!(
        zero.abs_decrement(),
        Err(BigIntError::InvariantViolation("abs_decrement on a zero magnitude"))
    );
    assert_eq!(zero, BigInt::zero());

    // crossing to zero through the unsigned path still yields an unsigned zero
    let mut minus_one = BigInt::minus_one();
    minus_one.abs_decrement().unwrap();
    assert!(!minus_one.is_negative());
    assert!(minus_one.is_zero());
}

#[test]
fn test_compare() {
    assert_eq!(parse("-5").compare(&parse("3")), Ordering::Less);
    assert_eq!(parse("3").compare(&parse("-5")), Ordering::Greater);
    assert_eq!(parse("-5").compare(&parse("-5")), Ordering::Equal);
    assert!(parse("-5").equals(&parse("-5")));
    assert!(parse("-6").less_than(&parse("-5")));
    assert!(parse("5").less_than(&parse("6")));
    assert!(parse("4294967295").less_than(&parse("4294967296")));
    assert!(parse("-4294967296").less_than(&parse("-4294967295")));
    assert_eq!(parse("0").compare(&parse("-0")), Ordering::Equal);
    assert!(parse("0").is_zero());
    assert!(!parse("1").is_zero());
}

#[test]
fn test_signum() {
    assert_eq!(BigInt::zero().signum(), 0);
    assert_eq!(BigInt::from(7).signum(), 1);
    assert_eq!(BigInt::from(-7).signum(), -1);
}

#[test]
fn test_try_clone_is_deep() {
    let a = parse("123456789012345678901234567890");
    let mut b = a.try_clone().unwrap();
    b.increment_assign().unwrap();
    assert_eq!(a, parse("123456789012345678901234567890"));
    assert_eq!(b, parse("123456789012345678901234567891"));
}
