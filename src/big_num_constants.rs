/// The base unit of a magnitude, radix `2^DIGIT_BITS`.
#[cfg(not(feature = "digit64"))]
pub type Digit = u32;

#[cfg(feature = "digit64")]
pub type Digit = u64;

pub const DIGIT_BITS: u32 = Digit::BITS;

pub const HALF_DIGIT_BITS: u32 = DIGIT_BITS / 2;

pub const HALF_DIGIT_MASK: Digit = (1 << HALF_DIGIT_BITS) - 1;

/// Number of decimal characters folded into one `mul_add` step,
/// `floor(log10(2^DIGIT_BITS))`.
pub const DECIMAL_BATCH_DIGITS: usize = decimal_batch_digits();

/// `10^DECIMAL_BATCH_DIGITS`, the multiplier of a full batch.
pub const DECIMAL_BATCH_RADIX: Digit = pow10(DECIMAL_BATCH_DIGITS);

pub const INITIAL_CAPACITY: usize = 4;

/// Largest digit count whose byte size still fits in `isize`.
pub const MAX_MAG_LENGTH: usize = isize::MAX as usize / std::mem::size_of::<Digit>();

/// Magnitudes up to this value are served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;

const fn decimal_batch_digits() -> usize {
    let mut n = 0;
    let mut p: Digit = 1;
    while p <= Digit::MAX / 10 {
        p *= 10;
        n += 1;
    }
    n
}

pub const fn pow10(exp: usize) -> Digit {
    let mut p: Digit = 1;
    let mut i = 0;
    while i < exp {
        p *= 10;
        i += 1;
    }
    p
}

#[test]
fn test_batch_constants() {
    #[cfg(not(feature = "digit64"))]
    {
        assert_eq!(DECIMAL_BATCH_DIGITS, 9);
        assert_eq!(DECIMAL_BATCH_RADIX, 1_000_000_000);
    }
    #[cfg(feature = "digit64")]
    {
        assert_eq!(DECIMAL_BATCH_DIGITS, 19);
        assert_eq!(DECIMAL_BATCH_RADIX, 10_000_000_000_000_000_000);
    }
    // largest power of ten that fits in a digit
    assert!(DECIMAL_BATCH_RADIX.checked_mul(10).is_none());
    assert_eq!(HALF_DIGIT_MASK.count_ones(), HALF_DIGIT_BITS);
}
