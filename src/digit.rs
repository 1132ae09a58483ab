//! Single-digit arithmetic with explicit carry, borrow and high halves.
//!
//! Nothing here assumes a native double-width multiply: [`mul_digit`] builds
//! the full product out of half-digit partial products.

use crate::big_num_constants::*;

/// Returns `(a + b) mod 2^W` and whether the addition wrapped.
#[inline(always)]
pub fn add_digit(a: Digit, b: Digit) -> (Digit, bool) {
    let sum = a.wrapping_add(b);
    (sum, sum < a)
}

/// Returns `(a - b) mod 2^W` and whether the subtraction wrapped.
#[inline(always)]
pub fn sub_digit(a: Digit, b: Digit) -> (Digit, bool) {
    let diff = a.wrapping_sub(b);
    (diff, diff > a)
}

/// Returns the exact product `a * b` as `(low, high)`.
///
/// For inputs `[AH AL] * [BH BL]`:
///
/// ```text
///            [AL*BL]   r_low
///    +    [AL*BH]      r_mid1
///    +    [AH*BL]      r_mid2
///    + [AH*BH]         r_high
///    = [  high  |  low ]
/// ```
#[inline]
pub fn mul_digit(a: Digit, b: Digit) -> (Digit, Digit) {
    let a_low = a & HALF_DIGIT_MASK;
    let a_high = a >> HALF_DIGIT_BITS;
    let b_low = b & HALF_DIGIT_MASK;
    let b_high = b >> HALF_DIGIT_BITS;

    let r_low = a_low * b_low;
    let r_mid1 = a_low * b_high;
    let r_mid2 = a_high * b_low;
    let r_high = a_high * b_high;

    let (low, c1) = add_digit(r_low, r_mid1 << HALF_DIGIT_BITS);
    let (low, c2) = add_digit(low, r_mid2 << HALF_DIGIT_BITS);
    // the true high half fits in a digit, so none of these additions wrap
    let high = r_high
        + (r_mid1 >> HALF_DIGIT_BITS)
        + (r_mid2 >> HALF_DIGIT_BITS)
        + c1 as Digit
        + c2 as Digit;
    (low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "digit64"))]
    type Wide = u64;
    #[cfg(feature = "digit64")]
    type Wide = u128;

    const SAMPLES: [Digit; 10] = [
        0,
        1,
        2,
        9,
        HALF_DIGIT_MASK,
        HALF_DIGIT_MASK + 1,
        Digit::MAX / 3,
        Digit::MAX / 2 + 1,
        Digit::MAX - 1,
        Digit::MAX,
    ];

    #[test]
    fn test_add_digit() {
        assert_eq!(add_digit(1, 2), (3, false));
        assert_eq!(add_digit(Digit::MAX, 1), (0, true));
        assert_eq!(add_digit(Digit::MAX, Digit::MAX), (Digit::MAX - 1, true));
        assert_eq!(add_digit(0, 0), (0, false));
    }

    #[test]
    fn test_sub_digit() {
        assert_eq!(sub_digit(5, 3), (2, false));
        assert_eq!(sub_digit(0, 1), (Digit::MAX, true));
        assert_eq!(sub_digit(3, 3), (0, false));
        assert_eq!(sub_digit(1, Digit::MAX), (2, true));
    }

    #[test]
    fn test_mul_digit() {
        for &a in SAMPLES.iter() {
            for &b in SAMPLES.iter() {
                let expected = (a as Wide) * (b as Wide);
                let (low, high) = mul_digit(a, b);
                let got = ((high as Wide) << DIGIT_BITS) | low as Wide;
                assert_eq!(got, expected, "a = {}, b = {}", a, b);
            }
        }
    }

    #[test]
    fn test_mul_digit_max() {
        // (2^W - 1)^2 = 2^2W - 2^(W+1) + 1
        assert_eq!(mul_digit(Digit::MAX, Digit::MAX), (1, Digit::MAX - 1));
    }
}
