use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    /// Canonical zero: magnitude `[0]`, never negative.
    pub static ref ZERO: BigInt = BigInt::from_small(0, false);

    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::from_small(i as Digit, false));

    /// `NEG_CACHE[0]` is the canonical zero as well.
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInt::from_small(i as Digit, true));
}

#[test]
fn test_cache_is_canonical() {
    assert!(!ZERO.is_negative());
    assert_eq!(ZERO.magnitude(), &[0]);
    assert!(!NEG_CACHE[0].is_negative());
    for i in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[i].magnitude(), &[i as Digit]);
        assert_eq!(NEG_CACHE[i].magnitude(), &[i as Digit]);
        assert!(!POS_CACHE[i].is_negative());
        assert!(NEG_CACHE[i].is_negative());
    }
}
