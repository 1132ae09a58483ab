use std::cmp::Ordering;

use big_int_core::{BigInt, Digit, DIGIT_BITS};
use num_bigint::{BigInt as RefInt, BigUint, Sign};
use num_traits::{One, Zero};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Maps arbitrary bytes onto ASCII decimal characters.
fn decimal(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|b| b'0' + b % 10).collect()
}

fn to_ref(value: &BigInt) -> RefInt {
    let mag = value
        .magnitude()
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &d| (acc << DIGIT_BITS) + BigUint::from(d));
    let sign = if value.is_negative() { Sign::Minus } else { Sign::Plus };
    RefInt::from_biguint(sign, mag)
}

fn parse_ref(digits: &[u8], is_negative: bool) -> RefInt {
    let mag = BigUint::parse_bytes(digits, 10).expect("decimal input");
    let sign = if is_negative { Sign::Minus } else { Sign::Plus };
    RefInt::from_biguint(sign, mag)
}

fn build(bytes: &[u8], is_negative: bool) -> Option<BigInt> {
    if bytes.is_empty() {
        return None;
    }
    Some(BigInt::from_decimal_digits(&decimal(bytes), is_negative).unwrap())
}

fn assert_canonical(value: &BigInt) {
    let mag = value.magnitude();
    assert!(!mag.is_empty());
    assert!(value.len() <= value.capacity());
    if mag.len() > 1 {
        assert_ne!(*mag.last().unwrap(), 0, "leading zero digit in {:?}", mag);
    }
    if matches!(mag, [0]) {
        assert!(!value.is_negative(), "negative zero");
    }
}

#[quickcheck]
fn prop_decimal_construction_matches_reference(bytes: Vec<u8>, is_negative: bool) -> TestResult {
    let Some(value) = build(&bytes, is_negative) else {
        return TestResult::discard();
    };
    assert_canonical(&value);
    let expected = parse_ref(&decimal(&bytes), is_negative);
    if to_ref(&value) != expected {
        return TestResult::error(format!("got {}, expected {}", to_ref(&value), expected));
    }
    TestResult::passed()
}

#[quickcheck]
fn prop_increment_decrement_round_trip(bytes: Vec<u8>, is_negative: bool) -> TestResult {
    let Some(x) = build(&bytes, is_negative) else {
        return TestResult::discard();
    };
    let up = x.increment().unwrap();
    let down = x.decrement().unwrap();
    assert_canonical(&up);
    assert_canonical(&down);

    assert_eq!(to_ref(&up), to_ref(&x) + RefInt::one());
    assert_eq!(to_ref(&down), to_ref(&x) - RefInt::one());
    assert_eq!(up.decrement().unwrap(), x);
    assert_eq!(down.increment().unwrap(), x);
    TestResult::passed()
}

#[quickcheck]
fn prop_compare_is_strict_total_order(a: Vec<u8>, a_neg: bool, b: Vec<u8>, b_neg: bool) -> TestResult {
    let (Some(a), Some(b)) = (build(&a, a_neg), build(&b, b_neg)) else {
        return TestResult::discard();
    };
    let holds = [a.less_than(&b), a.equals(&b), b.less_than(&a)];
    if holds.iter().filter(|&&h| h).count() != 1 {
        return TestResult::error(format!("{:?} vs {:?}: {:?}", a, b, holds));
    }
    assert_eq!(a.compare(&b), to_ref(&a).cmp(&to_ref(&b)));
    assert_eq!(a.compare(&b), b.compare(&a).reverse());
    TestResult::passed()
}

#[quickcheck]
fn prop_is_zero_matches_compare(bytes: Vec<u8>, is_negative: bool) -> TestResult {
    let Some(x) = build(&bytes, is_negative) else {
        return TestResult::discard();
    };
    let zero = BigInt::from_decimal_digits(b"0", false).unwrap();
    assert_eq!(x.is_zero(), x.compare(&zero) == Ordering::Equal);
    assert_eq!(x.is_zero(), to_ref(&x).is_zero());
    TestResult::passed()
}

#[quickcheck]
fn prop_no_negative_zero_under_steps(start: i8, steps: Vec<bool>) -> bool {
    let mut value = BigInt::from(start);
    let mut expected = start as i64;
    for up in steps {
        if up {
            value.increment_assign().unwrap();
            expected += 1;
        } else {
            value.decrement_assign().unwrap();
            expected -= 1;
        }
        assert_canonical(&value);
        if value != BigInt::from(expected) {
            return false;
        }
    }
    true
}

#[quickcheck]
fn prop_mul_add_matches_reference(digits: Vec<Digit>, multiplier: Digit, addend: Digit) -> TestResult {
    if multiplier == 0 || digits.is_empty() {
        return TestResult::discard();
    }
    let mut value = BigInt::zero();
    for &d in digits.iter() {
        value.mul_add(multiplier, d).unwrap();
    }
    value.mul_add(multiplier, addend).unwrap();
    assert_canonical(&value);

    let expected = digits
        .iter()
        .chain(std::iter::once(&addend))
        .fold(RefInt::zero(), |acc, &d| acc * RefInt::from(multiplier) + RefInt::from(d));
    assert_eq!(to_ref(&value), expected);
    TestResult::passed()
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
}

#[test]
fn test_scenarios() {
    let zero = BigInt::from_decimal_digits(b"0", false).unwrap();
    assert!(!zero.is_negative());
    assert_eq!(zero.magnitude(), &[0]);

    let big = BigInt::from_decimal_digits(b"9999999999", false).unwrap();
    assert_eq!(to_ref(&big.increment().unwrap()), parse_ref(b"10000000000", false));

    let minus_one = zero.decrement().unwrap();
    assert_eq!(to_ref(&minus_one), RefInt::from(-1));

    let back = BigInt::from_decimal_digits(b"1", true).unwrap().increment().unwrap();
    assert!(back.is_zero());
    assert!(!back.is_negative());

    let minus_five = BigInt::from_decimal_digits(b"5", true).unwrap();
    let three = BigInt::from_decimal_digits(b"3", false).unwrap();
    assert_eq!(minus_five.compare(&three), Ordering::Less);
    assert_eq!(minus_five.compare(&minus_five.try_clone().unwrap()), Ordering::Equal);
    assert!(minus_five.equals(&BigInt::from(-5)));
}

#[test]
fn test_long_carry_chain() {
    // 2^(64 * DIGIT_BITS) - 1 has every digit set
    let all_ones = (RefInt::one() << (64 * DIGIT_BITS)) - RefInt::one();
    let digits = all_ones.to_string();
    let value = BigInt::from_decimal_digits(digits.as_bytes(), false).unwrap();
    assert_eq!(value.len(), 64);
    assert!(value.magnitude().iter().all(|&d| d == Digit::MAX));

    let next = value.increment().unwrap();
    assert_eq!(next.len(), 65);
    assert_eq!(to_ref(&next), all_ones + RefInt::one());
    assert_eq!(next.decrement().unwrap(), value);
}
