//! Factorial and binomial coefficient over exact decimals.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use pmf_core::{Error, Result};

use crate::math::to_count;

/// `x!` for a non-negative integer-valued decimal.
///
/// Multiplies from 2 up to `x` inclusive starting from 1, so `0! = 1! = 1`.
/// Non-integer, negative, or out-of-range arguments are a computation error.
pub fn factorial(x: &BigDecimal) -> Result<BigDecimal> {
    Ok(BigDecimal::new(factorial_u64(to_count(x)?), 0))
}

fn factorial_u64(n: u64) -> BigInt {
    let mut acc = BigInt::one();
    for i in 2..=n {
        acc *= i;
    }
    acc
}

/// `C(a, b) = a! / (b! (a - b)!)`, exact. Zero when `b > a`.
pub fn binomial_coefficient(a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal> {
    Ok(BigDecimal::new(choose(to_count(a)?, to_count(b)?)?, 0))
}

/// Integer form of [`binomial_coefficient`].
pub(crate) fn choose(a: u64, b: u64) -> Result<BigInt> {
    if b > a {
        return Ok(BigInt::zero());
    }
    let denom = factorial_u64(b) * factorial_u64(a - b);
    if denom.is_zero() {
        return Err(Error::Computation("zero factorial product".to_string()));
    }
    Ok(factorial_u64(a) / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_small_factorials() {
        assert_eq!(factorial(&d("0")).unwrap(), d("1"));
        assert_eq!(factorial(&d("1")).unwrap(), d("1"));
        assert_eq!(factorial(&d("5")).unwrap(), d("120"));
        assert_eq!(factorial(&d("5.0")).unwrap(), d("120"));
    }

    #[test]
    fn test_large_factorial_is_exact() {
        // 25! overflows u64 and loses digits in f64.
        assert_eq!(factorial(&d("25")).unwrap(), d("15511210043330985984000000"));
    }

    #[test]
    fn test_factorial_rejects_bad_arguments() {
        assert!(matches!(factorial(&d("-1")), Err(Error::Computation(_))));
        assert!(matches!(factorial(&d("2.5")), Err(Error::Computation(_))));
        assert!(matches!(factorial(&d("10001")), Err(Error::Computation(_))));
        assert!(matches!(factorial(&d("1e18")), Err(Error::Computation(_))));
    }

    #[test]
    fn test_binomial_coefficient() {
        assert_eq!(binomial_coefficient(&d("10"), &d("5")).unwrap(), d("252"));
        assert_eq!(binomial_coefficient(&d("5"), &d("0")).unwrap(), d("1"));
        assert_eq!(binomial_coefficient(&d("5"), &d("5")).unwrap(), d("1"));
        assert_eq!(binomial_coefficient(&d("0"), &d("0")).unwrap(), d("1"));
        assert_eq!(
            binomial_coefficient(&d("60"), &d("30")).unwrap(),
            d("118264581564861424")
        );
        assert_eq!(binomial_coefficient(&d("3"), &d("4")).unwrap(), BigDecimal::zero());
        assert!(binomial_coefficient(&d("3"), &d("-1")).is_err());
        assert!(binomial_coefficient(&d("1e1000000000"), &d("1")).is_err());
    }

    #[test]
    fn test_pascal_rule() {
        for n in 1u64..20 {
            for k in 1..n {
                let lhs = binomial_coefficient(&n.into(), &k.into()).unwrap();
                let rhs = binomial_coefficient(&(n - 1).into(), &(k - 1).into()).unwrap()
                    + binomial_coefficient(&(n - 1).into(), &k.into()).unwrap();
                assert_eq!(lhs, rhs, "n={} k={}", n, k);
            }
        }
    }
}
