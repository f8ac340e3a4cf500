//! Invariants of the exact PMFs, checked with proptest.

use bigdecimal::BigDecimal;
use num_traits::{One, ToPrimitive, Zero};
use pmf_core::{DistributionKind, Error, ParameterSet, Violation};
use pmf_prob::{ProbabilityEngine, compute_binomial, compute_hypergeometric, compute_poisson};
use proptest::prelude::*;

/// `m / 1000` as an exact decimal.
fn thousandths(m: u32) -> BigDecimal {
    BigDecimal::new(m.into(), 3)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn binomial_is_a_probability(
        (n, k) in (0u64..40).prop_flat_map(|n| (Just(n), 0..=n)),
        m in 0u32..=1000,
    ) {
        let r = compute_binomial(&n.into(), &k.into(), &thousandths(m), 10).unwrap();
        prop_assert!(r.probability >= BigDecimal::zero());
        prop_assert!(r.probability <= BigDecimal::one());
    }

    #[test]
    fn binomial_sums_to_exactly_one(n in 0u64..16, m in 0u32..=1000) {
        let p = thousandths(m);
        let mut total = BigDecimal::zero();
        for k in 0..=n {
            total += compute_binomial(&n.into(), &k.into(), &p, 10).unwrap().probability;
        }
        prop_assert_eq!(total, BigDecimal::one());
    }

    #[test]
    fn poisson_is_a_probability(m in 0u32..20_000, k in 0u64..30) {
        let r = compute_poisson(&thousandths(m), &k.into(), 10).unwrap();
        prop_assert!(r.probability >= BigDecimal::zero());
        prop_assert!(r.probability <= BigDecimal::one());
    }

    #[test]
    fn hypergeometric_sums_to_one(
        (population, successes, draws) in (1u64..30)
            .prop_flat_map(|n| (Just(n), 0..=n, 0..=n))
    ) {
        let mut total = 0.0;
        for k in 0..=successes.min(draws) {
            let r = compute_hypergeometric(
                &population.into(), &successes.into(), &draws.into(), &k.into(), 10,
            ).unwrap();
            total += r.probability.to_f64().unwrap();
        }
        prop_assert!((total - 1.0).abs() < 1e-12, "total={}", total);
    }

    #[test]
    fn evaluation_is_idempotent(m in 0u32..5_000, k in 0u64..12) {
        let engine = ProbabilityEngine::new();
        let params = ParameterSet::new()
            .with("lambda", thousandths(m).to_string())
            .with("k", k.to_string());
        let a = engine.evaluate(DistributionKind::Poisson, &params, "8").unwrap();
        let b = engine.evaluate(DistributionKind::Poisson, &params, "8").unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn k_above_n_reports_only_k(n in 0u64..50, extra in 1u64..10) {
        let params = ParameterSet::new()
            .with("n", n.to_string())
            .with("k", (n + extra).to_string())
            .with("p", "0.5");
        let err = ProbabilityEngine::new()
            .evaluate(DistributionKind::Binomial, &params, "")
            .unwrap_err();
        match err {
            Error::Validation(v) => prop_assert_eq!(
                v.as_slice().to_vec(),
                vec![Violation::IntegerUpTo { param: "k", upper: "n" }]
            ),
            other => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn exponent_notation_is_rejected_not_expanded(exp in 5i64..=2_000_000_000) {
        let engine = ProbabilityEngine::new();
        let big = format!("1e{}", exp);
        let tiny = format!("1e-{}", exp + 100);

        let params = ParameterSet::new().with("n", big.as_str()).with("k", "1").with("p", "0.5");
        let err = engine.evaluate(DistributionKind::Binomial, &params, "").unwrap_err();
        prop_assert!(err.is_invalid_input());

        let params = ParameterSet::new().with("n", "4").with("k", "1").with("p", tiny.as_str());
        let err = engine.evaluate(DistributionKind::Binomial, &params, "").unwrap_err();
        prop_assert!(err.is_invalid_input());

        let params = ParameterSet::new().with("lambda", big.as_str()).with("k", "2");
        let err = engine.evaluate(DistributionKind::Poisson, &params, "").unwrap_err();
        prop_assert!(err.is_invalid_input());
    }
}

#[test]
fn negative_n_and_large_p_reported_together() {
    let params = ParameterSet::new().with("n", "-3").with("k", "0").with("p", "1.2");
    let err =
        ProbabilityEngine::new().evaluate(DistributionKind::Binomial, &params, "").unwrap_err();
    let msgs = err.violations().unwrap().messages();
    assert!(msgs.contains(&"n must be an integer >= 0".to_string()));
    assert!(msgs.contains(&"p must be in the range [0, 1]".to_string()));
}
