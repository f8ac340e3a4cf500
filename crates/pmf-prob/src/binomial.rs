//! Binomial distribution.

use bigdecimal::BigDecimal;
use num_traits::One;
use pmf_core::{ComputationResult, DistributionKind, Error, RenderedTerms, Result};

use crate::factorial::choose;
use crate::math::{bounded_fraction, powu, to_count};
use crate::validate::{BinomialParams, binomial_violations, reject};

/// Exact PMF of `Binom(n, p)` at `k`: `C(n, k) * p^k * (1 - p)^(n - k)`.
///
/// Counts are converted before any decimal arithmetic, and `p` is bounded to
/// a finite number of fractional digits before `1 - p` is formed.
pub fn pmf(n: &BigDecimal, k: &BigDecimal, p: &BigDecimal) -> Result<BigDecimal> {
    let (n, k) = (to_count(n)?, to_count(k)?);
    let n_minus_k = n
        .checked_sub(k)
        .ok_or_else(|| Error::Computation(format!("k = {} exceeds n = {}", k, n)))?;
    let p = bounded_fraction("p", p)?;
    let q = BigDecimal::one() - &p;
    let coef = BigDecimal::new(choose(n, k)?, 0);
    Ok(coef * powu(&p, k) * powu(&q, n_minus_k))
}

/// Evaluate the binomial PMF and collect the terms for rendering.
pub fn compute(
    n: &BigDecimal,
    k: &BigDecimal,
    p: &BigDecimal,
    decimals: u32,
) -> Result<ComputationResult> {
    reject(binomial_violations(&BinomialParams { n: n.clone(), k: k.clone(), p: p.clone() }))?;

    let probability = pmf(n, k, p)?;
    Ok(ComputationResult {
        kind: DistributionKind::Binomial,
        probability,
        terms: RenderedTerms::Binomial {
            n: n.clone(),
            k: k.clone(),
            p: p.clone(),
            q: BigDecimal::one() - p,
            n_minus_k: n - k,
        },
        decimals,
    })
}
