//! Poisson distribution.

use bigdecimal::BigDecimal;
use num_traits::One;
use pmf_core::{ComputationResult, DistributionKind, RenderedTerms, Result};

use crate::factorial::factorial;
use crate::math::{bounded_rate, checked_div, powu, to_count};
use crate::validate::{PoissonParams, poisson_violations, reject};

/// `e^(-lambda)`, evaluated as `1 / e^lambda` so the series never alternates.
fn exp_neg(lambda: &BigDecimal) -> Result<BigDecimal> {
    checked_div(&BigDecimal::one(), &lambda.exp())
}

/// PMF of `Poisson(lambda)` at `k`: `e^(-lambda) * lambda^k / k!`.
pub fn pmf(lambda: &BigDecimal, k: &BigDecimal) -> Result<BigDecimal> {
    let count = to_count(k)?;
    let lambda = bounded_rate("lambda", lambda)?;
    let numer = exp_neg(&lambda)? * powu(&lambda, count);
    checked_div(&numer, &factorial(k)?)
}

/// Evaluate the Poisson PMF and collect the terms for rendering.
pub fn compute(lambda: &BigDecimal, k: &BigDecimal, decimals: u32) -> Result<ComputationResult> {
    reject(poisson_violations(&PoissonParams { lambda: lambda.clone(), k: k.clone() }))?;

    let probability = pmf(lambda, k)?;
    Ok(ComputationResult {
        kind: DistributionKind::Poisson,
        probability,
        terms: RenderedTerms::Poisson { lambda: lambda.clone(), k: k.clone() },
        decimals,
    })
}
