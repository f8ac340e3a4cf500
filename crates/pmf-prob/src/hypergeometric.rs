//! Hypergeometric distribution.
//!
//! Drawing `n` items without replacement from a population of `N` that holds
//! `K` successes; `k` is the number of successes drawn.

use bigdecimal::BigDecimal;
use pmf_core::{ComputationResult, DistributionKind, Error, RenderedTerms, Result};

use crate::factorial::choose;
use crate::math::{checked_div, to_count};
use crate::validate::{HypergeometricParams, hypergeometric_violations, reject};

/// PMF: `C(K, k) * C(N - K, n - k) / C(N, n)`.
pub fn pmf(
    population: &BigDecimal,
    successes: &BigDecimal,
    draws: &BigDecimal,
    k: &BigDecimal,
) -> Result<BigDecimal> {
    let population = to_count(population)?;
    let successes = to_count(successes)?;
    let draws = to_count(draws)?;
    let k = to_count(k)?;
    let failures = population.checked_sub(successes).ok_or_else(|| negative("N - K"))?;
    let draws_minus_k = draws.checked_sub(k).ok_or_else(|| negative("n - k"))?;

    let hits = choose(successes, k)? * choose(failures, draws_minus_k)?;
    let total = choose(population, draws)?;
    checked_div(&BigDecimal::new(hits, 0), &BigDecimal::new(total, 0))
}

fn negative(what: &str) -> Error {
    Error::Computation(format!("{} is negative", what))
}

/// Evaluate the hypergeometric PMF and collect the terms for rendering.
pub fn compute(
    population: &BigDecimal,
    successes: &BigDecimal,
    draws: &BigDecimal,
    k: &BigDecimal,
    decimals: u32,
) -> Result<ComputationResult> {
    reject(hypergeometric_violations(&HypergeometricParams {
        population: population.clone(),
        successes: successes.clone(),
        draws: draws.clone(),
        k: k.clone(),
    }))?;

    let probability = pmf(population, successes, draws, k)?;
    Ok(ComputationResult {
        kind: DistributionKind::Hypergeometric,
        probability,
        terms: RenderedTerms::Hypergeometric {
            population: population.clone(),
            successes: successes.clone(),
            draws: draws.clone(),
            k: k.clone(),
            failures: population - successes,
            draws_minus_k: draws - k,
        },
        decimals,
    })
}
