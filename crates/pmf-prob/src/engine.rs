//! Validate-then-compute entry point.

use pmf_core::{ComputationResult, DistributionKind, ParameterSet, Result};

use crate::math::decimal_places;
use crate::validate::{ValidatedParams, validate};
use crate::{binomial, hypergeometric, poisson};

/// Stateless façade over validation and the three evaluators.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProbabilityEngine;

impl ProbabilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate `params` for `kind`, resolve the raw decimals field, and
    /// compute the probability.
    pub fn evaluate(
        &self,
        kind: DistributionKind,
        params: &ParameterSet,
        decimals_raw: &str,
    ) -> Result<ComputationResult> {
        let validated = validate(kind, params)?;
        let decimals = decimal_places(decimals_raw)?;
        let result = self.compute(&validated, decimals);
        match &result {
            Ok(r) => tracing::debug!(%kind, decimals, probability = %r.probability, "evaluated"),
            Err(e) => tracing::debug!(%kind, error = %e, "evaluation failed"),
        }
        result
    }

    /// Dispatch already-validated parameters to their evaluator.
    pub fn compute(&self, params: &ValidatedParams, decimals: u32) -> Result<ComputationResult> {
        match params {
            ValidatedParams::Binomial(p) => binomial::compute(&p.n, &p.k, &p.p, decimals),
            ValidatedParams::Poisson(p) => poisson::compute(&p.lambda, &p.k, decimals),
            ValidatedParams::Hypergeometric(p) => {
                hypergeometric::compute(&p.population, &p.successes, &p.draws, &p.k, decimals)
            }
        }
    }
}
