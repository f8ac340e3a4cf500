//! Input validation for raw parameter sets.
//!
//! Three passes, in order:
//! 1. presence: every missing field is reported, then validation stops;
//! 2. parsing: the first field that is not a decimal aborts with
//!    [`Error::InvalidInput`];
//! 3. constraints: every violated constraint is collected and reported together.

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};
use pmf_core::{DistributionKind, Error, ParameterSet, Result, Violation, Violations};

use crate::math::{is_count, is_integer, is_negative, parse_decimal};

/// Binomial parameters: `n` trials, success probability `p`, outcome `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialParams {
    pub n: BigDecimal,
    pub k: BigDecimal,
    pub p: BigDecimal,
}

/// Poisson parameters: rate `lambda`, outcome `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonParams {
    pub lambda: BigDecimal,
    pub k: BigDecimal,
}

/// Hypergeometric parameters: population `N`, successes `K`, draws `n`, outcome `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct HypergeometricParams {
    pub population: BigDecimal,
    pub successes: BigDecimal,
    pub draws: BigDecimal,
    pub k: BigDecimal,
}

/// A parameter set that passed every check for its distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedParams {
    Binomial(BinomialParams),
    Poisson(PoissonParams),
    Hypergeometric(HypergeometricParams),
}

impl ValidatedParams {
    pub fn kind(&self) -> DistributionKind {
        match self {
            ValidatedParams::Binomial(_) => DistributionKind::Binomial,
            ValidatedParams::Poisson(_) => DistributionKind::Poisson,
            ValidatedParams::Hypergeometric(_) => DistributionKind::Hypergeometric,
        }
    }
}

/// Validate raw input for `kind`.
pub fn validate(kind: DistributionKind, params: &ParameterSet) -> Result<ValidatedParams> {
    let missing: Vec<Violation> = kind
        .required_params()
        .iter()
        .filter(|name| params.is_blank(name))
        .map(|&name| Violation::Missing(name))
        .collect();
    reject(missing)?;

    let field = |name: &str| parse_decimal(params.get(name).unwrap_or_default());

    match kind {
        DistributionKind::Binomial => {
            let p = BinomialParams { n: field("n")?, k: field("k")?, p: field("p")? };
            reject(binomial_violations(&p))?;
            Ok(ValidatedParams::Binomial(p))
        }
        DistributionKind::Poisson => {
            let p = PoissonParams { lambda: field("lambda")?, k: field("k")? };
            reject(poisson_violations(&p))?;
            Ok(ValidatedParams::Poisson(p))
        }
        DistributionKind::Hypergeometric => {
            let p = HypergeometricParams {
                population: field("N")?,
                successes: field("K")?,
                draws: field("n")?,
                k: field("k")?,
            };
            reject(hypergeometric_violations(&p))?;
            Ok(ValidatedParams::Hypergeometric(p))
        }
    }
}

/// `Err(Validation)` when the list is non-empty.
pub(crate) fn reject(list: Vec<Violation>) -> Result<()> {
    match Violations::new(list) {
        Some(v) => Err(Error::Validation(v)),
        None => Ok(()),
    }
}

/// `n` integer >= 0; `k` integer in `[0, n]`; `p` in `[0, 1]`.
pub fn binomial_violations(p: &BinomialParams) -> Vec<Violation> {
    let mut out = Vec::new();
    if !is_count(&p.n) {
        out.push(Violation::NonNegativeInteger("n"));
    }
    if !is_count(&p.k) || p.k > p.n {
        out.push(Violation::IntegerUpTo { param: "k", upper: "n" });
    }
    if is_negative(&p.p) || p.p > BigDecimal::one() {
        out.push(Violation::UnitInterval("p"));
    }
    out
}

/// `lambda` >= 0; `k` integer >= 0.
pub fn poisson_violations(p: &PoissonParams) -> Vec<Violation> {
    let mut out = Vec::new();
    if is_negative(&p.lambda) {
        out.push(Violation::NonNegative("lambda"));
    }
    if !is_count(&p.k) {
        out.push(Violation::NonNegativeInteger("k"));
    }
    out
}

/// `N` integer > 0; `K`, `n` integers in `[0, N]`; `k` integer in `[0, min(K, n)]`.
pub fn hypergeometric_violations(p: &HypergeometricParams) -> Vec<Violation> {
    let mut out = Vec::new();
    if !is_integer(&p.population) || p.population <= BigDecimal::zero() {
        out.push(Violation::PositiveInteger("N"));
    }
    if !is_count(&p.successes) || p.successes > p.population {
        out.push(Violation::IntegerUpTo { param: "K", upper: "N" });
    }
    if !is_count(&p.draws) || p.draws > p.population {
        out.push(Violation::IntegerUpTo { param: "n", upper: "N" });
    }
    if !is_count(&p.k) || p.k > p.draws || p.k > p.successes {
        out.push(Violation::IntegerUpToMin { param: "k", a: "K", b: "n" });
    }
    out
}
