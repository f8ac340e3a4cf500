//! Common data types for the PMF engine

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// The discrete distributions the engine can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    /// `Binom(n, p)` evaluated at `k`
    Binomial,
    /// `Hypergeom(N, K, n)` evaluated at `k`
    Hypergeometric,
    /// `Poisson(lambda)` evaluated at `k`
    Poisson,
}

impl DistributionKind {
    /// All kinds, in menu order.
    pub const ALL: [DistributionKind; 3] =
        [DistributionKind::Binomial, DistributionKind::Hypergeometric, DistributionKind::Poisson];

    /// Lowercase name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            DistributionKind::Binomial => "binomial",
            DistributionKind::Hypergeometric => "hypergeometric",
            DistributionKind::Poisson => "poisson",
        }
    }

    /// Required parameter names, in the order they are checked for presence.
    pub fn required_params(self) -> &'static [&'static str] {
        match self {
            DistributionKind::Binomial => &["n", "k", "p"],
            DistributionKind::Hypergeometric => &["N", "K", "n", "k"],
            DistributionKind::Poisson => &["lambda", "k"],
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binomial" => Ok(DistributionKind::Binomial),
            "hypergeometric" => Ok(DistributionKind::Hypergeometric),
            "poisson" => Ok(DistributionKind::Poisson),
            other => Err(format!(
                "unknown distribution '{}', expected one of: binomial, hypergeometric, poisson",
                other
            )),
        }
    }
}

/// Raw user input: parameter name -> unparsed string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, String>);

impl ParameterSet {
    /// Empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.insert(name, raw);
        self
    }

    /// Insert or replace a raw value.
    pub fn insert(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.0.insert(name.into(), raw.into());
    }

    /// Raw value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether `name` is absent or blank after trimming.
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).is_none_or(|s| s.trim().is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A single violated input constraint.
///
/// Parameter names are the same static strings as
/// [`DistributionKind::required_params`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Field left empty.
    Missing(&'static str),
    /// Must be an integer `>= 0`.
    NonNegativeInteger(&'static str),
    /// Must be an integer `> 0`.
    PositiveInteger(&'static str),
    /// Must be `>= 0` (any real).
    NonNegative(&'static str),
    /// Must lie in `[0, 1]`.
    UnitInterval(&'static str),
    /// Must be an integer in `[0, upper]`.
    IntegerUpTo { param: &'static str, upper: &'static str },
    /// Must be an integer in `[0, min(a, b)]`.
    IntegerUpToMin { param: &'static str, a: &'static str, b: &'static str },
}

impl Violation {
    /// Name of the offending parameter.
    pub fn param(&self) -> &'static str {
        match self {
            Violation::Missing(p)
            | Violation::NonNegativeInteger(p)
            | Violation::PositiveInteger(p)
            | Violation::NonNegative(p)
            | Violation::UnitInterval(p) => p,
            Violation::IntegerUpTo { param, .. } | Violation::IntegerUpToMin { param, .. } => param,
        }
    }

    /// LaTeX fragment for display inside an `align*` block.
    pub fn latex(&self) -> String {
        match self {
            Violation::Missing(p) => format!("\\text{{Enter a value for }} {}", latex_symbol(p)),
            Violation::NonNegativeInteger(p) => {
                format!("{} \\text{{ must be an integer }} \\geq 0", latex_symbol(p))
            }
            Violation::PositiveInteger(p) => {
                format!("{} \\text{{ must be an integer }} > 0", latex_symbol(p))
            }
            Violation::NonNegative(p) => format!("{} \\text{{ must be }} \\geq 0", latex_symbol(p)),
            Violation::UnitInterval(p) => {
                format!("{} \\text{{ must be in the range }} [0, 1]", latex_symbol(p))
            }
            Violation::IntegerUpTo { param, upper } => format!(
                "{} \\text{{ must be an integer in }} [0, {}]",
                latex_symbol(param),
                latex_symbol(upper)
            ),
            Violation::IntegerUpToMin { param, a, b } => format!(
                "{} \\text{{ must be an integer in }} [0, \\min({}, {})]",
                latex_symbol(param),
                latex_symbol(a),
                latex_symbol(b)
            ),
        }
    }
}

fn latex_symbol(name: &str) -> String {
    match name {
        "lambda" => "\\lambda".to_string(),
        other => other.to_string(),
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing(p) => write!(f, "enter a value for {}", p),
            Violation::NonNegativeInteger(p) => write!(f, "{} must be an integer >= 0", p),
            Violation::PositiveInteger(p) => write!(f, "{} must be an integer > 0", p),
            Violation::NonNegative(p) => write!(f, "{} must be >= 0", p),
            Violation::UnitInterval(p) => write!(f, "{} must be in the range [0, 1]", p),
            Violation::IntegerUpTo { param, upper } => {
                write!(f, "{} must be an integer in [0, {}]", param, upper)
            }
            Violation::IntegerUpToMin { param, a, b } => {
                write!(f, "{} must be an integer in [0, min({}, {})]", param, a, b)
            }
        }
    }
}

/// A non-empty, ordered list of violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Wrap a list of violations. Returns `None` for an empty list.
    pub fn new(list: Vec<Violation>) -> Option<Self> {
        if list.is_empty() { None } else { Some(Self(list)) }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Plain-text messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Decimal values substituted into the rendered formula.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedTerms {
    Binomial {
        n: BigDecimal,
        k: BigDecimal,
        p: BigDecimal,
        /// `1 - p`
        q: BigDecimal,
        /// `n - k`
        n_minus_k: BigDecimal,
    },
    Poisson {
        lambda: BigDecimal,
        k: BigDecimal,
    },
    Hypergeometric {
        population: BigDecimal,
        successes: BigDecimal,
        draws: BigDecimal,
        k: BigDecimal,
        /// `N - K`
        failures: BigDecimal,
        /// `n - k`
        draws_minus_k: BigDecimal,
    },
}

/// Exact probability of one outcome plus what is needed to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationResult {
    /// Distribution that produced this result
    pub kind: DistributionKind,
    /// Exact (or 100-significant-digit, when a quotient does not terminate) probability
    pub probability: BigDecimal,
    /// Values substituted into the formula
    pub terms: RenderedTerms,
    /// Decimal places used when displaying `probability`
    pub decimals: u32,
}
