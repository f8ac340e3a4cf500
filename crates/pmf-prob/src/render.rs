//! LaTeX and plain-text rendering of formulas, results and errors.
//!
//! Output is display math (`\[ ... \]`) ready for a MathJax/KaTeX renderer.
//! Nothing here triggers typesetting; see [`crate::session`].

use pmf_core::{ComputationResult, DistributionKind, RenderedTerms, Violations};

use crate::math::{to_fixed, to_plain};

/// Symbolic PMF shown when a distribution is selected.
pub fn formula_latex(kind: DistributionKind) -> &'static str {
    match kind {
        DistributionKind::Binomial => {
            "\\[ P(X = k) = \\binom{n}{k} \\cdot p^k \\cdot (1 - p)^{n - k} \\]"
        }
        DistributionKind::Hypergeometric => {
            "\\[ P(X = k) = \\frac{\\binom{K}{k} \\cdot \\binom{N - K}{n - k}}{\\binom{N}{n}} \\]"
        }
        DistributionKind::Poisson => "\\[ P(X = k) = \\frac{\\lambda^k e^{-\\lambda}}{k!} \\]",
    }
}

/// Plain-text version of [`formula_latex`].
pub fn formula_text(kind: DistributionKind) -> &'static str {
    match kind {
        DistributionKind::Binomial => "P(X = k) = C(n, k) * p^k * (1 - p)^(n - k)",
        DistributionKind::Hypergeometric => "P(X = k) = C(K, k) * C(N - K, n - k) / C(N, n)",
        DistributionKind::Poisson => "P(X = k) = lambda^k * e^(-lambda) / k!",
    }
}

/// Probability rounded half-up to the requested number of decimals.
pub fn probability_fixed(result: &ComputationResult) -> String {
    to_fixed(&result.probability, result.decimals)
}

/// The formula with values substituted, followed by the rounded probability.
pub fn result_latex(result: &ComputationResult) -> String {
    let fixed = probability_fixed(result);
    let body = match &result.terms {
        RenderedTerms::Binomial { n, k, p, q, n_minus_k } => format!(
            "P(X = {k}) = \\binom{{{n}}}{{{k}}} \\cdot {p}^{{{k}}} \\cdot {q}^{{{nk}}} = {fixed}",
            k = to_plain(k),
            n = to_plain(n),
            p = to_plain(p),
            q = to_plain(q),
            nk = to_plain(n_minus_k),
        ),
        RenderedTerms::Poisson { lambda, k } => format!(
            "P(X = {k}) = \\frac{{e^{{-{lambda}}} \\cdot {lambda}^{{{k}}}}}{{{k}!}} = {fixed}",
            k = to_plain(k),
            lambda = to_plain(lambda),
        ),
        RenderedTerms::Hypergeometric {
            population,
            successes,
            draws,
            k,
            failures,
            draws_minus_k,
        } => format!(
            "P(X = {k}) = \\frac{{\\binom{{{big_k}}}{{{k}}} \\cdot \\binom{{{fail}}}{{{nk}}}}}\
             {{\\binom{{{big_n}}}{{{n}}}}} = {fixed}",
            k = to_plain(k),
            big_k = to_plain(successes),
            fail = to_plain(failures),
            nk = to_plain(draws_minus_k),
            big_n = to_plain(population),
            n = to_plain(draws),
        ),
    };
    format!("\\[ {} \\]", body)
}

/// One-line plain-text form: `P(X = k) = 0.1234567890`.
pub fn result_text(result: &ComputationResult) -> String {
    let k = match &result.terms {
        RenderedTerms::Binomial { k, .. }
        | RenderedTerms::Poisson { k, .. }
        | RenderedTerms::Hypergeometric { k, .. } => k,
    };
    format!("P(X = {}) = {}", to_plain(k), probability_fixed(result))
}

/// Every violation on its own line of an `align*` block.
pub fn errors_latex(violations: &Violations) -> String {
    let mut out = String::from("\\[\n  \\begin{align*}\n");
    for v in violations {
        out.push_str("    ");
        out.push_str(&v.latex());
        out.push_str(" \\\\\n");
    }
    out.push_str("  \\end{align*}\n\\]");
    out
}

/// The single generic message for unparsable input or arithmetic failure.
pub fn invalid_input_latex() -> &'static str {
    "\\[\\text{Error: invalid input}\\]"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmf_core::Violation;

    fn d(s: &str) -> bigdecimal::BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_binomial_latex() {
        let r = crate::binomial::compute(&d("10"), &d("0"), &d("0.50"), 10).unwrap();
        assert_eq!(
            result_latex(&r),
            "\\[ P(X = 0) = \\binom{10}{0} \\cdot 0.5^{0} \\cdot 0.5^{10} = 0.0009765625 \\]"
        );
        assert_eq!(result_text(&r), "P(X = 0) = 0.0009765625");
    }

    #[test]
    fn test_poisson_latex() {
        let r = crate::poisson::compute(&d("3"), &d("0"), 4).unwrap();
        assert_eq!(
            result_latex(&r),
            "\\[ P(X = 0) = \\frac{e^{-3} \\cdot 3^{0}}{0!} = 0.0498 \\]"
        );
    }

    #[test]
    fn test_hypergeometric_latex() {
        let r = crate::hypergeometric::compute(&d("10"), &d("5"), &d("5"), &d("5"), 7).unwrap();
        assert_eq!(
            result_latex(&r),
            "\\[ P(X = 5) = \\frac{\\binom{5}{5} \\cdot \\binom{5}{0}}{\\binom{10}{5}} \
             = 0.0039683 \\]"
        );
    }

    #[test]
    fn test_formulas_mention_their_parameters() {
        assert!(formula_latex(DistributionKind::Binomial).contains("\\binom{n}{k}"));
        assert!(formula_latex(DistributionKind::Poisson).contains("\\lambda"));
        assert!(formula_latex(DistributionKind::Hypergeometric).contains("\\binom{N}{n}"));
        assert!(formula_text(DistributionKind::Hypergeometric).ends_with("/ C(N, n)"));
    }

    #[test]
    fn test_errors_latex_one_line_per_violation() {
        let v = Violations::new(vec![Violation::Missing("n"), Violation::UnitInterval("p")])
            .unwrap();
        let out = errors_latex(&v);
        assert!(out.starts_with("\\[\n  \\begin{align*}"));
        assert_eq!(out.matches(" \\\\\n").count(), 2);
        assert!(out.contains("\\text{Enter a value for } n"));
        assert!(out.contains("p \\text{ must be in the range } [0, 1]"));
    }
}
