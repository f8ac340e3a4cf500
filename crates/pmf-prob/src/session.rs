//! Calculator session state.
//!
//! A [`Session`] owns the selected distribution and the three output panels
//! (formula, result, errors). Every mutation ends with exactly one
//! [`RenderObserver::render_complete`] call; the evaluators never notify.

use pmf_core::{
    ComputationResult, DistributionKind, Error, ParameterSet, RenderEvent, RenderObserver, Result,
};

use crate::engine::ProbabilityEngine;
use crate::render::{errors_latex, formula_latex, invalid_input_latex, result_latex};

/// Selected distribution plus rendered panels.
#[derive(Debug)]
pub struct Session<O: RenderObserver> {
    engine: ProbabilityEngine,
    observer: O,
    selected: DistributionKind,
    formula: &'static str,
    result: Option<String>,
    errors: Option<String>,
}

impl<O: RenderObserver> Session<O> {
    /// Start on the binomial distribution with its formula shown.
    pub fn new(observer: O) -> Self {
        let mut session = Self {
            engine: ProbabilityEngine::new(),
            observer,
            selected: DistributionKind::Binomial,
            formula: formula_latex(DistributionKind::Binomial),
            result: None,
            errors: None,
        };
        session.select(DistributionKind::Binomial);
        session
    }

    /// Switch distribution: clears result and errors, redraws the formula.
    pub fn select(&mut self, kind: DistributionKind) {
        self.clear();
        self.selected = kind;
        self.formula = formula_latex(kind);
        tracing::debug!(%kind, "distribution selected");
        self.observer.render_complete(RenderEvent::Formula(kind));
    }

    /// Evaluate the selected distribution.
    ///
    /// Fills exactly one of the result or error panels. The typed outcome is
    /// returned as well; an error never leaves the session unusable.
    pub fn submit(
        &mut self,
        params: &ParameterSet,
        decimals_raw: &str,
    ) -> Result<ComputationResult> {
        self.clear();
        let kind = self.selected;
        let outcome = self.engine.evaluate(kind, params, decimals_raw);
        let event = match &outcome {
            Ok(r) => {
                self.result = Some(result_latex(r));
                RenderEvent::Result(kind)
            }
            Err(Error::Validation(v)) => {
                self.errors = Some(errors_latex(v));
                RenderEvent::Errors(kind)
            }
            Err(_) => {
                self.errors = Some(invalid_input_latex().to_string());
                RenderEvent::Errors(kind)
            }
        };
        self.observer.render_complete(event);
        outcome
    }

    fn clear(&mut self) {
        self.result = None;
        self.errors = None;
    }

    pub fn selected(&self) -> DistributionKind {
        self.selected
    }

    pub fn formula(&self) -> &str {
        self.formula
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn errors(&self) -> Option<&str> {
        self.errors.as_deref()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<RenderEvent>>);

    impl RenderObserver for Recorder {
        fn render_complete(&self, event: RenderEvent) {
            self.0.borrow_mut().push(event);
        }
    }

    #[test]
    fn test_new_session_shows_binomial_formula() {
        let s = Session::new(Recorder::default());
        assert_eq!(s.selected(), DistributionKind::Binomial);
        assert!(s.formula().contains("\\binom{n}{k}"));
        assert!(s.result().is_none() && s.errors().is_none());
        assert_eq!(
            *s.observer().0.borrow(),
            vec![RenderEvent::Formula(DistributionKind::Binomial)]
        );
    }

    #[test]
    fn test_submit_then_select_clears_panels() {
        let mut s = Session::new(Recorder::default());
        let params = ParameterSet::new().with("n", "4").with("k", "2").with("p", "0.5");
        let r = s.submit(&params, "3").unwrap();
        assert_eq!(crate::render::probability_fixed(&r), "0.375");
        assert!(s.result().unwrap().ends_with("= 0.375 \\]"));
        assert!(s.errors().is_none());

        s.select(DistributionKind::Poisson);
        assert!(s.result().is_none());
        assert!(s.formula().contains("\\lambda"));
        assert_eq!(
            *s.observer().0.borrow(),
            vec![
                RenderEvent::Formula(DistributionKind::Binomial),
                RenderEvent::Result(DistributionKind::Binomial),
                RenderEvent::Formula(DistributionKind::Poisson),
            ]
        );
    }

    #[test]
    fn test_errors_then_recovery() {
        let mut s = Session::new(Recorder::default());
        s.select(DistributionKind::Hypergeometric);

        let bad = ParameterSet::new().with("N", "x").with("K", "1").with("n", "1").with("k", "0");
        assert!(s.submit(&bad, "").is_err());
        assert_eq!(s.errors(), Some(invalid_input_latex()));
        assert!(s.result().is_none());

        let missing = ParameterSet::new().with("N", "10");
        assert!(s.submit(&missing, "").is_err());
        assert!(s.errors().unwrap().contains("\\begin{align*}"));

        let good = ParameterSet::new().with("N", "10").with("K", "5").with("n", "5").with("k", "5");
        assert!(s.submit(&good, "7").is_ok());
        assert!(s.errors().is_none());
        assert!(s.result().unwrap().contains("0.0039683"));
        assert_eq!(
            s.observer().0.borrow().last(),
            Some(&RenderEvent::Result(DistributionKind::Hypergeometric))
        );
    }
}
