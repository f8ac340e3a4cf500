//! Exact probability mass functions over arbitrary-precision decimals.
//!
//! This crate hosts the computational core of the calculator:
//! - input validation for raw parameter sets
//! - factorial / binomial coefficient helpers
//! - binomial, Poisson and hypergeometric evaluators
//! - LaTeX rendering and the session state that drives it

pub mod math;
pub mod binomial;
pub mod engine;
pub mod factorial;
pub mod hypergeometric;
pub mod poisson;
pub mod render;
pub mod session;
pub mod validate;

pub use binomial::compute as compute_binomial;
pub use engine::ProbabilityEngine;
pub use factorial::{binomial_coefficient, factorial};
pub use hypergeometric::compute as compute_hypergeometric;
pub use poisson::compute as compute_poisson;
pub use session::Session;
pub use validate::{ValidatedParams, validate};
