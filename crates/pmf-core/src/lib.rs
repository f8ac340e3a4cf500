//! Core types for the exact PMF engine.
//!
//! This crate holds what every other crate in the workspace shares:
//! - the error type and `Result` alias
//! - the data model (distribution kinds, raw parameter sets, violations, results)
//! - the render-notification trait used by the session layer

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{NoopObserver, RenderEvent, RenderObserver};
pub use types::{
    ComputationResult, DistributionKind, ParameterSet, RenderedTerms, Violation, Violations,
};
