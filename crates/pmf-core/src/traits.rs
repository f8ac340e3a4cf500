//! Render notification seam.
//!
//! The session layer mutates its output panels and then tells an observer
//! that rendering is complete. Typesetting, printing or logging live behind
//! this trait, so the evaluators never know about them.

use crate::types::DistributionKind;

/// Which output panel changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    /// A distribution was selected and its formula panel was redrawn.
    Formula(DistributionKind),
    /// A probability was computed and the result panel was filled.
    Result(DistributionKind),
    /// The error panel was filled.
    Errors(DistributionKind),
}

/// Receives a notification after each panel update.
pub trait RenderObserver {
    /// Called once per completed render.
    fn render_complete(&self, event: RenderEvent);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RenderObserver for NoopObserver {
    fn render_complete(&self, _event: RenderEvent) {}
}

impl<F: Fn(RenderEvent)> RenderObserver for F {
    fn render_complete(&self, event: RenderEvent) {
        self(event)
    }
}
