//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across both solvers.
//!
//! # Event traits
//!
//! - [`HasIter`]: events that carry an iteration counter
//! - [`HasResidual`]: events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootwise_core::Observer;
//! use rootwise_observers::traits::{CanStopEarly, HasIter, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasIter + HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.iter() >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootwise_solvers::{equation::newton_raphson, fixed_point};

/// An event that carries an iteration counter.
pub trait HasIter {
    /// Returns the iteration counter for this event.
    fn iter(&self) -> usize;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- newton_raphson::Event ---

impl<I, O> HasIter for newton_raphson::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }
}

/// The residual is the function value at the new estimate.
impl<I, O> HasResidual for newton_raphson::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.y
    }
}

// --- fixed_point::Event ---

impl<I, O> HasIter for fixed_point::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }
}

/// The residual is `u - g(u)`.
impl<I, O> HasResidual for fixed_point::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        fixed_point::Event::residual(self)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for newton_raphson::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
