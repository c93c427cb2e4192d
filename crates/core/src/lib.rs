//! Core traits and types for the rootwise solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Function`]: adapts a plain `f64 -> f64` closure into a [`Model`]
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`EquationProblem`], [`FixedPointProblem`]: problem traits that adapt
//!   solver variables to model inputs and extract the scalars a solver needs
//!   from model outputs

mod model;
mod observer;
mod problems;

pub use model::{Function, Model, Snapshot};
pub use observer::Observer;
pub use problems::{Direct, EquationProblem, FixedPointProblem, Residual};
