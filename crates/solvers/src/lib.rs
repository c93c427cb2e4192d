//! Iterative solvers for scalar problems.
//!
//! - [`fixed_point`]: finds `u` such that `u = g(u)` by direct iteration
//! - [`equation::newton_raphson`]: finds `x` such that `f(x) = 0` with a
//!   forward-difference derivative estimate
//!
//! Both solvers evaluate a [`Model`] through a problem adapter and report
//! per-pass progress to an [`Observer`].
//!
//! [`Model`]: rootwise_core::Model
//! [`Observer`]: rootwise_core::Observer

pub mod equation;
pub mod fixed_point;
