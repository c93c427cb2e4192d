//! Solvers for equation problems: finding roots of scalar equations.
//!
//! An [`EquationProblem`] maps the solver variable `x` to a model input,
//! calls the model, and computes a residual. Solvers in this module drive
//! that residual toward zero.
//!
//! # Solvers
//!
//! - [`newton_raphson`]: Newton's update with a forward-difference slope
//!
//! [`EquationProblem`]: rootwise_core::EquationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod newton_raphson;
