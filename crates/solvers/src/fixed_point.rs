//! Fixed-point iteration for scalar problems.
//!
//! # Algorithm
//!
//! Starting from an initial estimate `u`, the solver evaluates `g(u)` and,
//! while `|u - g(u)| >= tolerance`, replaces `u` with `g(u)`. It returns the
//! last `u` whose image is within tolerance.
//!
//! The test compares the current estimate with its freshly computed image,
//! so converging requires one evaluation more than the number of updates.
//!
//! # Termination
//!
//! Iteration converges when `g` is a contraction near the fixed point.
//! With the default config there is no iteration cap, and a divergent or
//! oscillating `g` never returns. [`Config::with_max_iters`] bounds the loop
//! and reports [`Status::MaxIters`] instead.
//!
//! A NaN difference also ends iteration. When the estimate or its image is
//! not finite at that point, the solver reports [`Status::NotFinite`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per pass, starting with the initial
//! estimate at iteration 0, before testing for convergence. Observers can
//! return [`Action::StopEarly`] to halt with [`Status::StoppedByObserver`].

mod action;
mod config;
mod error;
mod evaluate;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use rootwise_core::{FixedPointProblem, Model, Observer};

use evaluate::evaluate;

/// Finds a fixed point of the problem by direct iteration.
///
/// See the [module docs](self) for termination and observer events.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial_estimate: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: FixedPointProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let mut current = evaluate(model, problem, initial_estimate)?;
    let mut iters = 0;

    let status = loop {
        let event = Event {
            iter: iters,
            x: current.x,
            image: current.image,
            snapshot: &current.snapshot,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }

        if !current.is_outside(config.tolerance()) {
            if current.is_finite() {
                break Status::Converged;
            }
            break Status::NotFinite;
        }

        if config.max_iters().is_some_and(|max_iters| iters >= max_iters) {
            break Status::MaxIters;
        }

        current = evaluate(model, problem, current.image)?;
        iters += 1;
    };

    Ok(Solution {
        status,
        x: current.x,
        image: current.image,
        iters,
        snapshot: current.snapshot,
    })
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial_estimate: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: FixedPointProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, initial_estimate, config, ())
}
