use super::*;

use std::{cell::Cell, convert::Infallible};

use approx::assert_relative_eq;
use rootwise_core::{Function, Residual};
use thiserror::Error;

/// Model that counts how many times it was called.
struct Counting<F> {
    function: F,
    calls: Cell<usize>,
}

impl<F: Fn(f64) -> f64> Counting<F> {
    fn new(function: F) -> Self {
        Self {
            function,
            calls: Cell::new(0),
        }
    }
}

impl<F: Fn(f64) -> f64> Model for Counting<F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        Ok((self.function)(*input))
    }
}

#[derive(Debug, Error)]
#[error("log of non-positive value {0}")]
struct Domain(f64);

/// Model computing `ln(x)`, undefined for `x <= 0`.
struct Log;

impl Model for Log {
    type Input = f64;
    type Output = f64;
    type Error = Domain;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        if *input > 0.0 {
            Ok(input.ln())
        } else {
            Err(Domain(*input))
        }
    }
}

fn config(max_iters: usize) -> Config {
    Config::new(max_iters, 1e-7, 1e-7).expect("valid config")
}

#[test]
fn finds_square_root_of_two() {
    let model = Function::new(|x: f64| x * x - 2.0);

    let solution =
        solve_unobserved(&model, &Residual, 1.0, &config(20)).expect("should converge");

    assert!(solution.stop_code.is_converged());
    assert!(solution.iters < 10);
    assert_relative_eq!(solution.root, 2.0_f64.sqrt(), epsilon = 1e-8);
    assert!(solution.y_value.abs() < 1e-7);
    assert_relative_eq!(solution.snapshot.input, solution.root);
    assert_relative_eq!(solution.snapshot.output, solution.y_value);
}

#[test]
fn zero_iterations_returns_initial_estimate() {
    let model = Function::new(|x: f64| x * x - 2.0);

    let solution = solve_unobserved(&model, &Residual, 1.0, &config(0)).expect("no iterations");

    assert_eq!(solution.stop_code, StopCode::MaxIterationsExceeded);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.root, 1.0);
    assert_relative_eq!(solution.y_value, -1.0);
}

#[test]
fn zero_iterations_still_reports_converged_start() {
    let model = Function::new(|x: f64| x - 1.0);

    let solution = solve_unobserved(&model, &Residual, 1.0, &config(0)).expect("no iterations");

    assert_eq!(solution.stop_code, StopCode::FunctionValueBelowTolerance);
    assert_eq!(solution.iters, 0);
}

#[test]
fn converged_start_skips_derivative() {
    let model = Counting::new(|x: f64| x * x - 4.0);

    let solution = solve_unobserved(&model, &Residual, 2.0, &config(20)).expect("already a root");

    assert_eq!(solution.stop_code, StopCode::FunctionValueBelowTolerance);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.root, 2.0);
    assert_eq!(model.calls.get(), 1);
}

#[test]
fn flat_function_fails_instead_of_dividing() {
    let model = Function::new(|_: f64| 5.0);

    let result = solve_unobserved(&model, &Residual, 0.0, &config(20));

    match result {
        Err(Error::NonConvergentDerivative { x, slope, zero_slope }) => {
            assert_relative_eq!(x, 0.0);
            assert_relative_eq!(slope, 0.0);
            assert_relative_eq!(zero_slope, 1e-7);
        }
        other => panic!("expected NonConvergentDerivative, got {other:?}"),
    }
}

#[test]
fn positive_check_rejects_decreasing_function() {
    let model = Function::new(|x: f64| 2.0 - x * x);

    let result = solve_unobserved(&model, &Residual, 1.0, &config(20));

    assert!(matches!(result, Err(Error::NonConvergentDerivative { .. })));
}

#[test]
fn magnitude_check_solves_decreasing_function() {
    let model = Function::new(|x: f64| 2.0 - x * x);
    let config = config(20).with_slope_check(SlopeCheck::Magnitude);

    let solution = solve_unobserved(&model, &Residual, 1.0, &config).expect("should converge");

    assert!(solution.stop_code.is_converged());
    assert_relative_eq!(solution.root, 2.0_f64.sqrt(), epsilon = 1e-8);
}

#[test]
fn function_value_is_checked_before_next_update() {
    // A linear function lands within y_tol after one update, but the step
    // itself is large, so the next pass stops on the function value.
    let model = Counting::new(|x: f64| x - 3.0);

    let solution = solve_unobserved(&model, &Residual, 0.0, &config(20)).expect("should converge");

    assert_eq!(solution.stop_code, StopCode::FunctionValueBelowTolerance);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.root, 3.0, epsilon = 1e-7);
    // initial, forward sample, updated estimate
    assert_eq!(model.calls.get(), 3);
}

#[test]
fn exhausted_budget_wins_over_final_function_value() {
    let model = Function::new(|x: f64| x - 3.0);

    let solution = solve_unobserved(&model, &Residual, 0.0, &config(1)).expect("one update");

    assert_eq!(solution.stop_code, StopCode::MaxIterationsExceeded);
    assert_eq!(solution.iters, 1);
    assert!(solution.y_value.abs() <= 1e-7);
}

#[test]
fn small_step_stops_iteration() {
    let model = Function::new(|x: f64| x * x - 2.0);
    let config = Config::new(50, 1e-3, 1e-15).expect("valid config");

    let solution = solve_unobserved(&model, &Residual, 1.0, &config).expect("should converge");

    assert_eq!(solution.stop_code, StopCode::StepBelowTolerance);
    assert_relative_eq!(solution.root, 2.0_f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn repeated_solves_are_identical() {
    let model = Function::new(|x: f64| x.cos() - x);
    let config = config(30).with_slope_check(SlopeCheck::Magnitude);

    let first = solve_unobserved(&model, &Residual, 1.0, &config).expect("should converge");
    let second = solve_unobserved(&model, &Residual, 1.0, &config).expect("should converge");

    assert_eq!(first.root.to_bits(), second.root.to_bits());
    assert_eq!(first.y_value.to_bits(), second.y_value.to_bits());
    assert_eq!(first.iters, second.iters);
    assert_eq!(first.stop_code, second.stop_code);
}

#[test]
fn observer_sees_every_update() {
    let model = Function::new(|x: f64| x * x - 2.0);

    let mut seen = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| {
        seen.push((event.iter, event.x, event.y));
        None
    };

    let solution = solve(&model, &Residual, 1.0, &config(20), observer).expect("should converge");

    assert_eq!(seen.len(), solution.iters);
    let (first_iter, first_x, first_y) = seen[0];
    assert_eq!(first_iter, 1);
    assert_relative_eq!(first_x, 1.5, epsilon = 1e-6);
    assert_relative_eq!(first_y, 0.25, epsilon = 1e-5);

    let &(last_iter, last_x, last_y) = seen.last().expect("at least one event");
    assert_eq!(last_iter, solution.iters);
    assert_relative_eq!(last_x, solution.root);
    assert_relative_eq!(last_y, solution.y_value);
}

#[test]
fn observer_can_stop_iteration() {
    let model = Function::new(|x: f64| x * x - 2.0);

    let observer = |event: &Event<'_, f64, f64>| (event.iter >= 2).then_some(Action::StopEarly);

    let solution = solve(&model, &Residual, 1.0, &config(20), observer).expect("should stop");

    assert_eq!(solution.stop_code, StopCode::StoppedByObserver);
    assert_eq!(solution.stop_code.code(), None);
    assert_eq!(solution.iters, 2);
}

#[test]
fn model_errors_propagate() {
    // The first update from x = 30 overshoots to a negative estimate.
    let result = solve_unobserved(&Log, &LogTarget, 30.0, &config(20));

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn stop_codes_have_numeric_codes() {
    assert_eq!(StopCode::MaxIterationsExceeded.code(), Some(1));
    assert_eq!(StopCode::FunctionValueBelowTolerance.code(), Some(2));
    assert_eq!(StopCode::StepBelowTolerance.code(), Some(3));
}

/// Equation `ln(x) - 2 = 0`.
struct LogTarget;

impl EquationProblem<1> for LogTarget {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output - 2.0])
    }
}
