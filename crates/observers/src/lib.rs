//! Reusable observers for the rootwise solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIter`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Tracing
//!
//! [`Trace`] writes one line per solver event to any [`std::io::Write`]
//! sink. Wrapping it in an `Option` turns a verbosity flag into an observer:
//!
//! ```
//! use rootwise_core::{Direct, Function};
//! use rootwise_observers::Trace;
//! use rootwise_solvers::fixed_point;
//!
//! let verbose = true;
//! let mut log = Vec::new();
//!
//! let solution = fixed_point::solve(
//!     &Function::new(f64::cos),
//!     &Direct,
//!     1.0,
//!     &fixed_point::Config::default(),
//!     verbose.then(|| Trace::new(&mut log)),
//! )?;
//!
//! let log = String::from_utf8(log)?;
//! assert_eq!(log.lines().count(), solution.iters + 1);
//! assert!(log.starts_with("iter=0 u=1 f_u=0.54"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Observer`]: rootwise_core::Observer
//! [`HasIter`]: traits::HasIter
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trace;

pub use trace::Trace;
