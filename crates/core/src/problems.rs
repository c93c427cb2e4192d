mod equation;
mod fixed_point;

pub use equation::{EquationProblem, Residual};
pub use fixed_point::{Direct, FixedPointProblem};
