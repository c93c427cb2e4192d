//! Shared models and problems for workspace integration tests.

pub mod colebrook {
    //! Darcy friction factor from the Colebrook-White equation.
    //!
    //! Written in terms of `x = 1 / sqrt(f)`, the equation is already in
    //! fixed-point form:
    //!
    //! ```text
    //! x = -2 log10(roughness / 3.7 + 2.51 x / Re)
    //! ```

    use std::convert::Infallible;

    use rootwise_core::{FixedPointProblem, Model};
    use serde::{Deserialize, Serialize};

    /// Flow conditions in a circular pipe.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Pipe {
        /// Wall roughness divided by the hydraulic diameter.
        pub relative_roughness: f64,
        /// Reynolds number.
        pub reynolds: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Input {
        pub pipe: Pipe,
        pub inv_sqrt_friction: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Output {
        pub inv_sqrt_friction: f64,
    }

    /// Evaluates the right-hand side of the Colebrook-White equation.
    pub struct Colebrook;

    impl Model for Colebrook {
        type Input = Input;
        type Output = Output;
        type Error = Infallible;

        fn call(&self, input: &Input) -> Result<Output, Self::Error> {
            let Pipe {
                relative_roughness,
                reynolds,
            } = input.pipe;
            let inv_sqrt_friction = -2.0
                * (relative_roughness / 3.7 + 2.51 * input.inv_sqrt_friction / reynolds).log10();
            Ok(Output { inv_sqrt_friction })
        }
    }

    /// Iterates `1 / sqrt(f)` for a fixed pipe.
    pub struct FrictionFactor {
        pub pipe: Pipe,
    }

    impl FixedPointProblem for FrictionFactor {
        type Input = Input;
        type Output = Output;
        type Error = Infallible;

        fn input(&self, x: f64) -> Result<Input, Self::Error> {
            Ok(Input {
                pipe: self.pipe,
                inv_sqrt_friction: x,
            })
        }

        fn image(&self, _input: &Input, output: &Output) -> Result<f64, Self::Error> {
            Ok(output.inv_sqrt_friction)
        }
    }

    /// Converts `1 / sqrt(f)` back to the friction factor.
    #[must_use]
    pub fn friction_factor(inv_sqrt_friction: f64) -> f64 {
        inv_sqrt_friction.powi(-2)
    }
}

pub mod kepler {
    //! Kepler's equation `M = E - e sin(E)` for elliptical orbits.

    use std::convert::Infallible;

    use rootwise_core::{EquationProblem, Model};
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Input {
        pub eccentricity: f64,
        pub eccentric_anomaly: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Output {
        pub mean_anomaly: f64,
    }

    #[derive(Debug, Error, Clone, Copy, PartialEq)]
    #[error("eccentricity {0} is not in [0, 1)")]
    pub struct NotElliptical(pub f64);

    /// Maps the eccentric anomaly to the mean anomaly.
    pub struct Kepler;

    impl Model for Kepler {
        type Input = Input;
        type Output = Output;
        type Error = NotElliptical;

        fn call(&self, input: &Input) -> Result<Output, Self::Error> {
            let e = input.eccentricity;
            if !(0.0..1.0).contains(&e) {
                return Err(NotElliptical(e));
            }
            let big_e = input.eccentric_anomaly;
            Ok(Output {
                mean_anomaly: big_e - e * big_e.sin(),
            })
        }
    }

    /// Finds the eccentric anomaly that produces a target mean anomaly.
    pub struct EccentricAnomaly {
        pub eccentricity: f64,
        pub mean_anomaly: f64,
    }

    impl EquationProblem<1> for EccentricAnomaly {
        type Input = Input;
        type Output = Output;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<Input, Self::Error> {
            Ok(Input {
                eccentricity: self.eccentricity,
                eccentric_anomaly: x[0],
            })
        }

        fn residuals(&self, _input: &Input, output: &Output) -> Result<[f64; 1], Self::Error> {
            Ok([output.mean_anomaly - self.mean_anomaly])
        }
    }
}
