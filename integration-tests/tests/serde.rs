use approx::assert_relative_eq;
use integration_tests::kepler::{EccentricAnomaly, Kepler};
use rootwise_core::{Direct, Function};
use rootwise_solvers::{
    equation::newton_raphson::{self, StopCode},
    fixed_point,
};
use serde_json::json;

#[test]
fn newton_solution_serializes_with_snapshot() {
    let problem = EccentricAnomaly {
        eccentricity: 0.3,
        mean_anomaly: 1.0,
    };

    let solution = newton_raphson::solve_unobserved(
        &Kepler,
        &problem,
        1.0,
        &newton_raphson::Config::default(),
    )
    .expect("converges");

    let value = serde_json::to_value(&solution).expect("serializable");
    assert_eq!(value["iters"], json!(solution.iters));
    assert_eq!(value["root"], json!(solution.root));
    assert_eq!(
        value["snapshot"]["input"]["eccentric_anomaly"],
        json!(solution.root)
    );

    let code: StopCode = serde_json::from_value(value["stop_code"].clone()).expect("stop code");
    assert_eq!(code, solution.stop_code);
}

#[test]
fn fixed_point_solution_round_trips() {
    let solution = fixed_point::solve_unobserved(
        &Function::new(f64::cos),
        &Direct,
        1.0,
        &fixed_point::Config::default(),
    )
    .expect("converges");

    let text = serde_json::to_string(&solution).expect("serializable");
    let back: fixed_point::Solution<f64, f64> = serde_json::from_str(&text).expect("parsable");

    assert_eq!(back.status, fixed_point::Status::Converged);
    assert_eq!(back.iters, solution.iters);
    assert_relative_eq!(back.x, solution.x);
    assert_relative_eq!(back.image, solution.image);
    assert_relative_eq!(back.snapshot.input, solution.snapshot.input);
    assert_relative_eq!(back.snapshot.output, solution.snapshot.output);
}

#[test]
fn configs_serialize_their_settings() {
    let config = newton_raphson::Config::default()
        .with_slope_check(newton_raphson::SlopeCheck::Magnitude);

    let value = serde_json::to_value(config).expect("serializable");
    assert_eq!(value["max_iters"], json!(20));
    assert_eq!(value["slope_check"], json!("Magnitude"));

    let value = serde_json::to_value(fixed_point::Config::default().with_max_iters(8))
        .expect("serializable");
    assert_eq!(value["max_iters"], json!(8));
}
