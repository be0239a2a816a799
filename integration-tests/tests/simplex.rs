use approx::assert_abs_diff_eq;

use amoeba_core::{PointChecker, ValueChecker};
use amoeba_solve::simplex::{
    self, Config, MultiDirectional, NelderMead, Simplex, Status, Strategy,
};
use integration_tests::test_functions::{booth, rosenbrock, sphere};

fn tight_checker() -> ValueChecker {
    ValueChecker::new(1e-12, 1e-14).unwrap()
}

#[test]
fn nelder_mead_from_unit_steps_reaches_the_sphere_minimum() {
    let solution = simplex::minimize_unobserved(
        &sphere,
        &[10.0, 10.0],
        Simplex::from_steps(&[1.0, 1.0]).unwrap(),
        &Strategy::default(),
        ValueChecker::new(1e-10, 1e-12).unwrap(),
        &Config::new(2000).unwrap(),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.value < 1e-6);
}

#[test]
fn nelder_mead_solves_rosenbrock() {
    let reference = vec![vec![-1.2, 1.0], vec![0.9, 1.2], vec![3.5, -2.3]];
    let solution = simplex::minimize_unobserved(
        &rosenbrock,
        &[-1.2, 1.0],
        Simplex::from_reference(&reference).unwrap(),
        &Strategy::from(NelderMead::default()),
        tight_checker(),
        &Config::new(10_000).unwrap(),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.point[0], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(solution.point[1], 1.0, epsilon = 1e-3);
    assert!(solution.value < 1e-6);
}

#[test]
fn multi_directional_solves_booth() {
    let solution = simplex::minimize_unobserved(
        &booth,
        &[0.0, 0.0],
        Simplex::hypercube(2, 0.5).unwrap(),
        &Strategy::from(MultiDirectional::default()),
        tight_checker(),
        &Config::new(20_000).unwrap(),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.point[0], 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(solution.point[1], 3.0, epsilon = 1e-4);
}

#[test]
fn point_checker_stops_near_the_optimum() {
    let solution = simplex::minimize_unobserved(
        &booth,
        &[5.0, -5.0],
        Simplex::hypercube(2, 1.0).unwrap(),
        &Strategy::default(),
        PointChecker::new(0.0, 1e-8).unwrap(),
        &Config::new(5000).unwrap(),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.point[0], 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(solution.point[1], 3.0, epsilon = 1e-5);
}

#[test]
fn maximization_mirrors_minimization() {
    let negated = |x: &[f64]| -rosenbrock(x);
    let start = [-1.2, 1.0];

    let min = simplex::minimize_unobserved(
        &rosenbrock,
        &start,
        Simplex::hypercube(2, 0.1).unwrap(),
        &Strategy::default(),
        ValueChecker::new(1e-10, 1e-12).unwrap(),
        &Config::default(),
    )
    .unwrap();
    let max = simplex::maximize_unobserved(
        &negated,
        &start,
        Simplex::hypercube(2, 0.1).unwrap(),
        &Strategy::default(),
        ValueChecker::new(1e-10, 1e-12).unwrap(),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(min.point, max.point);
    assert_eq!(min.value, -max.value);
    assert_eq!(min.evals, max.evals);
}
