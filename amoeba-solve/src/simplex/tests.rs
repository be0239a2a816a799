use approx::assert_abs_diff_eq;
use thiserror::Error;

use amoeba_core::{Objective, PointValue, ValueChecker};

use super::{
    Action, Config, Error, Event, MultiDirectional, NelderMead, Simplex, SimplexError, Status,
    Strategy, maximize_unobserved, minimize, minimize_unobserved,
};

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

fn checker() -> ValueChecker {
    ValueChecker::new(1e-10, 1e-12).unwrap()
}

fn unit_steps() -> Simplex {
    Simplex::from_steps(&[1.0, 1.0]).unwrap()
}

#[test]
fn nelder_mead_minimizes_sphere() {
    let config = Config::new(2000).unwrap();
    let solution = minimize_unobserved(
        &sphere,
        &[10.0, 10.0],
        unit_steps(),
        &Strategy::default(),
        checker(),
        &config,
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.value < 1e-6);
    assert!(solution.evals <= 2000);
    assert_eq!(solution.simplex.vertices()[0].point(), solution.point);
}

#[test]
fn multi_directional_minimizes_sphere() {
    let config = Config::new(5000).unwrap();
    let strategy = Strategy::from(MultiDirectional::default());
    let solution = minimize_unobserved(
        &sphere,
        &[10.0, 10.0],
        unit_steps(),
        &strategy,
        checker(),
        &config,
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.value < 1e-6);
}

#[test]
fn maximizes_concave_quadratic() {
    let hill = |x: &[f64]| -(x[0] - 1.0).powi(2) - (x[1] + 2.0).powi(2);

    let solution = maximize_unobserved(
        &hill,
        &[0.0, 0.0],
        Simplex::hypercube(2, 0.5).unwrap(),
        &Strategy::from(NelderMead::default()),
        checker(),
        &Config::default(),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.point[0], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(solution.point[1], -2.0, epsilon = 1e-3);
}

#[test]
fn observer_can_stop_early() {
    let mut seen = Vec::new();
    let observer = |event: &Event<'_>| {
        seen.push((event.iter, event.best().value()));
        (event.iter == 3).then_some(Action::StopEarly)
    };

    let solution = minimize(
        &sphere,
        &[10.0, 10.0],
        unit_steps(),
        &Strategy::default(),
        checker(),
        &Config::default(),
        observer,
    )
    .expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(seen.len(), 3);
    assert!(seen.windows(2).all(|pair| pair[1].1 <= pair[0].1));
}

#[test]
fn iteration_cap_returns_best_so_far() {
    let config = Config::new(1000).unwrap().with_max_iters(5).unwrap();
    let solution = minimize_unobserved(
        &sphere,
        &[10.0, 10.0],
        unit_steps(),
        &Strategy::default(),
        (),
        &config,
    )
    .expect("should stop at the cap");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert!(solution.value < 200.0);
}

#[test]
fn exceeding_the_budget_fails() {
    let config = Config::new(10).unwrap();
    let result = minimize_unobserved(
        &sphere,
        &[10.0, 10.0],
        unit_steps(),
        &Strategy::default(),
        (),
        &config,
    );

    assert!(matches!(result, Err(Error::TooManyEvaluations { max: 10 })));
}

#[test]
fn closure_checkers_see_every_vertex() {
    let mut calls = 0;
    let checker = |iteration: usize, _: &PointValue, _: &PointValue| {
        calls += 1;
        iteration >= 2
    };

    let solution = minimize_unobserved(
        &sphere,
        &[10.0, 10.0],
        unit_steps(),
        &Strategy::default(),
        checker,
        &Config::default(),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 2);
    // Iteration 1 stops at the first vertex; iteration 2 checks all three.
    assert_eq!(calls, 4);
}

#[test]
fn start_must_match_dimension() {
    let result = minimize_unobserved(
        &sphere,
        &[1.0, 2.0, 3.0],
        unit_steps(),
        &Strategy::default(),
        checker(),
        &Config::default(),
    );

    assert!(matches!(
        result,
        Err(Error::Simplex(SimplexError::DimensionMismatch {
            expected: 2,
            found: 3
        }))
    ));
}

#[derive(Debug, Error)]
#[error("log of a non-positive number")]
struct NonPositive;

/// f(x) = ln(x0), defined only for positive x0.
struct Log;

impl Objective for Log {
    type Error = NonPositive;

    fn value(&self, x: &[f64]) -> Result<f64, Self::Error> {
        if x[0] > 0.0 {
            Ok(x[0].ln())
        } else {
            Err(NonPositive)
        }
    }
}

#[test]
fn objective_errors_abort_the_search() {
    let result = minimize_unobserved(
        &Log,
        &[2.0],
        Simplex::from_steps(&[1.0]).unwrap(),
        &Strategy::default(),
        checker(),
        &Config::default(),
    );

    let Err(Error::Objective(source)) = result else {
        panic!("expected an objective error");
    };
    assert_eq!(source.to_string(), "log of a non-positive number");
}
