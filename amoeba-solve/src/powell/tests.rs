use approx::assert_abs_diff_eq;

use amoeba_core::PointValue;

use super::{
    Action, Config, DirectionSet, Error, Event, Status, maximize_unobserved, minimize,
    minimize_unobserved,
};

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Booth's function, minimum 0 at (1, 3).
fn booth(x: &[f64]) -> f64 {
    (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
}

#[test]
fn separable_quadratic_needs_one_sweep_per_axis() {
    let solution = minimize_unobserved(&sphere, &[10.0, 10.0], &Config::default(), ())
        .expect("should converge");

    // The first sweep lands on the minimum; the second confirms it.
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.directions, DirectionSet::identity(2));
    assert_abs_diff_eq!(solution.point[0], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.point[1], 0.0, epsilon = 1e-6);
    assert!(solution.value < 1e-10);
}

#[test]
fn minimizes_a_coupled_quadratic() {
    let solution = minimize_unobserved(&booth, &[0.0, 0.0], &Config::default(), ())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.point[0], 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(solution.point[1], 3.0, epsilon = 1e-4);
    assert_abs_diff_eq!(solution.value, 0.0, epsilon = 1e-8);
}

#[test]
fn replaces_the_largest_gain_direction_with_the_sweep_displacement() {
    let mut seen: Vec<(Vec<f64>, DirectionSet)> = Vec::new();
    let observer = |event: &Event<'_>| {
        seen.push((event.point.to_vec(), event.directions.clone()));
        None::<Action>
    };

    let solution =
        minimize(&booth, &[0.0, 0.0], &Config::default(), (), observer).expect("should converge");
    assert_eq!(solution.status, Status::Converged);
    assert!(seen.len() >= 2);

    // The first sweep lands on (3.4, 1.08) and extrapolating looks worse, so
    // the basis is kept.
    let (first_point, first_directions) = &seen[0];
    assert_eq!(*first_directions, DirectionSet::identity(2));
    assert_abs_diff_eq!(first_point[0], 3.4, epsilon = 1e-4);
    assert_abs_diff_eq!(first_point[1], 1.08, epsilon = 1e-4);

    // The second sweep gains most along x, so that direction is dropped, y
    // moves into its slot, and the scaled displacement takes the last slot.
    let (second_point, second_directions) = &seen[1];
    assert_eq!(second_directions.get(0), Some(&[0.0, 1.0][..]));
    let newest = second_directions.get(1).expect("two directions");
    assert_abs_diff_eq!(newest[0], -1.536, epsilon = 1e-3);
    assert_abs_diff_eq!(newest[1], 1.2288, epsilon = 1e-3);

    // The new direction is parallel to the net motion since the first sweep,
    // and the extra line search along it reaches the minimum.
    let motion = [
        second_point[0] - first_point[0],
        second_point[1] - first_point[1],
    ];
    assert_abs_diff_eq!(newest[0] * motion[1] - newest[1] * motion[0], 0.0, epsilon = 1e-8);
    assert_abs_diff_eq!(second_point[0], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(second_point[1], 3.0, epsilon = 1e-3);
}

#[test]
fn maximizes_a_concave_quadratic() {
    let hill = |x: &[f64]| 5.0 - (x[0] - 1.0).powi(2) - 2.0 * (x[1] + 2.0).powi(2);

    let solution = maximize_unobserved(&hill, &[0.0, 0.0], &Config::default(), ())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.point[0], 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(solution.point[1], -2.0, epsilon = 1e-5);
    assert_abs_diff_eq!(solution.value, 5.0, epsilon = 1e-10);
}

#[test]
fn checker_can_stop_after_the_first_sweep() {
    let checker = |iteration: usize, previous: &PointValue, current: &PointValue| {
        assert!(current.value() <= previous.value());
        iteration == 1
    };

    let solution =
        minimize_unobserved(&booth, &[0.0, 0.0], &Config::default(), checker).expect("should stop");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert!(solution.value < booth(&[0.0, 0.0]));
}

#[test]
fn iteration_cap_returns_the_better_anchor() {
    let config = Config::default().with_max_iters(1).unwrap();
    let solution =
        minimize_unobserved(&booth, &[0.0, 0.0], &config, ()).expect("should stop at the cap");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
    assert!(solution.value < booth(&[0.0, 0.0]));
}

#[test]
fn observer_can_stop_early() {
    let mut evals = Vec::new();
    let observer = |event: &Event<'_>| {
        evals.push(event.evals);
        assert_eq!(event.directions.len(), 2);
        Some(Action::StopEarly)
    };

    let solution = minimize(&booth, &[0.0, 0.0], &Config::default(), (), observer)
        .expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
    assert_eq!(evals, [solution.evals]);
}

#[test]
fn exceeding_the_budget_fails() {
    let config = Config::default().with_max_evals(5).unwrap();
    let result = minimize_unobserved(&sphere, &[10.0, 10.0], &config, ());

    assert!(matches!(result, Err(Error::TooManyEvaluations { max: 5 })));
}

#[test]
fn zero_dimensional_problems_converge_immediately() {
    let constant = |_: &[f64]| 4.0;
    let solution =
        minimize_unobserved(&constant, &[], &Config::default(), ()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.evals, 1);
    assert!(solution.point.is_empty());
}
