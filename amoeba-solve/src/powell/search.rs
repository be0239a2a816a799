use amoeba_core::{ConvergenceChecker, Goal, Objective, Observer, PointValue};

use crate::Evaluator;

use super::{Action, Config, DirectionSet, Error, Event, Solution, Status};

/// Core Powell implementation, shared by minimization and maximization.
///
/// All comparisons use scores from [`Goal::transform`], so a decrease in
/// score is always an improvement.
pub(super) fn search<O, C, Obs>(
    objective: &O,
    start: &[f64],
    config: &Config,
    mut checker: C,
    mut observer: Obs,
    goal: Goal,
) -> Result<Solution, Error>
where
    O: Objective,
    C: ConvergenceChecker,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let line = config.line_search();
    let mut evaluator = Evaluator::new(objective, config.max_evals());
    let mut directions = DirectionSet::identity(start.len());
    let score = |value: f64| goal.transform(value);

    let mut x = start.to_vec();
    let mut value = evaluator.value(&x)?;
    tracing::debug!(dimension = start.len(), ?goal, "starting powell search");

    let mut iters = 0;
    loop {
        iters += 1;
        let anchor = x.clone();
        let anchor_value = value;

        // Sweep, remembering the direction with the largest single improvement.
        let mut delta = 0.0;
        let mut big_index = 0;
        for (index, direction) in directions.iter().enumerate() {
            let before = value;
            let optimum = line.search(
                |p: &[f64]| evaluator.value(p).map_err(Error::from),
                goal,
                &x,
                direction,
            )?;
            value = optimum.value;
            x = moved(&x, optimum.x, direction);

            let improvement = score(before) - score(value);
            if improvement > delta {
                delta = improvement;
                big_index = index;
            }
        }

        let (f1, f) = (score(anchor_value), score(value));
        let mut stop =
            2.0 * (f1 - f) <= config.rel_tol() * (f1.abs() + f.abs()) + config.abs_tol();

        let previous = PointValue::new(anchor, anchor_value);
        let current = PointValue::new(x.clone(), value);
        if !stop {
            stop = checker.converged(iters, &previous, &current);
        }
        if stop {
            tracing::debug!(iters, evals = evaluator.count(), "powell search converged");
            let best = better(goal, previous, current);
            return Ok(solution(Status::Converged, best, iters, &evaluator, directions));
        }
        if config.max_iters().is_some_and(|max| iters >= max) {
            tracing::debug!(iters, "powell search reached the iteration cap");
            let best = better(goal, previous, current);
            return Ok(solution(Status::MaxIters, best, iters, &evaluator, directions));
        }

        // Extrapolate along the net displacement of the sweep.
        let anchor = previous.point();
        let displacement: Vec<f64> = x.iter().zip(anchor).map(|(xi, ai)| xi - ai).collect();
        let extrapolated: Vec<f64> = x
            .iter()
            .zip(anchor)
            .map(|(xi, ai)| 2.0 * xi - ai)
            .collect();
        let f2 = score(evaluator.value(&extrapolated)?);

        if f1 > f2 {
            let t = 2.0 * (f1 + f2 - 2.0 * f) * (f1 - f - delta).powi(2)
                - delta * (f1 - f2).powi(2);
            if t < 0.0 {
                let optimum = line.search(
                    |p: &[f64]| evaluator.value(p).map_err(Error::from),
                    goal,
                    &x,
                    &displacement,
                )?;
                value = optimum.value;
                let step: Vec<f64> = displacement.iter().map(|d| optimum.x * d).collect();
                x = moved(&x, 1.0, &step);

                tracing::debug!(iters, replaced = big_index, "powell: new direction");
                directions.replace(big_index, step);
            }
        }

        let event = Event {
            iter: iters,
            point: &x,
            value,
            directions: &directions,
            evals: evaluator.count(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            tracing::debug!(iters, "powell search stopped by observer");
            let current = PointValue::new(x, value);
            return Ok(solution(
                Status::StoppedByObserver,
                current,
                iters,
                &evaluator,
                directions,
            ));
        }
    }
}

/// Returns `x + alpha * direction`.
fn moved(x: &[f64], alpha: f64, direction: &[f64]) -> Vec<f64> {
    x.iter()
        .zip(direction)
        .map(|(xi, di)| xi + alpha * di)
        .collect()
}

/// Returns `current` if it is strictly better than `previous`.
fn better(goal: Goal, previous: PointValue, current: PointValue) -> PointValue {
    if goal.is_better(current.value(), previous.value()) {
        current
    } else {
        previous
    }
}

fn solution<O: Objective>(
    status: Status,
    best: PointValue,
    iters: usize,
    evaluator: &Evaluator<'_, O>,
    directions: DirectionSet,
) -> Solution {
    let (point, value) = best.into_parts();
    Solution {
        status,
        point,
        value,
        iters,
        evals: evaluator.count(),
        directions,
    }
}
