use amoeba_core::{ConvergenceChecker, Goal, Objective, Observer, PointValue};

use crate::Evaluator;

use super::{Action, Config, Error, Event, Simplex, Solution, Status, Strategy};

/// Core simplex search, shared by minimization and maximization.
///
/// The `goal` decides the vertex order; the strategies and the simplex never
/// look at raw values directly.
#[allow(clippy::too_many_arguments)]
pub(super) fn search<O, C, Obs>(
    objective: &O,
    start: &[f64],
    mut simplex: Simplex,
    strategy: &Strategy,
    mut checker: C,
    config: &Config,
    mut observer: Obs,
    goal: Goal,
) -> Result<Solution, Error>
where
    O: Objective,
    C: ConvergenceChecker,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let order = goal.comparator();
    let mut evaluator = Evaluator::new(objective, config.max_evals());

    simplex.build(start)?;
    simplex.evaluate(|x| evaluator.value(x).map_err(Error::from), &order)?;
    tracing::debug!(
        dimension = simplex.dimension(),
        ?goal,
        ?strategy,
        "starting simplex search"
    );

    let mut previous: Vec<PointValue> = Vec::new();
    let mut iters = 0;
    loop {
        if iters > 0 && converged(&mut checker, iters, &previous, simplex.vertices()) {
            tracing::debug!(iters, evals = evaluator.count(), "simplex search converged");
            return Ok(Solution::new(
                Status::Converged,
                simplex,
                iters,
                evaluator.count(),
            ));
        }
        if config.max_iters().is_some_and(|max| iters >= max) {
            tracing::debug!(iters, "simplex search reached the iteration cap");
            return Ok(Solution::new(
                Status::MaxIters,
                simplex,
                iters,
                evaluator.count(),
            ));
        }

        previous = simplex.points();
        strategy.iterate(
            &mut simplex,
            |x| evaluator.value(x).map_err(Error::from),
            &order,
        )?;
        iters += 1;

        let event = Event {
            iter: iters,
            simplex: &simplex,
            evals: evaluator.count(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            tracing::debug!(iters, "simplex search stopped by observer");
            return Ok(Solution::new(
                Status::StoppedByObserver,
                simplex,
                iters,
                evaluator.count(),
            ));
        }
    }
}

/// The run has converged when every vertex passed the checker.
fn converged<C: ConvergenceChecker>(
    checker: &mut C,
    iteration: usize,
    previous: &[PointValue],
    current: &[PointValue],
) -> bool {
    previous
        .iter()
        .zip(current)
        .all(|(p, c)| checker.converged(iteration, p, c))
}
