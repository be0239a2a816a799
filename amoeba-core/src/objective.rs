use std::convert::Infallible;

/// A scalar function of several real variables.
///
/// Solvers only ever compare the values an objective returns, so it needs no
/// gradient. It may be called any number of times and is assumed to be pure:
/// the same point always produces the same value.
///
/// Closures of the form `Fn(&[f64]) -> f64` implement `Objective` with an
/// [`Infallible`] error, which covers the common case of a plain formula.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed at `point`.
    fn value(&self, point: &[f64]) -> Result<f64, Self::Error>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    fn value(&self, point: &[f64]) -> Result<f64, Self::Error> {
        Ok(self(point))
    }
}
