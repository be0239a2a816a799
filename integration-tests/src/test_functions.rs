use amoeba_core::Objective;
use thiserror::Error;

/// f(x) = Σ xᵢ², minimum 0 at the origin.
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rosenbrock's banana function, minimum 0 at (1, 1).
pub fn rosenbrock(x: &[f64]) -> f64 {
    let a = 1.0 - x[0];
    let b = x[1] - x[0] * x[0];
    a * a + 100.0 * b * b
}

/// Booth's function, minimum 0 at (1, 3).
pub fn booth(x: &[f64]) -> f64 {
    (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
}

/// A separable quadratic centered at `center`.
pub fn bowl(center: &[f64]) -> impl Fn(&[f64]) -> f64 + '_ {
    move |x: &[f64]| {
        x.iter()
            .zip(center)
            .map(|(xi, ci)| (xi - ci).powi(2))
            .sum()
    }
}

#[derive(Debug, Error)]
#[error("entropy is undefined at x[{index}] = {value}")]
pub struct OutsideDomain {
    pub index: usize,
    pub value: f64,
}

/// f(x) = Σ xᵢ ln xᵢ, defined only for positive coordinates.
///
/// The minimum is at xᵢ = 1/e for every coordinate.
pub struct Entropy;

impl Objective for Entropy {
    type Error = OutsideDomain;

    fn value(&self, x: &[f64]) -> Result<f64, Self::Error> {
        x.iter()
            .enumerate()
            .map(|(index, &value)| {
                if value > 0.0 {
                    Ok(value * value.ln())
                } else {
                    Err(OutsideDomain { index, value })
                }
            })
            .sum()
    }
}
