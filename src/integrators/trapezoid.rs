//! Trapezoid rule
use super::{Cell, Estimate, Rule};
use crate::core::{Integrand, Partition};

use log::debug;
use num_traits::Float;
use std::fmt::Debug;

/// Approximates the integral with $\sum_{k=0}^{N-1} \frac{h}{2} \left( f(x_k) + f(x_{k+1})
/// \right)$.
pub fn trapezoid<T, I>(integrand: &I, partition: &Partition<T>) -> Estimate<T>
where
    T: Float + Debug,
    I: Integrand<T>,
{
    let h = partition.step();
    let half = T::one() / (T::one() + T::one());
    let nodes = partition.nodes();
    let heights = integrand.call_all(nodes);

    let value = heights
        .windows(2)
        .fold(T::zero(), |acc, y| acc + half * h * (y[0] + y[1]));

    let cells = nodes
        .windows(2)
        .zip(heights.windows(2))
        .map(|(x, y)| Cell::Trapezoid {
            x0: x[0],
            x1: x[1],
            y0: y[0],
            y1: y[1],
        })
        .collect();

    let samples = nodes.iter().copied().zip(heights.iter().copied()).collect();

    debug!(
        "{} sum with N={}: {:?}",
        Rule::Trapezoid,
        partition.subdivisions(),
        value
    );

    Estimate::new(Rule::Trapezoid, value, samples, cells)
}
