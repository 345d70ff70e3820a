//! Midpoint rule
use super::{Cell, Estimate, Rule};
use crate::core::{Integrand, Partition};

use log::debug;
use num_traits::Float;
use std::fmt::Debug;

/// Approximates the integral with $\sum_{k=0}^{N-1} h f(a + (k + 1/2) h)$.
pub fn midpoint<T, I>(integrand: &I, partition: &Partition<T>) -> Estimate<T>
where
    T: Float + Debug,
    I: Integrand<T>,
{
    let h = partition.step();
    let midpoints = partition.midpoints();
    let heights = integrand.call_all(midpoints);

    let value = heights.iter().fold(T::zero(), |acc, &y| acc + h * y);

    let cells = partition
        .left_nodes()
        .iter()
        .zip(&heights)
        .map(|(&x, &height)| Cell::Rectangle {
            x,
            width: h,
            height,
        })
        .collect();

    let samples = midpoints
        .iter()
        .copied()
        .zip(heights.iter().copied())
        .collect();

    debug!(
        "{} sum with N={}: {:?}",
        Rule::Midpoint,
        partition.subdivisions(),
        value
    );

    Estimate::new(Rule::Midpoint, value, samples, cells)
}
