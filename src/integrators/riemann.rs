//! Left and right Riemann sums
use super::{Cell, Estimate, Rule};
use crate::core::{Integrand, Partition};

use log::debug;
use num_traits::Float;
use std::fmt::Debug;

/// Approximates the integral with $\sum_{k=0}^{N-1} h f(x_k)$.
pub fn left<T, I>(integrand: &I, partition: &Partition<T>) -> Estimate<T>
where
    T: Float + Debug,
    I: Integrand<T>,
{
    endpoint_sum(integrand, partition, Rule::LeftRiemann, partition.left_nodes())
}

/// Approximates the integral with $\sum_{k=0}^{N-1} h f(x_{k+1})$.
pub fn right<T, I>(integrand: &I, partition: &Partition<T>) -> Estimate<T>
where
    T: Float + Debug,
    I: Integrand<T>,
{
    endpoint_sum(integrand, partition, Rule::RightRiemann, partition.right_nodes())
}

/// Sums rectangles of width $h$ whose heights are the integrand sampled at `nodes`. Rectangle `k`
/// always starts at the left node of subinterval `k`.
fn endpoint_sum<T, I>(
    integrand: &I,
    partition: &Partition<T>,
    rule: Rule,
    nodes: &[T],
) -> Estimate<T>
where
    T: Float + Debug,
    I: Integrand<T>,
{
    let h = partition.step();
    let heights = integrand.call_all(nodes);

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

    let samples = nodes.iter().copied().zip(heights.iter().copied()).collect();

    debug!("{} sum with N={}: {:?}", rule, partition.subdivisions(), value);

    Estimate::new(rule, value, samples, cells)
}
