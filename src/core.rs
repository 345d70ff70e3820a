//! Core functionality. You don't need to import this module since all its public members are
//! part of the crate namespace.

use crate::error::{Error, Result};

use log::debug;
use num_traits::{Float, FloatConst, FromPrimitive};
use serde::{Deserialize, Serialize};
use special::Error as ErrorFunction;

/// Number of points used to draw the smooth reference curve.
pub const CURVE_SAMPLES: usize = 100;

/// Trait which every integrand must implement.
pub trait Integrand<T> {
    /// Evaluates the integrand at `x`.
    fn call(&self, x: T) -> T;

    /// Evaluates the integrand elementwise.
    fn call_all(&self, xs: &[T]) -> Vec<T>
    where
        T: Copy,
    {
        xs.iter().map(|&x| self.call(x)).collect()
    }
}

/// Integrands whose definite integral is known in closed form.
pub trait ClosedForm<T>: Integrand<T> {
    /// Returns the exact value of the integral over `interval`.
    fn exact(&self, interval: &Interval<T>) -> T;
}

/// The Gaussian $f(x) = e^{-x^2}$.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Gaussian;

impl<T: Float> Integrand<T> for Gaussian {
    fn call(&self, x: T) -> T {
        (-(x * x)).exp()
    }
}

/// Uses $\int_a^b e^{-x^2} \mathrm{d}x = \frac{\sqrt{\pi}}{2} \left( \mathrm{erf}(b) -
/// \mathrm{erf}(a) \right)$.
impl<T> ClosedForm<T> for Gaussian
where
    T: Float + FloatConst + ErrorFunction,
{
    fn exact(&self, interval: &Interval<T>) -> T {
        let two = T::one() + T::one();
        T::PI().sqrt() / two * (interval.right().error() - interval.left().error())
    }
}

/// A closed interval $[a, b]$ with finite bounds and $a < b$.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct Interval<T> {
    left: T,
    right: T,
}

impl<T: Float> Interval<T> {
    /// Constructs the interval from `left` to `right`.
    pub fn new(left: T, right: T) -> Result<Self> {
        if !left.is_finite() || !right.is_finite() || left >= right {
            return Err(Error::InvalidInterval);
        }

        Ok(Self { left, right })
    }

    /// The interval $[0, 3]$ all figures are drawn on.
    pub fn standard() -> Self {
        Self {
            left: T::zero(),
            right: T::one() + T::one() + T::one(),
        }
    }

    /// Returns the lower bound $a$.
    pub fn left(&self) -> T {
        self.left
    }

    /// Returns the upper bound $b$.
    pub fn right(&self) -> T {
        self.right
    }

    /// Returns $b - a$.
    pub fn width(&self) -> T {
        self.right - self.left
    }
}

/// A uniform partition of an [`Interval`] into `N` subintervals of width $h = (b - a) / N$.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition<T> {
    nodes: Vec<T>,
    midpoints: Vec<T>,
    step: T,
}

impl<T> Partition<T>
where
    T: Float + FromPrimitive + std::fmt::Debug,
{
    /// Subdivides `interval` into `subdivisions` subintervals of equal width.
    ///
    /// The partition has `subdivisions + 1` nodes; the last one is exactly the upper bound of
    /// the interval.
    pub fn new(interval: &Interval<T>, subdivisions: usize) -> Result<Self> {
        if subdivisions == 0 {
            return Err(Error::InvalidSubdivisionCount(subdivisions));
        }

        let index = |k: usize| T::from_usize(k).ok_or(Error::InvalidSubdivisionCount(subdivisions));

        let step = interval.width() / index(subdivisions)?;
        let half = T::one() / (T::one() + T::one());

        let mut nodes = (0..subdivisions)
            .map(|k| Ok(interval.left() + step * index(k)?))
            .collect::<Result<Vec<_>>>()?;
        nodes.push(interval.right());

        let midpoints = (0..subdivisions)
            .map(|k| Ok(interval.left() + step * (index(k)? + half)))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "partitioned [{:?}, {:?}] into {} subintervals of width {:?}",
            interval.left(),
            interval.right(),
            subdivisions,
            step
        );

        Ok(Self {
            nodes,
            midpoints,
            step,
        })
    }
}

impl<T: Copy> Partition<T> {
    /// Returns the number of subintervals, `N`.
    pub fn subdivisions(&self) -> usize {
        self.midpoints.len()
    }

    /// Returns the width $h$ of every subinterval.
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns all `N + 1` nodes.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Returns the left end points of the subintervals.
    pub fn left_nodes(&self) -> &[T] {
        &self.nodes[..self.subdivisions()]
    }

    /// Returns the right end points of the subintervals.
    pub fn right_nodes(&self) -> &[T] {
        &self.nodes[1..]
    }

    /// Returns the `N` midpoints $a + (k + 1/2) h$.
    pub fn midpoints(&self) -> &[T] {
        &self.midpoints
    }
}

/// Points $(x, f(x))$ evenly spread over an interval, including both end points.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledCurve<T> {
    points: Vec<(T, T)>,
}

impl<T> SampledCurve<T>
where
    T: Float + FromPrimitive,
{
    /// Samples `integrand` at `samples` equally spaced points of `interval`.
    pub fn sample<I>(integrand: &I, interval: &Interval<T>, samples: usize) -> Result<Self>
    where
        I: Integrand<T>,
    {
        if samples < 2 {
            return Err(Error::InvalidSampleCount(samples));
        }

        let index = |k: usize| T::from_usize(k).ok_or(Error::InvalidSampleCount(samples));
        let step = interval.width() / index(samples - 1)?;

        let mut points = Vec::with_capacity(samples);
        for k in 0..samples - 1 {
            let x = interval.left() + step * index(k)?;
            points.push((x, integrand.call(x)));
        }
        points.push((interval.right(), integrand.call(interval.right())));

        Ok(Self { points })
    }

    /// Returns the largest sampled function value.
    pub fn max_value(&self) -> T {
        self.points
            .iter()
            .fold(T::neg_infinity(), |acc, &(_, y)| acc.max(y))
    }
}

impl<T> SampledCurve<T> {
    /// Returns the sampled points.
    pub fn points(&self) -> &[(T, T)] {
        &self.points
    }
}
