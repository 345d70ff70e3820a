//! Elementary quadrature rules on uniform partitions.
//!
//! Every rule returns an [`Estimate`], which besides the approximated value of
//! $\int_a^b f(x) \mathrm{d}x$ contains the points at which the integrand was sampled and the
//! shapes whose areas add up to the estimate. The latter two are what the figures draw.
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod midpoint;
pub mod riemann;
pub mod trapezoid;

pub use midpoint::midpoint;
pub use riemann::{left, right};
pub use trapezoid::trapezoid;

/// The quadrature rules this crate knows about.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Rectangles with the height of the integrand at their left edge.
    LeftRiemann,
    /// Rectangles with the height of the integrand at their right edge.
    RightRiemann,
    /// Rectangles with the height of the integrand at their center.
    Midpoint,
    /// Trapezoids connecting the integrand at both edges.
    Trapezoid,
}

impl Rule {
    /// Returns the short name used when printing estimates.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LeftRiemann => "Left Riemann",
            Self::RightRiemann => "Right Riemann",
            Self::Midpoint => "Midpoint",
            Self::Trapezoid => "Trapezoid",
        }
    }

    /// Returns the title of the panel showing this rule.
    pub const fn title(self) -> &'static str {
        match self {
            Self::LeftRiemann => "Left Riemann sum",
            Self::RightRiemann => "Right Riemann sum",
            Self::Midpoint => "Midpoint rule",
            Self::Trapezoid => "Trapezoid rule",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The contribution of a single subinterval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell<T> {
    /// The rectangle $[x, x + w] \times [0, y]$.
    Rectangle {
        /// Left edge.
        x: T,
        /// Width, the step of the partition.
        width: T,
        /// Height, the sampled function value.
        height: T,
    },
    /// The quadrilateral with corners $(x_0, 0)$, $(x_1, 0)$, $(x_1, y_1)$ and $(x_0, y_0)$.
    Trapezoid {
        /// Left node.
        x0: T,
        /// Right node.
        x1: T,
        /// Function value at the left node.
        y0: T,
        /// Function value at the right node.
        y1: T,
    },
}

impl<T: Float> Cell<T> {
    /// Returns the corners of the cell in counter-clockwise order, starting at the bottom left.
    pub fn vertices(&self) -> [(T, T); 4] {
        match *self {
            Self::Rectangle { x, width, height } => [
                (x, T::zero()),
                (x + width, T::zero()),
                (x + width, height),
                (x, height),
            ],
            Self::Trapezoid { x0, x1, y0, y1 } => {
                [(x0, T::zero()), (x1, T::zero()), (x1, y1), (x0, y0)]
            }
        }
    }
}

/// The result of applying a [`Rule`] to an integrand.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate<T> {
    rule: Rule,
    value: T,
    samples: Vec<(T, T)>,
    cells: Vec<Cell<T>>,
}

impl<T: Copy> Estimate<T> {
    pub(crate) fn new(rule: Rule, value: T, samples: Vec<(T, T)>, cells: Vec<Cell<T>>) -> Self {
        Self {
            rule,
            value,
            samples,
            cells,
        }
    }

    /// Returns the rule that produced this estimate.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Returns the approximated value of the integral.
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the points $(x, f(x))$ at which the integrand was evaluated.
    pub fn samples(&self) -> &[(T, T)] {
        &self.samples
    }

    /// Returns one cell per subinterval.
    pub fn cells(&self) -> &[Cell<T>] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_names() {
        assert_eq!(Rule::LeftRiemann.to_string(), "Left Riemann");
        assert_eq!(Rule::Midpoint.title(), "Midpoint rule");
        assert_eq!(
            serde_json::to_string(&Rule::RightRiemann).unwrap(),
            "\"right_riemann\""
        );
    }

    #[test]
    fn cell_vertices() {
        let rectangle = Cell::Rectangle {
            x: 0.5,
            width: 0.5,
            height: 0.25,
        };
        assert_eq!(
            rectangle.vertices(),
            [(0.5, 0.0), (1.0, 0.0), (1.0, 0.25), (0.5, 0.25)]
        );

        let trapezoid = Cell::Trapezoid {
            x0: 0.0,
            x1: 1.0,
            y0: 1.0,
            y1: 0.5,
        };
        assert_eq!(
            trapezoid.vertices(),
            [(0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 1.0)]
        );
    }
}
