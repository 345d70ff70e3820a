#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `quadplot` draws pictures of the elementary [quadrature rules] taught in a first
//! course on numerical analysis, and prints how close they come to the exact value.
//!
//! # What is drawn?
//!
//! Every figure shows the integrand
//!
//! $$ f(x) = e^{-x^2} $$
//!
//! on the interval $[0, 3]$, together with the shapes whose areas a rule adds up. The interval is
//! divided into $N$ subintervals of width $h = 3 / N$ with nodes $x_k = k h$, and
//!
//! - the *left Riemann sum* is $\sum_{k=0}^{N-1} h f(x_k)$,
//! - the *right Riemann sum* is $\sum_{k=0}^{N-1} h f(x_{k+1})$,
//! - the *midpoint rule* is $\sum_{k=0}^{N-1} h f(x_k + h/2)$,
//! - the *trapezoid rule* is $\sum_{k=0}^{N-1} \frac{h}{2} \left( f(x_k) + f(x_{k+1}) \right)$.
//!
//! The exact value, $\frac{\sqrt{\pi}}{2} \mathrm{erf}(3) \approx 0.8862$, is computed from the
//! [error function].
//!
//! # How is it organized?
//!
//! The numbers and the pictures are kept apart:
//!
//! - [`core`] and [`integrators`] compute partitions, sampled curves and estimates and never touch
//! a file,
//! - [`render`] turns estimates into SVG figures with the `plotters` crate,
//! - [`figures`] ties both together into [`plot_riemann_midpoint`] and [`plot_trapezoid`], which
//! hand their numbers to a [`Callback`](callbacks::Callback) for printing.
//!
//! [quadrature rules]: https://en.wikipedia.org/wiki/Numerical_integration
//! [error function]: https://en.wikipedia.org/wiki/Error_function

pub mod callbacks;
pub mod config;
pub mod core;
pub mod error;
pub mod figures;
pub mod integrators;
pub mod render;

pub use crate::core::*;
pub use crate::error::{Error, Result};
pub use crate::figures::{plot_riemann_midpoint, plot_trapezoid};
