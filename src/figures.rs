//! The two figures: Riemann sums next to the midpoint rule, and the trapezoid rule.
//!
//! Both figures integrate the [`Gaussian`] over the [standard interval](Interval::standard)
//! $[0, 3]$. All numbers are computed and validated before anything is drawn, and they are only
//! reported once the figure has been written.
use crate::callbacks::{Callback, Report};
use crate::config::PlotConfig;
use crate::core::{ClosedForm, Gaussian, Interval, Partition, SampledCurve};
use crate::error::Result;
use crate::integrators;
use crate::render::{self, Panel};

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The numbers shown by [`plot_riemann_midpoint`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RiemannMidpointReport {
    subdivisions: usize,
    exact: f64,
    left: f64,
    right: f64,
    midpoint: f64,
    output: PathBuf,
}

impl RiemannMidpointReport {
    /// Returns the number of subintervals.
    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// Returns the exact value of the integral.
    pub fn exact(&self) -> f64 {
        self.exact
    }

    /// Returns the left Riemann sum.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right Riemann sum.
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the midpoint rule estimate.
    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }

    /// Returns the SVG file the figure was written to.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Report for RiemannMidpointReport {
    fn precision(&self) -> usize {
        4
    }

    fn values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Exact", self.exact),
            (integrators::Rule::LeftRiemann.label(), self.left),
            (integrators::Rule::RightRiemann.label(), self.right),
            (integrators::Rule::Midpoint.label(), self.midpoint),
        ]
    }
}

/// The numbers shown by [`plot_trapezoid`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TrapezoidReport {
    subdivisions: usize,
    exact: f64,
    trapezoid: f64,
    output: PathBuf,
}

impl TrapezoidReport {
    /// Returns the number of subintervals.
    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// Returns the exact value of the integral.
    pub fn exact(&self) -> f64 {
        self.exact
    }

    /// Returns the trapezoid rule estimate.
    pub fn trapezoid(&self) -> f64 {
        self.trapezoid
    }

    /// Returns the SVG file the figure was written to.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Report for TrapezoidReport {
    fn precision(&self) -> usize {
        5
    }

    fn values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Exact", self.exact),
            (integrators::Rule::Trapezoid.label(), self.trapezoid),
        ]
    }
}

/// Approximates the integral with the left and right Riemann sums and the midpoint rule on
/// `subdivisions` subintervals, draws one panel per rule and passes the numbers to `callback`.
///
/// Fails with [`Error::InvalidSubdivisionCount`](crate::Error::InvalidSubdivisionCount) before
/// anything is written if `subdivisions` is zero, and with [`Error::Config`](crate::Error::Config)
/// if `config` does not [validate](PlotConfig::validate).
pub fn plot_riemann_midpoint<C>(
    subdivisions: usize,
    config: &PlotConfig,
    callback: &C,
) -> Result<RiemannMidpointReport>
where
    C: Callback<RiemannMidpointReport>,
{
    let interval = Interval::<f64>::standard();
    let partition = Partition::new(&interval, subdivisions)?;
    config.validate()?;
    let curve = SampledCurve::sample(&Gaussian, &interval, config.curve_samples)?;

    let left = integrators::left(&Gaussian, &partition);
    let right = integrators::right(&Gaussian, &partition);
    let midpoint = integrators::midpoint(&Gaussian, &partition);
    let exact = Gaussian.exact(&interval);

    let panels = [
        Panel::new(&curve, &left).with_y_label("f(x)"),
        Panel::new(&curve, &right),
        Panel::new(&curve, &midpoint),
    ];

    let output = config.riemann_output(subdivisions);
    prepare_output(&output)?;
    render::draw_figure(&output, config.riemann_size, &panels)?;

    let report = RiemannMidpointReport {
        subdivisions,
        exact,
        left: left.value(),
        right: right.value(),
        midpoint: midpoint.value(),
        output,
    };
    callback.print(&report)?;

    Ok(report)
}

/// Approximates the integral with the trapezoid rule on `subdivisions` subintervals, draws the
/// trapezoids and passes the numbers to `callback`.
///
/// Fails like [`plot_riemann_midpoint`] on a zero subdivision count or an invalid `config`.
pub fn plot_trapezoid<C>(
    subdivisions: usize,
    config: &PlotConfig,
    callback: &C,
) -> Result<TrapezoidReport>
where
    C: Callback<TrapezoidReport>,
{
    let interval = Interval::<f64>::standard();
    let partition = Partition::new(&interval, subdivisions)?;
    config.validate()?;
    let curve = SampledCurve::sample(&Gaussian, &interval, config.curve_samples)?;

    let trapezoid = integrators::trapezoid(&Gaussian, &partition);
    let exact = Gaussian.exact(&interval);

    let panels = [Panel::new(&curve, &trapezoid).with_y_label("f(x)")];

    let output = config.trapezoid_output(subdivisions);
    prepare_output(&output)?;
    render::draw_figure(&output, config.trapezoid_size, &panels)?;

    let report = TrapezoidReport {
        subdivisions,
        exact,
        trapezoid: trapezoid.value(),
        output,
    };
    callback.print(&report)?;

    Ok(report)
}

fn prepare_output(output: &Path) -> Result<()> {
    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            debug!("creating output directory {}", dir.display());
            fs::create_dir_all(dir)?;
        }
    }

    Ok(())
}
