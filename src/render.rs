//! Drawing of panels with the `plotters` crate.
//!
//! A [`Panel`] is a backend-neutral description of a single chart: the reference curve, the
//! cells of a quadrature rule and the points at which the integrand was sampled. A figure is a
//! row of panels written to an SVG file by [`draw_figure`].
use crate::core::SampledCurve;
use crate::error::{Error, Result};
use crate::integrators::{Cell, Estimate};

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Headroom above the largest function value.
const Y_HEADROOM: f64 = 1.05;

/// Size of the cross markers in pixels.
const MARKER_SIZE: u32 = 4;

/// Everything needed to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    title: String,
    x_label: String,
    y_label: Option<String>,
    x_range: (f64, f64),
    y_max: f64,
    curve: Vec<(f64, f64)>,
    cells: Vec<Cell<f64>>,
    markers: Vec<(f64, f64)>,
}

impl Panel {
    /// Creates a panel showing `curve` together with the cells and sample points of `estimate`.
    /// The horizontal range is spanned by the curve.
    pub fn new(curve: &SampledCurve<f64>, estimate: &Estimate<f64>) -> Self {
        let points = curve.points();
        let x_min = points.first().map_or(0.0, |&(x, _)| x);
        let x_max = points.last().map_or(1.0, |&(x, _)| x);
        let y_max = estimate
            .samples()
            .iter()
            .fold(curve.max_value(), |acc, &(_, y)| acc.max(y));

        Self {
            title: estimate.rule().title().to_string(),
            x_label: "x".to_string(),
            y_label: None,
            x_range: (x_min, x_max),
            y_max: Y_HEADROOM * y_max,
            curve: points.to_vec(),
            cells: estimate.cells().to_vec(),
            markers: estimate.samples().to_vec(),
        }
    }

    /// Labels the vertical axis.
    pub fn with_y_label(mut self, label: &str) -> Self {
        self.y_label = Some(label.to_string());
        self
    }

    /// Returns the title of the panel.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the label of the vertical axis, if there is one.
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Returns the cells drawn below the curve.
    pub fn cells(&self) -> &[Cell<f64>] {
        &self.cells
    }

    /// Returns the marked sample points.
    pub fn markers(&self) -> &[(f64, f64)] {
        &self.markers
    }
}

fn rendering<E: std::fmt::Display>(err: E) -> Error {
    Error::Rendering(err.to_string())
}

/// Draws `panels` side by side into an SVG file at `path` with `size` pixels.
pub fn draw_figure(path: &Path, size: (u32, u32), panels: &[Panel]) -> Result<()> {
    if panels.is_empty() {
        return Err(Error::Rendering("a figure needs at least one panel".to_string()));
    }

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(rendering)?;

    for (area, panel) in root.split_evenly((1, panels.len())).iter().zip(panels) {
        draw_panel(area, panel)?;
    }

    root.present().map_err(rendering)?;

    info!("wrote figure with {} panel(s) to {}", panels.len(), path.display());

    Ok(())
}

fn draw_panel<DB>(area: &DrawingArea<DB, Shift>, panel: &Panel) -> Result<()>
where
    DB: DrawingBackend,
{
    let (x_min, x_max) = panel.x_range;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_min..x_max, 0.0..panel.y_max)
        .map_err(rendering)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh().x_desc(panel.x_label.as_str());
    if let Some(label) = &panel.y_label {
        mesh.y_desc(label.as_str());
    }
    mesh.draw().map_err(rendering)?;

    let fill = BLUE.mix(0.4).filled();
    chart
        .draw_series(panel.cells.iter().filter_map(|cell| match *cell {
            Cell::Rectangle { x, width, height } => {
                Some(Rectangle::new([(x, 0.0), (x + width, height)], fill))
            }
            Cell::Trapezoid { .. } => None,
        }))
        .map_err(rendering)?;
    chart
        .draw_series(panel.cells.iter().filter_map(|cell| match cell {
            Cell::Trapezoid { .. } => Some(Polygon::new(cell.vertices().to_vec(), fill)),
            Cell::Rectangle { .. } => None,
        }))
        .map_err(rendering)?;

    chart
        .draw_series(panel.cells.iter().map(|cell| {
            let mut outline = cell.vertices().to_vec();
            outline.push(outline[0]);
            PathElement::new(outline, BLACK.stroke_width(1))
        }))
        .map_err(rendering)?;

    chart
        .draw_series(LineSeries::new(
            panel.curve.iter().copied(),
            BLACK.stroke_width(2),
        ))
        .map_err(rendering)?;

    chart
        .draw_series(
            panel
                .markers
                .iter()
                .map(|&point| Cross::new(point, MARKER_SIZE, RED.stroke_width(2))),
        )
        .map_err(rendering)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Gaussian, Interval, Partition, CURVE_SAMPLES};
    use crate::integrators;
    use std::fs;

    fn curve() -> SampledCurve<f64> {
        SampledCurve::sample(&Gaussian, &Interval::standard(), CURVE_SAMPLES).unwrap()
    }

    #[test]
    fn panel_from_estimate() {
        let partition = Partition::new(&Interval::<f64>::standard(), 4).unwrap();
        let estimate = integrators::left(&Gaussian, &partition);
        let panel = Panel::new(&curve(), &estimate).with_y_label("f(x)");

        assert_eq!(panel.title(), "Left Riemann sum");
        assert_eq!(panel.y_label(), Some("f(x)"));
        assert_eq!(panel.cells().len(), 4);
        assert_eq!(panel.markers().len(), 4);
        assert_eq!(panel.x_range, (0.0, 3.0));
        assert_eq!(panel.y_max, 1.05);
    }

    #[test]
    fn draws_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trapezoid.svg");

        let partition = Partition::new(&Interval::<f64>::standard(), 3).unwrap();
        let estimate = integrators::trapezoid(&Gaussian, &partition);
        let panel = Panel::new(&curve(), &estimate);

        draw_figure(&path, (500, 300), &[panel]).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Trapezoid rule"));
    }

    #[test]
    fn refuses_empty_figure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");

        assert!(matches!(
            draw_figure(&path, (100, 100), &[]),
            Err(Error::Rendering(_))
        ));
        assert!(!path.exists());
    }
}
