use quadplot::callbacks::{format_report, SinkCallback};
use quadplot::config::PlotConfig;
use quadplot::figures::{RiemannMidpointReport, TrapezoidReport};
use quadplot::{plot_riemann_midpoint, plot_trapezoid, Error};

use assert_approx_eq::assert_approx_eq;
use std::fs;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> PlotConfig {
    PlotConfig {
        output_dir: dir.path().join("figures"),
        ..PlotConfig::default()
    }
}

#[test]
fn riemann_midpoint_figure() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let report: RiemannMidpointReport =
        plot_riemann_midpoint(6, &config, &SinkCallback {}).unwrap();

    assert_eq!(report.subdivisions(), 6);
    assert_approx_eq!(report.exact(), 0.886_207_348_259_521_1, 1e-12);
    assert_approx_eq!(report.left(), 1.136_162_770_914_836_8, 1e-12);
    assert_approx_eq!(report.right(), 0.636_224_475_816_880_1, 1e-12);
    assert_approx_eq!(report.midpoint(), 0.886_213_593_594_548_2, 1e-12);
    assert_eq!(
        format_report(&report),
        "Exact: 0.8862\nLeft Riemann: 1.1362\nRight Riemann: 0.6362\nMidpoint: 0.8862\n"
    );

    assert_eq!(report.output(), config.riemann_output(6).as_path());
    let svg = fs::read_to_string(report.output()).unwrap();
    assert!(svg.contains("Left Riemann sum"));
    assert!(svg.contains("Right Riemann sum"));
    assert!(svg.contains("Midpoint rule"));
}

#[test]
fn trapezoid_figure() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let report: TrapezoidReport = plot_trapezoid(6, &config, &SinkCallback {}).unwrap();

    assert_eq!(report.subdivisions(), 6);
    assert_approx_eq!(report.trapezoid(), 0.886_193_623_365_858_5, 1e-12);
    assert_eq!(format_report(&report), "Exact: 0.88621\nTrapezoid: 0.88619\n");

    let svg = fs::read_to_string(report.output()).unwrap();
    assert!(svg.contains("Trapezoid rule"));
}

#[test]
fn single_subdivision() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let riemann = plot_riemann_midpoint(1, &config, &SinkCallback {}).unwrap();
    assert_eq!(riemann.left(), 3.0);

    let trapezoid = plot_trapezoid(1, &config, &SinkCallback {}).unwrap();
    assert_approx_eq!(trapezoid.trapezoid(), 1.500_185_114_706_13, 1e-12);
}

#[test]
fn zero_subdivisions_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    assert!(matches!(
        plot_riemann_midpoint(0, &config, &SinkCallback {}),
        Err(Error::InvalidSubdivisionCount(0))
    ));
    assert!(matches!(
        plot_trapezoid(0, &config, &SinkCallback {}),
        Err(Error::InvalidSubdivisionCount(0))
    ));
    assert!(!config.output_dir.exists());
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotConfig {
        trapezoid_size: (0, 0),
        ..config_in(&dir)
    };

    assert!(matches!(
        plot_trapezoid(3, &config, &SinkCallback {}),
        Err(Error::Config(_))
    ));

    let config = PlotConfig {
        riemann_size: (0, 600),
        ..config_in(&dir)
    };

    assert!(matches!(
        plot_riemann_midpoint(3, &config, &SinkCallback {}),
        Err(Error::Config(_))
    ));
    assert!(!config.output_dir.exists());

    // the subdivision count is still checked first
    assert!(matches!(
        plot_riemann_midpoint(0, &config, &SinkCallback {}),
        Err(Error::InvalidSubdivisionCount(0))
    ));
}

#[test]
fn figures_are_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let first = plot_riemann_midpoint(9, &config, &SinkCallback {}).unwrap();
    let first_svg = fs::read(first.output()).unwrap();

    let second = plot_riemann_midpoint(9, &config, &SinkCallback {}).unwrap();
    let second_svg = fs::read(second.output()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_svg, second_svg);

    let first = plot_trapezoid(9, &config, &SinkCallback {}).unwrap();
    let first_svg = fs::read(first.output()).unwrap();

    let second = plot_trapezoid(9, &config, &SinkCallback {}).unwrap();
    let second_svg = fs::read(second.output()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_svg, second_svg);
}
