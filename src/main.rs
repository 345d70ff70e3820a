use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;

use quadplot::callbacks::{Callback, JsonCallback, SimpleCallback};
use quadplot::config::PlotConfig;
use quadplot::figures::{RiemannMidpointReport, TrapezoidReport};
use quadplot::{plot_riemann_midpoint, plot_trapezoid, Result};

/// Draw elementary quadrature rules applied to exp(-x^2) on [0, 3]
#[derive(Parser, Debug)]
#[command(name = "quadplot", version)]
struct Opt {
    /// JSON file with figure settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory the SVG files are written to, overrides the configuration file
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,
    /// Print the numbers as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Left and right Riemann sums next to the midpoint rule
    Riemann {
        /// Number of subintervals
        subdivisions: usize,
    },
    /// The trapezoid rule
    Trapezoid {
        /// Number of subintervals
        subdivisions: usize,
    },
    /// Both figures
    All {
        /// Number of subintervals
        subdivisions: usize,
    },
}

fn load_config(opt: &Opt) -> Result<PlotConfig> {
    let mut config = match &opt.config {
        Some(path) => PlotConfig::from_path(path)?,
        None => PlotConfig::default(),
    };

    if let Some(dir) = &opt.output_dir {
        config.output_dir = dir.clone();
    }

    Ok(config)
}

fn run<C>(cmd: &Cmd, config: &PlotConfig, callback: &C) -> Result<()>
where
    C: Callback<RiemannMidpointReport> + Callback<TrapezoidReport>,
{
    match *cmd {
        Cmd::Riemann { subdivisions } => {
            plot_riemann_midpoint(subdivisions, config, callback)?;
        }
        Cmd::Trapezoid { subdivisions } => {
            plot_trapezoid(subdivisions, config, callback)?;
        }
        Cmd::All { subdivisions } => {
            plot_riemann_midpoint(subdivisions, config, callback)?;
            plot_trapezoid(subdivisions, config, callback)?;
        }
    }

    Ok(())
}

fn route_cmd(opt: Opt) -> i32 {
    let result = load_config(&opt).and_then(|config| {
        if opt.json {
            run(&opt.cmd, &config, &JsonCallback {})
        } else {
            run(&opt.cmd, &config, &SimpleCallback {})
        }
    });

    match result {
        Ok(()) => 0,
        Err(err) => {
            error!("{}", err);
            1
        }
    }
}

fn main() {
    env_logger::init();

    let opt = Opt::parse();

    let exit_code = route_cmd(opt);

    std::process::exit(exit_code);
}
