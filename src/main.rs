use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use julia_escape::{
    config::{DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH},
    escape_boundary, main_cardioid, AxisOrigin, Complex64, GridConfig, Region, Strategy, Summary,
};

/// Sample the escape-time field of a quadratic Julia set.
///
/// Progress and the summary are logged at `info`, which is shown unless
/// `RUST_LOG` selects a quieter level.
#[derive(Parser, Debug)]
#[command(name = "julia-escape", version)]
struct Args {
    /// Real part of the parameter c.
    #[arg(long, default_value_t = 0.285, allow_hyphen_values = true)]
    re: f64,

    /// Imaginary part of the parameter c.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    im: f64,

    /// Take c from the main cardioid at this fraction of a turn (overrides --re/--im).
    #[arg(long, allow_hyphen_values = true)]
    cardioid: Option<f64>,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    /// Sample `xmin,xmax,ymin,ymax` instead of the escape-boundary square.
    #[arg(long, value_parser = parse_region, allow_hyphen_values = true)]
    region: Option<Region>,

    /// Start the y-samples of a custom region at its xmin, as the historical sampler did.
    #[arg(long, requires = "region")]
    shared_y_origin: bool,

    /// Evaluate rows on a worker pool.
    #[arg(long)]
    parallel: bool,

    /// Worker count for --parallel (defaults to the number of CPUs).
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Write the counts as native-endian u32 values to this file.
    #[arg(long)]
    dump: Option<PathBuf>,
}

fn parse_region(value: &str) -> Result<Region, String> {
    let bounds = value
        .split(',')
        .map(|bound| bound.trim().parse::<f64>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<f64>, String>>()?;
    match bounds[..] {
        [xmin, xmax, ymin, ymax] => Ok(Region::new(xmin, xmax, ymin, ymax)),
        _ => Err(format!("expected 4 comma-separated bounds, got {}", bounds.len())),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let param = match args.cardioid {
        Some(alfa) => main_cardioid(alfa),
        None => Complex64::new(args.re, args.im),
    };

    let mut config = GridConfig::new(param)
        .with_size(args.width, args.height)
        .with_max_iterations(args.max_iterations);
    if let Some(region) = args.region {
        config = config.with_region(region);
    }
    if args.shared_y_origin {
        config = config.with_axis_origin(AxisOrigin::Shared);
    }
    if args.parallel {
        config = config.with_strategy(Strategy::Parallel {
            threads: args.threads,
        });
    }

    info!("Julia set for c={}", param);
    info!("R={:.4}", escape_boundary(param));
    info!("max number of iterations: {}", args.max_iterations);
    info!(
        "running over {} complex numbers",
        args.width as u64 * args.height as u64
    );

    let start = Instant::now();
    let field = match config.sample() {
        Ok(field) => field,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    info!("elapsed time: {:?}", start.elapsed());

    let summary = Summary::of(&field);
    info!("max iteration: {}", summary.max_count);
    info!(
        "{} escaped, {} interior, {} distinct counts",
        summary.escaped,
        summary.interior,
        summary.bucket_labels().len()
    );

    if let Some(path) = args.dump {
        if let Err(err) = std::fs::write(&path, field.as_bytes()) {
            error!("failed to write {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
        info!("wrote {}", path.display());
    }

    ExitCode::SUCCESS
}
