#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod plotter;

use abstutil::{prettyprint_usize, Timer};
use anyhow::{Context, Result};
use geom::UnitFmt;
use structopt::StructOpt;

use model::{QuiverStyle, Summary};

use self::plotter::{SvgConfig, SvgPlotter};

#[derive(StructOpt)]
struct Args {
    /// The path to a CSV file with timestamp, displacement, yaw_rate, and acceleration columns
    #[structopt(long)]
    input: String,
    /// Where to write the SVG plot
    #[structopt(long, default_value = "trajectory.svg")]
    output: String,
    /// Only draw an arrow for every Nth sample
    #[structopt(long, default_value = "1")]
    increment: usize,
    /// Pixels per meter
    #[structopt(long, default_value = "10")]
    scale: f64,
}

fn main() -> Result<()> {
    abstutil::logger::setup();

    let args = Args::from_iter(abstutil::cli_args());
    let mut timer = Timer::new("plot trajectory");
    run(args, &mut timer)
}

fn run(args: Args, timer: &mut Timer) -> Result<()> {
    if args.increment == 0 {
        bail!("--increment must be at least 1");
    }

    timer.start("load samples");
    let samples = model::load_samples(fs_err::File::open(&args.input)?)
        .with_context(|| format!("loading {}", args.input))?;
    timer.stop("load samples");

    timer.start("reconstruct");
    let reconstruction = model::reconstruct(&samples)?;
    timer.stop("reconstruct");

    let summary = Summary::new(&samples, &reconstruction);
    log_summary(&summary);

    timer.start("render");
    let mut plotter = SvgPlotter::new(
        &args.output,
        SvgConfig {
            scale: args.scale,
            ..Default::default()
        },
    );
    reconstruction.show(&mut plotter, args.increment, &QuiverStyle::default())?;
    timer.stop("render");

    info!("Wrote {}", args.output);
    Ok(())
}

fn log_summary(summary: &Summary) {
    let metric = UnitFmt {
        round_durations: false,
        metric: true,
    };

    match summary.duration {
        Some(duration) => info!(
            "{} samples over {}",
            prettyprint_usize(summary.num_samples),
            duration
        ),
        None => warn!("The total duration is too large to represent"),
    }
    match summary.distance {
        Some(distance) => info!(
            "Travelled {}, top speed {}",
            distance.to_string(&metric),
            summary.top_speed.to_string(&metric)
        ),
        None => warn!("The total distance is too large to represent"),
    }
    match (summary.final_pos, summary.final_heading) {
        (Some(pos), Some(heading)) => info!(
            "Ended at ({:.2}, {:.2}) facing {:.1} degrees",
            pos.x(),
            pos.y(),
            heading.normalized_degrees()
        ),
        _ => warn!("The final position or heading isn't a finite number"),
    }
    if summary.degenerate_intervals > 0 {
        warn!(
            "{} intervals were too short to measure speed over",
            prettyprint_usize(summary.degenerate_intervals)
        );
    }
}
