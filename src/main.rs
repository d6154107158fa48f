use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use rs_plotter_arm::driver::{plan_and_transmit, DryRunDriver};
use rs_plotter_arm::kinematic_traits::{Elbow, Point2D};
use rs_plotter_arm::parameters::plotter_arm::{ElbowChoice, Parameters};
use rs_plotter_arm::planner::Planner;
use rs_plotter_arm::shapes::demo_square;
use rs_plotter_arm::utils::{dump_path, parse_point};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Plans strokes of the two-link plotting arm and prints the joint commands.
#[derive(Parser, Debug)]
#[command(name = "plotter-arm", version, about)]
struct Args {
    /// YAML file with the arm parameters. The built-in drawing arm is used if not given.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reach of the arm (twice the link length), overrides the configuration.
    #[arg(long)]
    reach: Option<f64>,

    /// Maximal distance between waypoints, overrides the configuration.
    #[arg(long)]
    resolution: Option<f64>,

    /// Preferred elbow configuration: primary or mirrored.
    #[arg(long, value_parser = parse_elbow)]
    elbow: Option<Elbow>,

    /// Always use the preferred elbow configuration, even if the other is closer.
    #[arg(long)]
    fixed_elbow: bool,

    /// Start of the stroke, as x,y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, requires = "to")]
    from: Option<Point2D>,

    /// End of the stroke, as x,y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, requires = "from")]
    to: Option<Point2D>,

    /// Draw the test square instead of a single stroke.
    #[arg(long, conflicts_with_all = ["from", "to"])]
    square: bool,

    /// Print the effective parameters as YAML.
    #[arg(long)]
    dump_config: bool,
}

fn parse_elbow(text: &str) -> Result<Elbow, String> {
    Elbow::from_name(text).ok_or_else(|| format!("expected 'primary' or 'mirrored', got '{}'", text))
}

fn parameters(args: &Args) -> anyhow::Result<Parameters> {
    let mut parameters = match &args.config {
        Some(path) => Parameters::from_yaml_file(path)
            .with_context(|| format!("Failed to read parameters from {}", path.display()))?,
        None => Parameters::plotter(),
    };

    if let Some(reach) = args.reach {
        parameters.reach = reach;
    }
    if let Some(resolution) = args.resolution {
        parameters.resolution = resolution;
    }
    let elbow = args.elbow.unwrap_or(parameters.elbow.initial());
    parameters.elbow = if args.fixed_elbow || !parameters.elbow.is_continuous() {
        ElbowChoice::Fixed(elbow)
    } else {
        ElbowChoice::NearestToPrevious(elbow)
    };

    parameters.validate().context("Invalid parameters")?;
    Ok(parameters)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let parameters = parameters(&args)?;
    if args.dump_config {
        print!("{}", parameters.to_yaml());
    }

    let corners = match (args.square, args.from, args.to) {
        (true, _, _) => demo_square(),
        (false, Some(from), Some(to)) => vec![from, to],
        _ if args.dump_config => return Ok(()),
        _ => bail!("Nothing to plan, use --from x,y --to x,y or --square"),
    };

    let planner = Planner::new(&parameters)?;
    info!(
        "Planning {} corners, reach {}, resolution {}, elbow {:?}",
        corners.len(),
        planner.kinematics.reach(),
        planner.resolution,
        planner.elbow
    );

    let mut driver = DryRunDriver::new();
    let sent = plan_and_transmit(&planner, &corners, &mut driver)?;
    dump_path(&driver.commands);
    info!("{} commands sent", sent);
    Ok(())
}
