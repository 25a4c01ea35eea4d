//! Subcommand execution.

use anyhow::{Context, Result};
use antigrav::{DEFAULT_MASS, Simulator, TimeCursor};
use tracing::info;

use crate::cli::{Command, ForceArgs, OptimizeArgs, ProfileArgs, SurfaceArgs, TrajectoryArgs};
use crate::config::Settings;
use crate::report::{
    Comparison, DemoReport, ForceReading, ForceReport, OptimizeReport, ProfileReport, Report,
    SurfaceReport, TrajectoryReport,
};

/// Mass of the demo object when no flag or config file sets one.
const DEMO_MASS: f64 = 5.0;
/// Time of the single force reading in the demo.
const DEMO_FORCE_TIME: f64 = 1.0;
/// Levitation target of the demo optimization step.
const DEMO_TARGET_HEIGHT: f64 = 20.0;

/// Runs one subcommand against resolved settings.
///
/// # Errors
///
/// Fails when the settings describe an invalid simulator or the command
/// arguments are rejected by the model.
pub fn execute(command: &Command, settings: &Settings) -> Result<Report> {
    let mass = match command {
        Command::Demo => settings.mass_or(DEMO_MASS),
        _ => settings.mass_or(DEFAULT_MASS),
    };
    let sim = Simulator::with_field(mass, settings.field).context("failed to set up simulator")?;

    match command {
        Command::Force(args) => Ok(Report::Force(force(&sim, args))),
        Command::Trajectory(args) => trajectory(&sim, settings, args).map(Report::Trajectory),
        Command::Profile(args) => profile(&sim, args).map(Report::Profile),
        Command::Optimize(args) => optimize(&sim, settings, args).map(Report::Optimize),
        Command::Surface(args) => Ok(Report::Surface(surface(&sim, args))),
        Command::Demo => demo(&sim, settings).map(Report::Demo),
    }
}

fn force(sim: &Simulator, args: &ForceArgs) -> ForceReport {
    let readings = match args.time {
        Some(time) => vec![ForceReading {
            time,
            force: sim.force_at(time),
        }],
        None => {
            let mut cursor = TimeCursor::new();
            (0..args.count)
                .map(|_| {
                    let time = cursor.current();
                    let force = sim.force_with_cursor(&mut cursor);
                    ForceReading { time, force }
                })
                .collect()
        }
    };
    info!(readings = readings.len(), "force evaluated");

    ForceReport {
        mass: sim.mass(),
        field: *sim.field(),
        readings,
    }
}

fn trajectory(
    sim: &Simulator,
    settings: &Settings,
    args: &TrajectoryArgs,
) -> Result<TrajectoryReport> {
    let duration = args.duration.unwrap_or(settings.duration);
    let steps = args.steps.unwrap_or(settings.steps);
    let trajectory = sim
        .simulate_trajectory(duration, steps)
        .context("failed to simulate trajectory")?;
    info!(duration, steps, "trajectory simulated");

    Ok(TrajectoryReport {
        mass: sim.mass(),
        field: *sim.field(),
        duration,
        steps,
        final_height: trajectory.final_height(),
        max_height: trajectory.max_height(),
        trajectory,
        plot: args.plot,
    })
}

fn profile(sim: &Simulator, args: &ProfileArgs) -> Result<ProfileReport> {
    let series = sim
        .force_series(args.duration, args.samples)
        .context("failed to sample force")?;
    info!(samples = series.len(), "force profile sampled");

    Ok(ProfileReport {
        mass: sim.mass(),
        field: *sim.field(),
        peak: series.peak(),
        series,
        plot: args.plot,
    })
}

fn optimize(sim: &Simulator, settings: &Settings, args: &OptimizeArgs) -> Result<OptimizeReport> {
    let optimized = sim
        .optimize_field(args.target)
        .with_context(|| format!("failed to optimize field for {} m", args.target))?;
    info!(
        target = args.target,
        strength = optimized.strength(),
        "field optimized"
    );

    let comparison = if args.apply {
        let duration = args.duration.unwrap_or(settings.duration);
        let steps = args.steps.unwrap_or(settings.steps);

        let before = sim
            .simulate_trajectory(duration, steps)
            .context("failed to simulate baseline trajectory")?;
        let mut tuned = sim.clone();
        tuned.set_field(optimized);
        let after = tuned
            .simulate_trajectory(duration, steps)
            .context("failed to simulate optimized trajectory")?;

        Some(Comparison {
            duration,
            steps,
            final_height_before: before.final_height(),
            final_height_after: after.final_height(),
            max_height_before: before.max_height(),
            max_height_after: after.max_height(),
        })
    } else {
        None
    };

    Ok(OptimizeReport {
        target_height: args.target,
        original: *sim.field(),
        optimized,
        comparison,
    })
}

fn surface(sim: &Simulator, args: &SurfaceArgs) -> SurfaceReport {
    let field = *sim.field();
    let surface = field.surface(args.resolution);
    info!(resolution = args.resolution, "field surface sampled");

    SurfaceReport {
        field,
        peak: surface.peak(),
        surface,
    }
}

fn demo(sim: &Simulator, settings: &Settings) -> Result<DemoReport> {
    let force = ForceReading {
        time: DEMO_FORCE_TIME,
        force: sim.force_at(DEMO_FORCE_TIME),
    };
    let trajectory = sim
        .simulate_trajectory(settings.duration, settings.steps)
        .context("failed to simulate demo trajectory")?;
    let optimized = sim
        .optimize_field(DEMO_TARGET_HEIGHT)
        .context("failed to optimize demo field")?;
    info!("demo complete");

    Ok(DemoReport {
        mass: sim.mass(),
        force,
        duration: settings.duration,
        final_height: trajectory.final_height(),
        max_height: trajectory.max_height(),
        target_height: DEMO_TARGET_HEIGHT,
        optimized,
        trajectory,
    })
}
