use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use ballistic_aim::config::{load_scenarios, load_weapons};
use ballistic_aim::export::{intercept as intercept_export, trajectory, writer_for_path};
use ballistic_aim::intercept::InterceptOutcome;
use ballistic_aim::scenario::{self, describe_unreachable, select_weapon};
use ballistic_aim::stationary::sample_trajectory;
use clap::Parser;
use log::info;

/// Solve a moving-target intercept described by a scenario file.
#[derive(Parser, Debug)]
#[command(author, version, about = "Moving-target intercept solver")]
struct Cli {
    /// Scenario file (YAML list or TOML) or directory of TOML scenarios
    #[arg(long, default_value = "configs/scenarios")]
    scenario: PathBuf,

    /// Scenario name (case-insensitive, defaults to the first entry)
    #[arg(long)]
    name: Option<String>,

    /// Weapon catalog used with --weapon
    #[arg(long, default_value = "configs/weapons.yaml")]
    weapons: PathBuf,

    /// Replace the scenario's weapon with a catalog entry (case-insensitive)
    #[arg(long)]
    weapon: Option<String>,

    /// Optional JSON summary output (use '-' for stdout; the report then goes to stderr)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Optional CSV of the firing-plane trajectory of the converged shot
    #[arg(long)]
    trajectory: Option<PathBuf>,

    /// Samples per exported trajectory
    #[arg(long, default_value_t = 100)]
    samples: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let catalog = load_scenarios(&cli.scenario)?;
    let mut scenario = scenario::select(&catalog, cli.name.as_deref())?;
    if let Some(name) = &cli.weapon {
        let weapons = load_weapons(&cli.weapons)?;
        scenario.weapon = select_weapon(&weapons, name)?;
        info!("weapon overridden with catalog entry '{name}'");
    }
    info!(
        "running scenario '{}' (step {} s, horizon {} s)",
        scenario.name, scenario.search.time_step, scenario.search.max_time
    );

    let outcome = scenario.solve()?;

    let mut report = String::new();
    writeln!(report, "=== Intercept: {} ===", scenario.name)?;
    match &outcome {
        InterceptOutcome::Hit(solution) => {
            let direction = solution.aim_direction();
            writeln!(
                report,
                "Aim            : elevation = {:.3} deg, bearing = {:.3} deg",
                solution.angle.to_degrees(),
                solution.bearing.to_degrees()
            )?;
            writeln!(
                report,
                "Impact         : t = {:.3} s (converged at t_guess = {:.3} s, {} candidates)",
                solution.time_to_impact, solution.guess_time, solution.iterations
            )?;
            writeln!(
                report,
                "Aim point      : ({:.3}, {:.3}, {:.3})",
                solution.aim_point[0], solution.aim_point[1], solution.aim_point[2]
            )?;
            writeln!(
                report,
                "Direction      : ({:.4}, {:.4}, {:.4})",
                direction[0], direction[1], direction[2]
            )?;

            if let Some(path) = &cli.trajectory {
                let samples = sample_trajectory(
                    solution.angle,
                    &scenario.weapon,
                    solution.time_to_impact,
                    cli.samples,
                );
                let mut writer = writer_for_path(path)?;
                trajectory::write_all(&mut *writer, &samples)?;
                info!("wrote {} trajectory samples to {}", samples.len(), path.display());
            }
        }
        InterceptOutcome::Unreachable(reason) => {
            writeln!(report, "Unreachable    : {}", describe_unreachable(reason))?;
        }
    }

    let json_on_stdout = cli.json.as_deref() == Some(Path::new("-"));
    if json_on_stdout {
        eprint!("{report}");
    } else {
        print!("{report}");
    }

    if let Some(path) = &cli.json {
        intercept_export::write_summary(path, &scenario.summary(&outcome))?;
        info!("wrote intercept summary to {}", path.display());
    }

    Ok(())
}
