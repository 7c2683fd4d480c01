use std::path::PathBuf;

use anyhow::bail;
use ballistic_aim::config::load_weapons;
use ballistic_aim::export::{trajectory, writer_for_path};
use ballistic_aim::scenario::select_weapon;
use ballistic_aim::stationary::{
    AimSolution, Arm, PlanarOffset, StationaryAim, WeaponSpec, apex_height, sample_trajectory,
    solve_stationary, time_of_flight,
};
use clap::{Parser, ValueEnum};
use log::info;

/// Solve the launch angles that hit a fixed target in the firing plane.
#[derive(Parser, Debug)]
#[command(author, version, about = "Stationary ballistic aim solver (low/high arcs)")]
struct Cli {
    /// Muzzle speed (distance units per second)
    #[arg(long, conflicts_with = "weapon")]
    speed: Option<f64>,

    /// Projectile gravity (distance units per second squared)
    #[arg(long, conflicts_with = "weapon")]
    gravity: Option<f64>,

    /// Weapon catalog (YAML list)
    #[arg(long, default_value = "configs/weapons.yaml")]
    weapons: PathBuf,

    /// Weapon name from the catalog (case-insensitive)
    #[arg(long)]
    weapon: Option<String>,

    /// Horizontal distance to the target (sign is ignored)
    #[arg(long, allow_hyphen_values = true)]
    x: f64,

    /// Height of the target above the muzzle
    #[arg(long, allow_hyphen_values = true)]
    y: f64,

    /// Arc written to the trajectory CSV
    #[arg(long, value_enum, default_value_t = ArcChoice::Low)]
    arc: ArcChoice,

    /// Samples per exported trajectory
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// Optional trajectory CSV output (use '-' for stdout)
    #[arg(long)]
    trajectory: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ArcChoice {
    Low,
    High,
}

fn resolve_weapon(cli: &Cli) -> anyhow::Result<WeaponSpec> {
    if let Some(name) = &cli.weapon {
        let catalog = load_weapons(&cli.weapons)?;
        let weapon = select_weapon(&catalog, name)?;
        info!("using catalog weapon '{}' from {}", name, cli.weapons.display());
        return Ok(weapon);
    }
    match (cli.speed, cli.gravity) {
        (Some(speed), Some(gravity)) => Ok(WeaponSpec::new(speed, gravity)?),
        _ => bail!("either --weapon or both --speed and --gravity are required"),
    }
}

fn print_solution(label: &str, solution: AimSolution, offset: PlanarOffset, weapon: &WeaponSpec) {
    match time_of_flight(offset, solution.angle, weapon) {
        Some(t) => println!(
            "{label} : angle = {:.3} deg, time = {:.3} s, apex = {:.3}",
            solution.angle.to_degrees(),
            t,
            apex_height(solution.angle, weapon)
        ),
        None => println!(
            "{label} : angle = {:.3} deg, time = n/a",
            solution.angle.to_degrees()
        ),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let weapon = resolve_weapon(&cli)?;
    let offset = PlanarOffset::new(cli.x, cli.y);
    let aim = solve_stationary(offset, &weapon)?;
    info!("solved target ({}, {}) -> {:?}", cli.x, cli.y, aim);

    let (Some(low), Some(high)) = (aim.low(), aim.high()) else {
        println!(
            "Target ({:.3}, {:.3}) is unreachable (flat range {:.3})",
            cli.x,
            cli.y,
            weapon.max_flat_range()
        );
        return Ok(());
    };

    println!("=== Stationary Aim ===");
    match aim {
        StationaryAim::Single(_) => print_solution("Single  ", low, offset, &weapon),
        _ => {
            print_solution("Low arc ", low, offset, &weapon);
            print_solution("High arc", high, offset, &weapon);
        }
    }

    if let Some(path) = &cli.trajectory {
        let arm = match cli.arc {
            ArcChoice::Low => Arm::Low,
            ArcChoice::High => Arm::High,
        };
        let Some(solution) = aim.arm(arm) else {
            return Ok(());
        };
        let duration = time_of_flight(offset, solution.angle, &weapon).unwrap_or(0.0);
        let samples = sample_trajectory(solution.angle, &weapon, duration, cli.samples);
        let mut writer = writer_for_path(path)?;
        trajectory::write_all(&mut *writer, &samples)?;
        info!("wrote {} trajectory samples to {}", samples.len(), path.display());
    }

    Ok(())
}
