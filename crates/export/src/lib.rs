//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod trajectory {
    use aim_stationary::TrajectorySample;
    use std::io::{self, Write};

    const HEADER: &str = "time_s,x,y";

    /// Write the trajectory CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Serialize one sample to CSV, matching the header ordering.
    pub fn write_sample(writer: &mut dyn Write, sample: &TrajectorySample) -> io::Result<()> {
        writeln!(
            writer,
            "{:.6},{:.6},{:.6}",
            sample.time_s, sample.x, sample.y
        )
    }

    /// Header plus every sample, flushed at the end.
    pub fn write_all(writer: &mut dyn Write, samples: &[TrajectorySample]) -> io::Result<()> {
        write_header(writer)?;
        for sample in samples {
            write_sample(writer, sample)?;
        }
        writer.flush()
    }
}

pub mod intercept {
    use aim_intercept::{InterceptOutcome, UnreachablePolicy, UnreachableReason};
    use aim_stationary::{Arm, WeaponSpec};
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    /// Converged aim.
    #[derive(Debug, Clone, Serialize)]
    pub struct HitSummary {
        pub angle_rad: f64,
        pub angle_deg: f64,
        pub arm: Arm,
        pub time_to_impact_s: f64,
        pub guess_time_s: f64,
        pub bearing_rad: f64,
        pub aim_point: [f64; 3],
        pub aim_direction: [f64; 3],
        pub iterations: usize,
    }

    /// JSON sidecar describing one intercept run.
    #[derive(Debug, Clone, Serialize)]
    pub struct Summary {
        pub scenario: String,
        pub weapon: WeaponSpec,
        pub time_step_s: f64,
        pub max_time_s: f64,
        pub policy: UnreachablePolicy,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hit: Option<HitSummary>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub unreachable: Option<UnreachableReason>,
    }

    impl HitSummary {
        /// Flatten a world-space outcome; `None` when the search missed.
        pub fn from_outcome(outcome: &InterceptOutcome<[f64; 3]>) -> Option<Self> {
            let solution = outcome.hit()?;
            Some(Self {
                angle_rad: solution.angle,
                angle_deg: solution.angle.to_degrees(),
                arm: solution.arm,
                time_to_impact_s: solution.time_to_impact,
                guess_time_s: solution.guess_time,
                bearing_rad: solution.bearing,
                aim_point: solution.aim_point,
                aim_direction: solution.aim_direction(),
                iterations: solution.iterations,
            })
        }
    }

    /// Write the summary as pretty-printed JSON (stdout for `-`).
    pub fn write_summary(path: &Path, summary: &Summary) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        to_writer_pretty(&mut writer, summary)?;
        writeln!(writer)?;
        writer.flush()
    }
}
