//! Command-line front end: load an STL model and write one profile file per section.

use airfoil_slicer::float_types::{MM_TO_CM, Real};
use airfoil_slicer::normalize::Flip;
use airfoil_slicer::pipeline::SectionOutcome;
use airfoil_slicer::plane::Axis;
use airfoil_slicer::{SliceConfig, TriMesh, extract_profiles};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Slice a wing model into ordered airfoil profiles
#[derive(Parser)]
#[command(name = "airfoil-slicer")]
#[command(about = "Extract airfoil cross-sections from an STL model", long_about = None)]
#[command(version)]
struct Cli {
    /// STL model to slice (ASCII or binary)
    #[arg(name = "MODEL")]
    model: PathBuf,

    /// Normal of the slicing planes
    #[arg(long, default_value_t = Axis::Y)]
    axis: Axis,

    /// Number of sections
    #[arg(long, default_value_t = 10)]
    sections: usize,

    /// Points kept per section
    #[arg(long, default_value_t = 200)]
    samples: usize,

    /// Fraction of the span skipped at each end
    #[arg(long, default_value_t = 0.05)]
    trim: Real,

    /// Output file prefix
    #[arg(long, default_value = "section")]
    prefix: String,

    /// Directory for the coordinate files
    #[arg(long, default_value = "sections")]
    output_dir: PathBuf,

    /// Merge radius for raw slice points, in model units
    #[arg(long, default_value_t = 1e-3)]
    merge_threshold: Real,

    /// Merge radius applied again before ordering, in output units
    #[arg(long, default_value_t = 1e-5)]
    profile_merge_threshold: Real,

    /// Model units → output units (default: mm to cm)
    #[arg(long, default_value_t = MM_TO_CM)]
    scale: Real,

    /// Chord bins for the camber fit
    #[arg(long, default_value_t = 100)]
    bins: usize,

    /// Axis negated during normalization: none, chord or depth
    #[arg(long, default_value = "chord")]
    flip: Flip,

    /// Keep the per-section .csv records
    #[arg(long)]
    keep_records: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Every [`SliceConfig`] field is reachable from the command line.
    fn slice_config(&self) -> SliceConfig {
        SliceConfig::default()
            .with_axis(self.axis)
            .with_sections(self.sections)
            .with_samples(self.samples)
            .with_trim(self.trim)
            .with_prefix(self.prefix.clone())
            .with_output_dir(self.output_dir.clone())
            .with_merge_threshold(self.merge_threshold)
            .with_profile_merge_threshold(self.profile_merge_threshold)
            .with_scale(self.scale)
            .with_camber_bins(self.bins)
            .with_flip(self.flip)
            .with_keep_records(self.keep_records)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.slice_config();
    if let Err(e) = config.validate() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    let mesh = match TriMesh::from_stl_file(&cli.model) {
        Ok(mesh) => mesh,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        },
    };
    info!(
        model = %cli.model.display(),
        triangles = mesh.triangles().len(),
        "Model loaded"
    );

    match extract_profiles(&mesh, &config) {
        Ok(report) => {
            for section in &report.sections {
                if let SectionOutcome::Written { path, points } = &section.outcome {
                    println!("{}\t{points}", path.display());
                }
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_slice_config() {
        let cli = Cli::try_parse_from(["airfoil-slicer", "wing.stl"]).expect("parse");
        assert_eq!(cli.slice_config(), SliceConfig::default());
    }

    #[test]
    fn scale_and_profile_merge_threshold_are_exposed() {
        let cli = Cli::try_parse_from([
            "airfoil-slicer",
            "wing.stl",
            "--scale",
            "0.001",
            "--profile-merge-threshold",
            "0.0002",
            "--axis",
            "Z",
            "--flip",
            "depth",
        ])
        .expect("parse");
        let config = cli.slice_config();
        assert_eq!(config.scale, 0.001);
        assert_eq!(config.profile_merge_threshold, 0.0002);
        assert_eq!(config.axis, Axis::Z);
        assert_eq!(config.flip, Flip::Depth);
    }
}
