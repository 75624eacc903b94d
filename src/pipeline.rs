//! The full run: planes from bounds, one section per plane, one closed
//! profile file per non-empty section.
//!
//! Each section goes through two stages that hand off through a record file:
//!
//! 1. cut → merge → drop plane axis → normalize → `<prefix>_<i>.csv`
//! 2. `<prefix>_<i>.csv` → merge → camber fit → order → `<prefix>_<i>.dat`
//!
//! The record file is removed once the coordinate file exists, unless
//! [`SliceConfig::keep_records`] is set.

use crate::config::SliceConfig;
use crate::errors::PipelineError;
use crate::float_types::Real;
use crate::io::{self, coords, records};
use crate::merge::merge_duplicates;
use crate::normalize::normalize_section;
use crate::plane::{Plane, plane_positions, planes_along};
use crate::profile::OrderedProfile;
use crate::section::Section;
use crate::traits::Sliceable;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum SectionOutcome {
    Written { path: PathBuf, points: usize },
    /// The plane does not cut the solid; no file was written.
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionReport {
    pub index: usize,
    /// Plane position along the slicing axis.
    pub position: Real,
    pub outcome: SectionOutcome,
}

/// What a run produced, one entry per plane in plane order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineReport {
    pub sections: Vec<SectionReport>,
}

impl PipelineReport {
    /// Paths of all coordinate files written, in section order.
    pub fn written(&self) -> Vec<&PathBuf> {
        self.sections
            .iter()
            .filter_map(|s| match &s.outcome {
                SectionOutcome::Written { path, .. } => Some(path),
                SectionOutcome::Skipped => None,
            })
            .collect()
    }

    pub fn skipped(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.outcome == SectionOutcome::Skipped)
            .count()
    }
}

/// The planes a run will cut `solid` with.
///
/// # Errors
/// [`PipelineError::Config`] for invalid parameters or a solid without extent
/// along the slicing axis.
pub fn section_planes<T: Sliceable + ?Sized>(
    solid: &T,
    config: &SliceConfig,
) -> Result<Vec<Plane>, PipelineError> {
    config.validate()?;
    let (min, max) = solid.bounding_box().interval(config.axis);
    let positions = plane_positions(min, max, config.trim, config.sections)?;
    Ok(planes_along(config.axis, &positions))
}

/// Slice `solid` and write one ordered profile per non-empty section.
///
/// All configuration checks happen before the first cut. Planes that miss the
/// solid are reported as skipped, not as errors.
///
/// # Errors
/// Invalid configuration, or any file that cannot be written or read back;
/// the latter carry the section index.
pub fn extract_profiles<T: Sliceable + Sync + ?Sized>(
    solid: &T,
    config: &SliceConfig,
) -> Result<PipelineReport, PipelineError> {
    let planes = section_planes(solid, config)?;
    io::ensure_dir(&config.output_dir)?;

    info!(
        axis = %config.axis,
        sections = planes.len(),
        samples = config.samples,
        output_dir = %config.output_dir.display(),
        "Starting section extraction"
    );

    #[cfg(feature = "parallel")]
    let iter = planes.par_iter().enumerate();
    #[cfg(not(feature = "parallel"))]
    let iter = planes.iter().enumerate();

    let sections = iter
        .map(|(index, plane)| process_section(solid, index, *plane, config))
        .collect::<Result<Vec<_>, _>>()?;

    let report = PipelineReport { sections };
    info!(
        written = report.written().len(),
        skipped = report.skipped(),
        "Section extraction complete"
    );
    Ok(report)
}

/// Run both stages for one plane.
///
/// # Errors
/// File failures, tagged with `index`.
pub fn process_section<T: Sliceable + ?Sized>(
    solid: &T,
    index: usize,
    plane: Plane,
    config: &SliceConfig,
) -> Result<SectionReport, PipelineError> {
    let position = plane.offset();
    let section = Section::cut(solid, index, plane);

    let profile = match write_normalized(&section, config)? {
        Some(_) => order_record(index, config)?,
        None => None,
    };
    let outcome = match profile {
        Some(profile) => SectionOutcome::Written {
            path: config.coords_path(index),
            points: profile.len(),
        },
        None => {
            info!(index, position, "Section skipped, plane misses the solid");
            SectionOutcome::Skipped
        },
    };

    Ok(SectionReport {
        index,
        position,
        outcome,
    })
}

/// Stage 1: merge, project and normalize `section`, then write its record file.
///
/// Returns the record path, or `None` (and writes nothing) for an empty section.
///
/// # Errors
/// The record file cannot be written.
pub fn write_normalized(
    section: &Section,
    config: &SliceConfig,
) -> Result<Option<PathBuf>, PipelineError> {
    let merged = merge_duplicates(&section.points, config.merge_threshold)?;
    let projected = Section::project(&merged, &section.plane);
    let Some(normalized) =
        normalize_section(&projected, config.samples, config.scale, config.flip)
    else {
        return Ok(None);
    };

    debug!(
        index = section.index,
        raw = section.points.len(),
        merged = merged.len(),
        samples = normalized.len(),
        "Section normalized"
    );

    let path = config.record_path(section.index);
    records::write_records(&path, &normalized)
        .map_err(|e| PipelineError::section(section.index, e))?;
    Ok(Some(path))
}

/// Stage 2: read the record of section `index` back, order it into a closed
/// profile and write the coordinate file.
///
/// Returns `None` (and writes nothing, removing the record) if the record
/// holds no usable rows.
///
/// # Errors
/// The record cannot be read, or the coordinate file cannot be written, or the
/// record cannot be removed afterwards.
pub fn order_record(
    index: usize,
    config: &SliceConfig,
) -> Result<Option<OrderedProfile>, PipelineError> {
    let record_path = config.record_path(index);
    let points =
        records::read_records(&record_path).map_err(|e| PipelineError::section(index, e))?;
    let deduped = merge_duplicates(&points, config.profile_merge_threshold)?;

    let Some(profile) = OrderedProfile::build(&deduped, config.camber_bins) else {
        remove_record(index, config)?;
        return Ok(None);
    };

    if profile.is_single_branch() {
        let (upper, lower) = profile.surface_counts();
        warn!(index, upper, lower, "Profile has a single surface");
    }
    if profile.winding_order().is_none() {
        warn!(index, points = profile.len(), "Profile encloses no area");
    }
    debug!(
        index,
        points = profile.len(),
        winding = ?profile.winding_order(),
        "Profile ordered"
    );

    let coords_path = config.coords_path(index);
    coords::write_coords(&coords_path, profile.points())
        .map_err(|e| PipelineError::section(index, e))?;
    remove_record(index, config)?;
    Ok(Some(profile))
}

fn remove_record(index: usize, config: &SliceConfig) -> Result<(), PipelineError> {
    if config.keep_records {
        return Ok(());
    }
    io::remove_file(&config.record_path(index)).map_err(|e| PipelineError::section(index, e))
}
