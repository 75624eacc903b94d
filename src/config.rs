//! Slicing parameters.

use crate::camber::DEFAULT_BINS;
use crate::errors::ConfigError;
use crate::float_types::{MM_TO_CM, Real};
use crate::normalize::Flip;
use crate::plane::Axis;
use std::path::{Path, PathBuf};

/// Everything a slicing run needs besides the model itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceConfig {
    /// Normal of the slicing planes (spanwise axis of the wing).
    pub axis: Axis,

    /// Number of parallel sections.
    pub sections: usize,

    /// Points kept per normalized section.
    pub samples: usize,

    /// Fraction of the span skipped at each end, in `[0, 0.5)`.
    pub trim: Real,

    /// Merge radius for raw slice points, in model units.
    pub merge_threshold: Real,

    /// Merge radius applied again before ordering, in output units.
    pub profile_merge_threshold: Real,

    /// Chord bins for the camber fit.
    pub camber_bins: usize,

    /// Model units → output units.
    pub scale: Real,

    /// Axis negated during normalization.
    pub flip: Flip,

    /// File name prefix: `<prefix>_<index>.dat`.
    pub prefix: String,

    pub output_dir: PathBuf,

    /// Keep the per-section `.csv` records after the `.dat` files are written.
    pub keep_records: bool,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            sections: 10,
            samples: 200,
            trim: 0.05,
            merge_threshold: 1e-3,
            profile_merge_threshold: 1e-5,
            camber_bins: DEFAULT_BINS,
            scale: MM_TO_CM,
            flip: Flip::Chord,
            prefix: "section".to_string(),
            output_dir: PathBuf::from("sections"),
            keep_records: false,
        }
    }
}

impl SliceConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_sections(mut self, sections: usize) -> Self {
        self.sections = sections;
        self
    }

    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    #[must_use]
    pub fn with_trim(mut self, trim: Real) -> Self {
        self.trim = trim;
        self
    }

    #[must_use]
    pub fn with_merge_threshold(mut self, threshold: Real) -> Self {
        self.merge_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_profile_merge_threshold(mut self, threshold: Real) -> Self {
        self.profile_merge_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_camber_bins(mut self, bins: usize) -> Self {
        self.camber_bins = bins;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Real) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_flip(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_keep_records(mut self, keep: bool) -> Self {
        self.keep_records = keep;
        self
    }

    /// Check every parameter that does not depend on the model.
    ///
    /// # Errors
    /// The first invalid parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections == 0 {
            return Err(ConfigError::ZeroSections);
        }
        if self.samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.camber_bins == 0 {
            return Err(ConfigError::ZeroBins);
        }
        if !(0.0..0.5).contains(&self.trim) {
            return Err(ConfigError::TrimRatio(self.trim));
        }
        for threshold in [self.merge_threshold, self.profile_merge_threshold] {
            if !(threshold.is_finite() && threshold > 0.0) {
                return Err(ConfigError::MergeThreshold(threshold));
            }
        }
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(ConfigError::ScaleFactor(self.scale));
        }
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        Ok(())
    }

    /// Transient record file of section `index`.
    pub fn record_path(&self, index: usize) -> PathBuf {
        self.section_path(index, "csv")
    }

    /// Final coordinate file of section `index`.
    pub fn coords_path(&self, index: usize) -> PathBuf {
        self.section_path(index, "dat")
    }

    fn section_path(&self, index: usize, extension: &str) -> PathBuf {
        Path::new(&self.output_dir).join(format!("{}_{index}.{extension}", self.prefix))
    }
}
